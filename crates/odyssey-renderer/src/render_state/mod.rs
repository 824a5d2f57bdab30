//! Frame orchestration: owns the GPU context and every scene layer.

mod frame;
mod helpers;
mod overlay;
mod state;

pub use frame::FrameStatus;
pub use overlay::OverlayFrame;
pub use state::RenderState;
