//! wgpu rendering for the explorer: orbit camera, textured odyssey spheres,
//! connection lines, the additive galaxy point field, an equirectangular
//! skybox, and the egui debug overlay.

pub mod camera;
pub mod connections;
pub mod galaxy;
pub mod gpu;
pub mod perf;
pub mod render_state;
pub mod skybox;
pub mod sphere;
pub mod texture;

pub use camera::OrbitCamera;
pub use galaxy::{GalaxyLayer, GpuSlot, Release};
pub use gpu::{GpuContext, RendererError};
pub use perf::FrameTimer;
pub use render_state::{FrameStatus, OverlayFrame, RenderState};
