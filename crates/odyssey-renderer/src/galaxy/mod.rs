//! Galaxy point-field rendering.
//!
//! Points are camera-facing quads with size attenuation and a one-pixel
//! minimum, blended additively without writing depth. The instance buffer
//! and material live in a [`GpuSlot`] so regeneration releases the old
//! pair before the new one is installed.

mod pipeline;
mod slot;

pub use pipeline::*;
pub use slot::*;
