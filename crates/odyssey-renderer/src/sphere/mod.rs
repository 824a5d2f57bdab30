//! Odyssey sphere rendering: mesh generation, instance grouping, and the
//! textured instanced pipeline.

pub mod matrix;
mod mesh;
mod pipeline;
mod types;

pub use mesh::*;
pub use pipeline::*;
pub use types::*;
