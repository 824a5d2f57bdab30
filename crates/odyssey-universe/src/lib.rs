//! Scene content for the explorer, independent of the GPU.
//!
//! Builds the galaxy point field, the odyssey population, their ring
//! layout, and the connection curves between them. Every generator takes
//! an explicit `Rng` so runs can be reproduced from a seed.

pub mod connections;
pub mod curve;
pub mod factory;
pub mod galaxy;
pub mod layout;
pub mod odyssey;
pub mod universe;

pub use connections::{build_curves, ConnectionCurve, CurveSettings};
pub use curve::QuadraticBezier;
pub use factory::OdysseyFactory;
pub use galaxy::{generate_points, GalaxyField, GalaxyParams};
pub use layout::{Ring, RingLayout, VerticalSpawn};
pub use odyssey::{Connection, Odyssey};
pub use universe::Universe;
