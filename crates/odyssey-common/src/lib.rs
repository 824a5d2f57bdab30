pub mod errors;
pub mod types;

pub use errors::{ConfigError, ExplorerError};
pub use types::{Color, Vec3};

pub type Result<T> = std::result::Result<T, ExplorerError>;
