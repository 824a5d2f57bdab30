//! Full configuration validation.
//!
//! Validates numeric ranges and color formats. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into
//! a single `ConfigError`.

mod galaxy;
mod helpers;
mod scene;
mod universe;


use crate::schema::ExplorerConfig;
use odyssey_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ExplorerConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    galaxy::validate_galaxy(&mut errors, config);
    universe::validate_universe(&mut errors, config);
    scene::validate_window(&mut errors, config);
    scene::validate_camera(&mut errors, config);
    scene::validate_scene(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
