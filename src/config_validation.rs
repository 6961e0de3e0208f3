// Configuration validation module

use crate::config::{load_config, AppConfig};
use spellpixel_components::validate_nav_config;
use std::path::PathBuf;

/// Load and validate configuration with error recovery.
/// A broken config never aborts startup: the built-in defaults take over
/// after a warning on stderr.
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> AppConfig {
    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load configuration: {e:#}");
            eprintln!("Using default configuration");
            return AppConfig::default();
        }
    };

    if let Err(e) = validate_nav_config(&config.navigation) {
        eprintln!("Warning: Invalid navigation configuration: {e}");
        eprintln!("Using default configuration");
        return AppConfig::default();
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_and_validate_config(Some(PathBuf::from("/nonexistent/config.yaml")));
        assert_eq!(config.application.title, "SpellPixel");
        assert_eq!(config.navigation.tabs.len(), 3);
    }

    #[test]
    fn test_bundled_config_is_valid() {
        let config = load_and_validate_config(None);
        assert!(validate_nav_config(&config.navigation).is_ok());
    }
}
