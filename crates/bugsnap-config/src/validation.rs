// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as known log levels and sane sampling temperatures.

use crate::diagnostic::ConfigError;
use crate::model::BugsnapConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &BugsnapConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.app.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "app.log_level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.app.log_level
            ),
        });
    }

    if config.gemini.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gemini.model must not be empty".to_string(),
        });
    }

    if !(0.0..=2.0).contains(&config.gemini.temperature) {
        errors.push(ConfigError::Validation {
            message: format!(
                "gemini.temperature must be between 0.0 and 2.0, got {}",
                config.gemini.temperature
            ),
        });
    }

    if config.gemini.max_output_tokens == 0 {
        errors.push(ConfigError::Validation {
            message: "gemini.max_output_tokens must be at least 1".to_string(),
        });
    }

    if config.history.path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "history.path must not be empty".to_string(),
        });
    }

    if let Some(cmd) = &config.camera.capture_command
        && cmd.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "camera.capture_command must not be empty when set".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = BugsnapConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn unknown_log_level_fails_validation() {
        let mut config = BugsnapConfig::default();
        config.app.log_level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("log_level"))
        ));
    }

    #[test]
    fn out_of_range_temperature_fails_validation() {
        let mut config = BugsnapConfig::default();
        config.gemini.temperature = 3.5;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("temperature"))
        ));
    }

    #[test]
    fn empty_history_path_fails_validation() {
        let mut config = BugsnapConfig::default();
        config.history.path = "".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("history.path"))
        ));
    }

    #[test]
    fn blank_capture_command_fails_validation() {
        let mut config = BugsnapConfig::default();
        config.camera.capture_command = Some("   ".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("capture_command"))
        ));
    }

    #[test]
    fn model_deserializes_straight_from_toml() {
        let config: BugsnapConfig =
            toml::from_str("[gemini]\ntemperature = 1.5\n").expect("partial TOML deserializes");
        assert_eq!(config.gemini.temperature, 1.5);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn valid_custom_config_passes() {
        let mut config = BugsnapConfig::default();
        config.app.log_level = "debug".to_string();
        config.gemini.temperature = 0.0;
        config.camera.capture_command = Some("fswebcam --no-banner {output}".to_string());
        assert!(validate_config(&config).is_ok());
    }
}
