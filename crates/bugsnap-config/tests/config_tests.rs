// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the BugSnap configuration system.

use bugsnap_config::diagnostic::ConfigError;
use bugsnap_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_bugsnap_config() {
    let toml = r#"
[app]
name = "test-bugsnap"
log_level = "debug"

[gemini]
api_key = "AIza-test-123"
model = "gemini-2.5-flash"
temperature = 0.2
max_output_tokens = 1024

[history]
path = "/tmp/history.json"

[camera]
capture_command = "fswebcam --no-banner {output}"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.app.name, "test-bugsnap");
    assert_eq!(config.app.log_level, "debug");
    assert_eq!(config.gemini.api_key.as_deref(), Some("AIza-test-123"));
    assert_eq!(config.gemini.model, "gemini-2.5-flash");
    assert_eq!(config.gemini.temperature, 0.2);
    assert_eq!(config.gemini.max_output_tokens, 1024);
    assert_eq!(config.history.path, "/tmp/history.json");
    assert_eq!(
        config.camera.capture_command.as_deref(),
        Some("fswebcam --no-banner {output}")
    );
}

/// Unknown field in [gemini] section produces an error.
#[test]
fn unknown_field_in_gemini_produces_error() {
    let toml = r#"
[gemini]
api_kye = "abc"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    // Figment wraps serde's deny_unknown_fields error
    assert!(
        err_str.contains("unknown field") || err_str.contains("api_kye"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let toml = "";
    let config = load_config_from_str(toml).expect("empty TOML should use defaults");

    assert_eq!(config.app.name, "bugsnap");
    assert_eq!(config.app.log_level, "info");
    assert!(config.gemini.api_key.is_none());
    assert_eq!(config.gemini.model, "gemini-2.5-flash");
    assert_eq!(config.gemini.temperature, 0.4);
    assert_eq!(config.gemini.max_output_tokens, 2048);
    assert!(config.history.path.ends_with("history.json"));
    assert!(config.camera.capture_command.is_none());
}

/// Validation errors surface through load_and_validate_str.
#[test]
fn validation_errors_are_collected() {
    let toml = r#"
[app]
log_level = "shouting"

[gemini]
temperature = 9.0
"#;
    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert_eq!(errors.len(), 2, "both errors should be collected");
    assert!(errors.iter().all(|e| matches!(e, ConfigError::Validation { .. })));
}

/// Unknown keys produce a diagnostic with a typo suggestion and a span
/// pointing into the source that contains the key.
#[test]
fn unknown_key_diagnostic_carries_suggestion_and_span() {
    let toml = r#"
[gemini]
modle = "gemini-2.5-flash"
"#;
    let errors = load_and_validate_str(toml).expect_err("should reject unknown key");
    let unknown = errors
        .iter()
        .find_map(|e| match e {
            ConfigError::UnknownKey { key, suggestion, span, src, .. } if key == "modle" => {
                Some((suggestion, span, src))
            }
            _ => None,
        })
        .expect("an UnknownKey diagnostic for `modle`");

    let (suggestion, span, src) = unknown;
    assert_eq!(suggestion.as_deref(), Some("model"));
    let span = span.as_ref().expect("span into the TOML source");
    assert_eq!(&toml[span.offset()..span.offset() + span.len()], "modle");
    assert!(src.is_some(), "source content should be attached");
}

/// Wrong value types are reported as InvalidValue diagnostics naming the
/// dotted key path.
#[test]
fn wrong_type_produces_invalid_value_diagnostic() {
    let toml = r#"
[gemini]
max_output_tokens = "lots"
"#;
    let errors = load_and_validate_str(toml).expect_err("should reject wrong type");
    assert!(
        errors.iter().any(|e| matches!(
            e,
            ConfigError::InvalidValue { key, .. } if key.contains("max_output_tokens")
        )),
        "got: {errors:?}"
    );
}
