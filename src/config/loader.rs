//! Settings loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::EditorSettings;
use crate::config::validation::{validate_settings, ValidationError};

/// Error type for settings loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate settings from TOML text.
pub fn parse_settings(content: &str) -> Result<EditorSettings, ConfigError> {
    let settings: EditorSettings = toml::from_str(content)?;
    validate_settings(&settings).map_err(ConfigError::Validation)?;
    Ok(settings)
}

/// Load and validate settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<EditorSettings, ConfigError> {
    let content = fs::read_to_string(path)?;
    let settings = parse_settings(&content)?;
    tracing::debug!(path = ?path, "Editor settings loaded");
    Ok(settings)
}

/// Load settings from `path` when given, otherwise use defaults.
pub fn load_settings_or_default(path: Option<&Path>) -> Result<EditorSettings, ConfigError> {
    match path {
        Some(path) => load_settings(path),
        None => Ok(EditorSettings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = parse_settings("").unwrap();
        assert!(!settings.editor.validate_on_mount);
        assert_eq!(settings.observability.log_level, "info");
        assert_eq!(settings.defaults.cert_path, "/etc/nginx/ssl/nginx.crt");
    }

    #[test]
    fn test_partial_sections() {
        let settings = parse_settings(
            r#"
[editor]
validate_on_mount = true

[defaults]
command = "systemctl reload nginx"
"#,
        )
        .unwrap();

        assert!(settings.editor.validate_on_mount);
        assert_eq!(settings.defaults.command, "systemctl reload nginx");
        assert_eq!(settings.defaults.key_path, "/etc/nginx/ssl/nginx.key");
    }

    #[test]
    fn test_validation_errors_are_joined() {
        let err = parse_settings("[observability]\nlog_level = \"loud\"").unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: unknown log level \"loud\"");
    }

    #[test]
    fn test_missing_path_falls_back_to_defaults() {
        let settings = load_settings_or_default(None).unwrap();
        assert!(settings.messages.catalog_path.is_none());
    }
}
