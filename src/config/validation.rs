//! Settings validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (known log levels, non-empty paths)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: EditorSettings → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::EditorSettings;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A semantic problem in the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown log level {0:?}")]
    UnknownLogLevel(String),

    #[error("messages.catalog_path is empty")]
    EmptyCatalogPath,
}

pub fn validate_settings(settings: &EditorSettings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let level = settings.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            settings.observability.log_level.clone(),
        ));
    }

    if let Some(path) = &settings.messages.catalog_path {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError::EmptyCatalogPath);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
