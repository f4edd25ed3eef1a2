//! Settings schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::deploy::DeployDefaults;

/// Root settings for the deploy editor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EditorSettings {
    /// Form behavior.
    pub editor: EditorConfig,

    /// Where display messages come from.
    pub messages: MessagesConfig,

    /// Values seeded into new records.
    pub defaults: DeployDefaults,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Form behavior.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EditorConfig {
    /// Validate a loaded record at mount. Off by default: errors stay hidden
    /// until the first edit.
    pub validate_on_mount: bool,
}

/// Message catalog settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MessagesConfig {
    /// TOML catalog layered over the built-in English messages.
    pub catalog_path: Option<PathBuf>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
