//! Localized message lookup.
//!
//! # Responsibilities
//! - Provide the `t(key)` lookup the schema uses to build its messages
//! - Ship an English catalog and load others from TOML
//!
//! # Design Decisions
//! - Nested TOML tables flatten to dotted keys (`a.b.c`)
//! - A missing key translates to the key itself so gaps stay visible
//! - The editor core holds no display text of its own

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Message keys used by the SSH deploy form.
pub mod keys {
    pub const CERT_PATH_LABEL: &str = "domain.deployment.form.file_cert_path.label";
    pub const CERT_PATH_PLACEHOLDER: &str = "domain.deployment.form.file_cert_path.placeholder";
    pub const KEY_PATH_LABEL: &str = "domain.deployment.form.file_key_path.label";
    pub const KEY_PATH_PLACEHOLDER: &str = "domain.deployment.form.file_key_path.placeholder";
    pub const PRE_COMMAND_LABEL: &str = "domain.deployment.form.shell_pre_command.label";
    pub const PRE_COMMAND_PLACEHOLDER: &str = "domain.deployment.form.shell_pre_command.placeholder";
    pub const COMMAND_LABEL: &str = "domain.deployment.form.shell_command.label";
    pub const COMMAND_PLACEHOLDER: &str = "domain.deployment.form.shell_command.placeholder";
}

/// Looks up display text by key.
pub trait Translator {
    fn t(&self, key: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn t(&self, key: &str) -> String {
        self(key)
    }
}

/// Error type for catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Message {key:?} must be a string")]
    NotAString { key: String },
}

/// A flat key → message table.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    /// The built-in English messages.
    pub fn english() -> Self {
        let messages = [
            (keys::CERT_PATH_LABEL, "Certificate Save Path"),
            (keys::CERT_PATH_PLACEHOLDER, "Please enter certificate save path"),
            (keys::KEY_PATH_LABEL, "Private Key Save Path"),
            (keys::KEY_PATH_PLACEHOLDER, "Please enter private key save path"),
            (keys::PRE_COMMAND_LABEL, "Pre-deployment Command"),
            (keys::PRE_COMMAND_PLACEHOLDER, "Command to be executed before deploying the certificate"),
            (keys::COMMAND_LABEL, "Command"),
            (keys::COMMAND_PLACEHOLDER, "Please enter command"),
        ];
        Self {
            messages: messages
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let table: toml::Table = toml::from_str(content)?;
        let mut messages = HashMap::new();
        flatten(&table, "", &mut messages)?;
        Ok(Self { messages })
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(path = ?path, messages = catalog.len(), "Message catalog loaded");
        Ok(catalog)
    }

    /// Layer `other` on top of this catalog; its entries win.
    pub fn merge(mut self, other: Catalog) -> Self {
        self.messages.extend(other.messages);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for Catalog {
    fn t(&self, key: &str) -> String {
        match self.get(key) {
            Some(message) => message.to_string(),
            None => {
                tracing::warn!(key, "Missing message key");
                key.to_string()
            }
        }
    }
}

fn flatten(
    table: &toml::Table,
    prefix: &str,
    out: &mut HashMap<String, String>,
) -> Result<(), CatalogError> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            toml::Value::String(message) => {
                out.insert(key, message.clone());
            }
            toml::Value::Table(nested) => flatten(nested, &key, out)?,
            _ => return Err(CatalogError::NotAString { key }),
        }
    }
    Ok(())
}
