//! Configuration document schema for the SSH deploy target.
//!
//! All types derive Serde traits so a host can hand documents over as JSON
//! or TOML. Wire names follow the host's camelCase record layout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Certificate path seeded into new documents.
pub const DEFAULT_CERT_PATH: &str = "/etc/nginx/ssl/nginx.crt";

/// Private key path seeded into new documents.
pub const DEFAULT_KEY_PATH: &str = "/etc/nginx/ssl/nginx.key";

/// Reload command seeded into new documents.
pub const DEFAULT_COMMAND: &str = "sudo service nginx reload";

/// An editable field of the SSH deploy config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Remote path the certificate chain is written to.
    CertPath,
    /// Remote path the private key is written to.
    KeyPath,
    /// Shell command run before the files are uploaded.
    PreCommand,
    /// Shell command run after the files are uploaded.
    Command,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 4] = [Field::CertPath, Field::KeyPath, Field::PreCommand, Field::Command];

    /// Wire name of the field inside `config`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::CertPath => "certPath",
            Field::KeyPath => "keyPath",
            Field::PreCommand => "preCommand",
            Field::Command => "command",
        }
    }

    /// Position of the field in [`Field::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Field::CertPath => 0,
            Field::KeyPath => 1,
            Field::PreCommand => 2,
            Field::Command => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field name that does not belong to the SSH deploy config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown config field: {0:?}")]
pub struct FieldParseError(pub String);

impl FromStr for Field {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FieldParseError(s.to_string()))
    }
}

/// Named string fields of the SSH deploy target.
///
/// Every field is optional on the wire; readers treat an absent value as the
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshDeployConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_command: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl SshDeployConfig {
    /// Current value of `field`, if set.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::CertPath => self.cert_path.as_deref(),
            Field::KeyPath => self.key_path.as_deref(),
            Field::PreCommand => self.pre_command.as_deref(),
            Field::Command => self.command.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::CertPath => &mut self.cert_path,
            Field::KeyPath => &mut self.key_path,
            Field::PreCommand => &mut self.pre_command,
            Field::Command => &mut self.command,
        }
    }
}

/// Values seeded into `config` when a new (unsaved) record is opened.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeployDefaults {
    pub cert_path: String,
    pub key_path: String,
    pub pre_command: String,
    pub command: String,
}

impl Default for DeployDefaults {
    fn default() -> Self {
        Self {
            cert_path: DEFAULT_CERT_PATH.to_string(),
            key_path: DEFAULT_KEY_PATH.to_string(),
            pre_command: String::new(),
            command: DEFAULT_COMMAND.to_string(),
        }
    }
}

impl DeployDefaults {
    /// Build a fully populated config from these defaults.
    pub fn to_config(&self) -> SshDeployConfig {
        SshDeployConfig {
            cert_path: Some(self.cert_path.clone()),
            key_path: Some(self.key_path.clone()),
            pre_command: Some(self.pre_command.clone()),
            command: Some(self.command.clone()),
        }
    }
}

/// The deploy record being edited.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ConfigDocument {
    /// Record identifier, assigned once the host has persisted the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Target settings. Absent until the record is first initialized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<SshDeployConfig>,

    /// Remaining keys of the host record, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigDocument {
    /// A new, unsaved record with no config yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A record the host has already persisted under `id`.
    pub fn with_id(id: impl Into<String>, config: SshDeployConfig) -> Self {
        Self {
            id: Some(id.into()),
            config: Some(config),
            extra: Map::new(),
        }
    }

    /// True when the record has not been persisted yet.
    ///
    /// An empty identifier counts as missing.
    pub fn is_new(&self) -> bool {
        self.id.as_deref().map_or(true, str::is_empty)
    }

    /// Current value of `field`, if both `config` and the field are present.
    pub fn value(&self, field: Field) -> Option<&str> {
        self.config.as_ref().and_then(|config| config.get(field))
    }

    /// Copy of this document with `config[field]` replaced.
    ///
    /// `config` is created when absent. `self` is left untouched.
    pub fn with_field(&self, field: Field, value: String) -> Self {
        let mut next = self.clone();
        *next.config.get_or_insert_with(SshDeployConfig::default).slot_mut(field) = Some(value);
        next
    }

    /// Copy of this document with the whole `config` replaced.
    pub fn with_config(&self, config: SshDeployConfig) -> Self {
        Self {
            config: Some(config),
            ..self.clone()
        }
    }
}
