//! Reading persisted deploy records from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::deploy::document::ConfigDocument;

/// Error type for document loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported document format: {0:?} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),
}

/// On-disk encoding of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Parse a document from an in-memory string.
pub fn parse_document(content: &str, format: DocumentFormat) -> Result<ConfigDocument, LoadError> {
    let document = match format {
        DocumentFormat::Json => serde_json::from_str(content)?,
        DocumentFormat::Toml => toml::from_str(content)?,
    };
    Ok(document)
}

/// Load a document from a `.json` or `.toml` file.
pub fn load_document(path: &Path) -> Result<ConfigDocument, LoadError> {
    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = parse_document(&content, format)?;
    tracing::debug!(
        path = ?path,
        id = document.id.as_deref().unwrap_or(""),
        has_config = document.config.is_some(),
        "Deploy document loaded"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deploy::Field;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a/deploy.json")), Some(DocumentFormat::Json));
        assert_eq!(DocumentFormat::from_path(Path::new("deploy.TOML")), Some(DocumentFormat::Toml));
        assert_eq!(DocumentFormat::from_path(Path::new("deploy.yaml")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("deploy")), None);
    }

    #[test]
    fn test_parse_toml_document() {
        let content = r#"
id = "rec_42"
name = "edge-1"

[config]
certPath = "/srv/tls/site.crt"
keyPath = "/srv/tls/site.key"
command = "systemctl reload nginx"
"#;
        let doc = parse_document(content, DocumentFormat::Toml).unwrap();
        assert_eq!(doc.id.as_deref(), Some("rec_42"));
        assert_eq!(doc.value(Field::CertPath), Some("/srv/tls/site.crt"));
        assert_eq!(doc.value(Field::PreCommand), None);
        assert!(doc.extra.contains_key("name"));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let err = load_document(Path::new("deploy.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_json_file() {
        let path = std::env::temp_dir()
            .join(format!("deploy_editor_test_load_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"id":"r1","config":{"certPath":"/x.crt","keyPath":""}}"#).unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.value(Field::KeyPath), Some(""));

        // Cleanup
        std::fs::remove_file(&path).unwrap_or_default();
    }
}
