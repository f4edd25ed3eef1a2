//! Deploy target documents.
//!
//! # Data Flow
//! ```text
//! host record (JSON/TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → ConfigDocument (immutable snapshot)
//!     → editor::DocumentStore (replaced wholesale on every edit)
//! ```
//!
//! # Design Decisions
//! - Documents are never mutated in place; edits build a new document
//! - Unknown top-level keys of the host record travel with every copy
//! - `config` stays absent until a new record is initialized with defaults

pub mod document;
pub mod loader;

pub use document::{ConfigDocument, DeployDefaults, Field, FieldParseError, SshDeployConfig};
pub use loader::{load_document, parse_document, DocumentFormat, LoadError};
