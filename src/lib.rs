//! Schema-validated, incrementally edited SSH deploy configurations.
//!
//! Each keystroke produces a new immutable document, the document is
//! revalidated in full, and per-field errors are published together with it.

pub mod config;
pub mod deploy;
pub mod editor;
pub mod i18n;
pub mod observability;
pub mod validation;

pub use deploy::{ConfigDocument, DeployDefaults, Field};
pub use editor::{DeployForm, DocumentStore};
pub use validation::{ErrorMap, Schema};
