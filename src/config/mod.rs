//! Editor settings.
//!
//! # Data Flow
//! ```text
//! settings file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → EditorSettings (validated, immutable)
//!     → logging level, message catalog, form behavior, new-record defaults
//! ```
//!
//! # Design Decisions
//! - Every section has defaults so an empty or missing file is valid
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_settings, load_settings_or_default, ConfigError};
pub use schema::{EditorConfig, EditorSettings, MessagesConfig, ObservabilityConfig};
