//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! deploy / editor / i18n / config produce:
//!     → tracing events with structured fields
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, level from settings or RUST_LOG)
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; the binary installs the subscriber
//! - Edits log at trace, store replacements at debug, lifecycle at info

pub mod logging;
