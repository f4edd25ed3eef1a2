//! Document validation.
//!
//! # Responsibilities
//! - Evaluate a declarative schema against a document
//! - Project violations into a per-field error map for display
//!
//! # Design Decisions
//! - Returns all violations, not just the first field that fails
//! - Validation is a pure function: ConfigDocument → ErrorMap
//! - Only the first failing check of a field is reported
//! - A malformed schema is rejected when it is built, never at validation time

pub mod errors;
pub mod schema;

pub use errors::{ErrorMap, FieldConstraintViolation};
pub use schema::{Check, Constraint, Schema, SchemaBuilder, SchemaError};
