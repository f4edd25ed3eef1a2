//! Interactive editing of deploy documents.
//!
//! # Data Flow
//! ```text
//! keystroke
//!     → binding.rs (transform input, copy-on-write document)
//!     → store.rs set() (replace document)
//!     → validation::Schema (recompute ErrorMap in full)
//!     → store.rs publishes Snapshot { document, errors }
//!     → form.rs / subscribers re-read value and error per field
//! ```
//!
//! # Design Decisions
//! - One synchronous pass per edit; no subscriber sees a document without its errors
//! - Errors flow one way, downstream of validation; bindings never write them
//! - Invalid input is stored and reported, never rejected at the input
//! - Mount clears errors before anything is validated

pub mod binding;
pub mod form;
pub mod store;

pub use binding::{FieldBinding, Transform};
pub use form::DeployForm;
pub use store::{DocumentStore, Snapshot, StoreState, SubscriptionId};
