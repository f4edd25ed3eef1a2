//! Per-field adapters between an input widget and the document store.

use crate::deploy::{ConfigDocument, Field};
use crate::editor::store::DocumentStore;
use crate::i18n::keys;

/// Normalization applied to raw input before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Strip leading and trailing whitespace. Used for paths.
    Trim,
    /// Store the input as typed. Used for free-text shell commands.
    Identity,
}

impl Transform {
    pub fn apply(self, raw: &str) -> String {
        match self {
            Transform::Trim => raw.trim().to_string(),
            Transform::Identity => raw.to_string(),
        }
    }
}

/// Binds one config field to one editable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBinding {
    field: Field,
    transform: Transform,
}

impl FieldBinding {
    pub const fn new(field: Field, transform: Transform) -> Self {
        Self { field, transform }
    }

    /// The binding the SSH deploy form uses for `field`.
    pub const fn for_field(field: Field) -> Self {
        let transform = match field {
            Field::CertPath | Field::KeyPath => Transform::Trim,
            Field::PreCommand | Field::Command => Transform::Identity,
        };
        Self::new(field, transform)
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Whether the field is edited in a multi-line text area.
    pub fn is_multiline(&self) -> bool {
        self.transform == Transform::Identity
    }

    /// Message key of the field label.
    pub fn label_key(&self) -> &'static str {
        match self.field {
            Field::CertPath => keys::CERT_PATH_LABEL,
            Field::KeyPath => keys::KEY_PATH_LABEL,
            Field::PreCommand => keys::PRE_COMMAND_LABEL,
            Field::Command => keys::COMMAND_LABEL,
        }
    }

    /// Message key of the input placeholder.
    pub fn placeholder_key(&self) -> &'static str {
        match self.field {
            Field::CertPath => keys::CERT_PATH_PLACEHOLDER,
            Field::KeyPath => keys::KEY_PATH_PLACEHOLDER,
            Field::PreCommand => keys::PRE_COMMAND_PLACEHOLDER,
            Field::Command => keys::COMMAND_PLACEHOLDER,
        }
    }

    /// Value to show in the input; empty when unset.
    pub fn current_value(&self, store: &DocumentStore) -> String {
        store
            .document()
            .value(self.field)
            .unwrap_or_default()
            .to_string()
    }

    /// Error to show under the input, if any.
    pub fn error<'a>(&self, store: &'a DocumentStore) -> Option<&'a str> {
        store.errors().get(self.field)
    }

    /// The document that results from typing `raw` into this field.
    ///
    /// Pure: `document` is not modified.
    pub fn candidate(&self, document: &ConfigDocument, raw: &str) -> ConfigDocument {
        document.with_field(self.field, self.transform.apply(raw))
    }

    /// Apply a keystroke: build the candidate and hand it to the store.
    pub fn on_edit(&self, store: &mut DocumentStore, raw: &str) {
        let next = self.candidate(&store.document(), raw);
        tracing::trace!(field = %self.field, len = raw.len(), "Field edited");
        store.set(next);
    }
}
