//! The SSH deploy form: what a presentation layer talks to.

use std::rc::Rc;

use crate::deploy::{ConfigDocument, DeployDefaults, Field};
use crate::editor::binding::FieldBinding;
use crate::editor::store::{DocumentStore, Snapshot};
use crate::validation::{ErrorMap, Schema};

/// One editor instance over one deploy record.
///
/// Reads go through [`DeployForm::current_value`] and
/// [`DeployForm::error_for`]; writes go through [`DeployForm::edit`].
#[derive(Debug)]
pub struct DeployForm {
    store: DocumentStore,
    bindings: [FieldBinding; 4],
    validate_on_mount: bool,
}

impl DeployForm {
    /// A form over a new, unsaved record.
    pub fn new(schema: Schema) -> Self {
        Self::with_document(schema, ConfigDocument::new())
    }

    /// A form over a record handed in by the host.
    pub fn with_document(schema: Schema, document: ConfigDocument) -> Self {
        Self {
            store: DocumentStore::new(schema, document),
            bindings: Field::ALL.map(FieldBinding::for_field),
            validate_on_mount: false,
        }
    }

    /// Validate the record at mount instead of waiting for the first edit.
    pub fn validate_on_mount(mut self, enabled: bool) -> Self {
        self.validate_on_mount = enabled;
        self
    }

    /// Prepare the form for display.
    ///
    /// Clears errors left by a previous use of this instance, then seeds new
    /// records with `defaults`.
    pub fn mount(&mut self, defaults: &DeployDefaults) {
        self.store.reset_errors();
        self.initialize_if_new(defaults);
        if self.validate_on_mount {
            self.store.revalidate();
        }
        tracing::info!(
            new = self.store.document().is_new(),
            errors = self.store.errors().len(),
            "Deploy form mounted"
        );
    }

    /// Seed defaults when the record has no identifier.
    pub fn initialize_if_new(&mut self, defaults: &DeployDefaults) -> bool {
        self.store.initialize(defaults)
    }

    pub fn binding(&self, field: Field) -> &FieldBinding {
        &self.bindings[field.index()]
    }

    pub fn bindings(&self) -> &[FieldBinding] {
        &self.bindings
    }

    pub fn current_value(&self, field: Field) -> String {
        self.binding(field).current_value(&self.store)
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.binding(field).error(&self.store)
    }

    /// Feed raw input for `field` through the edit pipeline.
    pub fn edit(&mut self, field: Field, raw_input: &str) {
        let binding = *self.binding(field);
        binding.on_edit(&mut self.store, raw_input);
    }

    /// True while any field is in violation; hosts block saving on it.
    pub fn has_errors(&self) -> bool {
        !self.store.errors().is_empty()
    }

    pub fn document(&self) -> Rc<ConfigDocument> {
        self.store.document()
    }

    pub fn errors(&self) -> &ErrorMap {
        self.store.errors()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DocumentStore {
        &mut self.store
    }
}
