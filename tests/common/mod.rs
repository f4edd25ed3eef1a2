//! Shared helpers for editor integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use deploy_editor::editor::Snapshot;
use deploy_editor::i18n::Catalog;
use deploy_editor::{ConfigDocument, DeployDefaults, DeployForm, Field, Schema};

/// The SSH deploy schema with English messages.
pub fn schema() -> Schema {
    Schema::ssh_deploy(&Catalog::english()).expect("built-in schema is well formed")
}

/// A form over a new record, mounted with the stock defaults.
pub fn mounted_form() -> DeployForm {
    let mut form = DeployForm::new(schema());
    form.mount(&DeployDefaults::default());
    form
}

/// A saved record with every field filled in.
#[allow(dead_code)]
pub fn saved_record(id: &str) -> ConfigDocument {
    let mut document = ConfigDocument::new().with_config(DeployDefaults::default().to_config());
    document.id = Some(id.to_string());
    document
        .extra
        .insert("name".into(), serde_json::Value::String("edge-1".into()));
    document
}

/// Subscribe to `form` and collect every published snapshot.
#[allow(dead_code)]
pub fn record_snapshots(form: &mut DeployForm) -> Rc<RefCell<Vec<Snapshot>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    form.store_mut()
        .subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));
    seen
}

/// Fields whose value is empty or absent in `document`.
#[allow(dead_code)]
pub fn empty_paths(document: &ConfigDocument) -> Vec<Field> {
    [Field::CertPath, Field::KeyPath]
        .into_iter()
        .filter(|field| document.value(*field).unwrap_or_default().is_empty())
        .collect()
}
