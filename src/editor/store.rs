//! The document store: current document, its errors, and subscribers.

use std::fmt;
use std::rc::Rc;

use crate::deploy::{ConfigDocument, DeployDefaults};
use crate::validation::{ErrorMap, Schema};

/// A document together with the errors computed for it.
///
/// Snapshots are cheap to clone and never change once published. The store
/// is single-threaded, so they are shared with `Rc`.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub document: Rc<ConfigDocument>,
    pub errors: Rc<ErrorMap>,
}

/// Handle returned by [`DocumentStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Where the store is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// No `config` yet; a new record that has not been seeded.
    Uninitialized,
    /// `config` is present and edits are flowing.
    Initialized,
}

type Subscriber = Box<dyn FnMut(&Snapshot)>;

/// Owns the document being edited.
///
/// Every replacement goes through [`DocumentStore::set`], which validates and
/// publishes before returning. Subscribers only ever see a shared snapshot, so
/// they cannot feed a new document back in while being notified.
pub struct DocumentStore {
    schema: Schema,
    document: Rc<ConfigDocument>,
    errors: Rc<ErrorMap>,
    seeded: bool,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl DocumentStore {
    /// Create a store holding `document` with no errors yet.
    pub fn new(schema: Schema, document: ConfigDocument) -> Self {
        Self {
            schema,
            document: Rc::new(document),
            errors: Rc::new(ErrorMap::new()),
            seeded: false,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn document(&self) -> Rc<ConfigDocument> {
        Rc::clone(&self.document)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            document: Rc::clone(&self.document),
            errors: Rc::clone(&self.errors),
        }
    }

    pub fn state(&self) -> StoreState {
        if self.document.config.is_some() {
            StoreState::Initialized
        } else {
            StoreState::Uninitialized
        }
    }

    /// Replace the document, revalidate, then notify subscribers.
    ///
    /// Last writer wins; nothing is merged.
    pub fn set(&mut self, document: ConfigDocument) {
        let errors = self.schema.validate(&document);
        tracing::debug!(
            id = document.id.as_deref().unwrap_or(""),
            errors = errors.len(),
            "Document replaced"
        );
        self.document = Rc::new(document);
        self.errors = Rc::new(errors);
        self.notify();
    }

    /// Recompute errors for the current document and notify.
    pub fn revalidate(&mut self) {
        let errors = self.schema.validate(&self.document);
        tracing::debug!(errors = errors.len(), "Document revalidated");
        self.errors = Rc::new(errors);
        self.notify();
    }

    /// Seed `config` with `defaults` if the document has no identifier.
    ///
    /// Runs at most once per loaded document. Returns whether it seeded.
    pub fn initialize(&mut self, defaults: &DeployDefaults) -> bool {
        if self.seeded || !self.document.is_new() {
            return false;
        }
        self.seeded = true;
        let seeded = self.document.with_config(defaults.to_config());
        tracing::info!("New deploy record seeded with defaults");
        self.set(seeded);
        true
    }

    /// Clear every error and notify.
    pub fn reset_errors(&mut self) {
        self.errors = Rc::new(ErrorMap::new());
        tracing::debug!("Errors reset");
        self.notify();
    }

    /// Swap in an externally loaded document.
    ///
    /// Errors are cleared rather than computed, so the loaded record shows no
    /// errors until the next `set` or `revalidate`.
    pub fn load(&mut self, document: ConfigDocument) {
        tracing::info!(
            id = document.id.as_deref().unwrap_or(""),
            "Document loaded into store"
        );
        self.document = Rc::new(document);
        self.errors = Rc::new(ErrorMap::new());
        self.seeded = false;
        self.notify();
    }

    /// Register a callback run after every publish.
    pub fn subscribe(&mut self, callback: impl FnMut(&Snapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        for (_, callback) in &mut self.subscribers {
            callback(&snapshot);
        }
    }
}

impl fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentStore")
            .field("document", &self.document)
            .field("errors", &self.errors)
            .field("seeded", &self.seeded)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deploy::{Field, SshDeployConfig};
    use crate::i18n::Catalog;
    use std::cell::RefCell;

    fn store(document: ConfigDocument) -> DocumentStore {
        DocumentStore::new(Schema::ssh_deploy(&Catalog::english()).unwrap(), document)
    }

    #[test]
    fn test_state_machine() {
        let mut store = store(ConfigDocument::new());
        assert_eq!(store.state(), StoreState::Uninitialized);

        assert!(store.initialize(&DeployDefaults::default()));
        assert_eq!(store.state(), StoreState::Initialized);
        assert!(store.errors().is_empty());

        // Second call is a no-op even if the config was cleared by a later set.
        store.set(ConfigDocument::new());
        assert!(!store.initialize(&DeployDefaults::default()));
        assert_eq!(store.state(), StoreState::Uninitialized);
    }

    #[test]
    fn test_initialize_skips_persisted_records() {
        let config = SshDeployConfig {
            cert_path: Some("/custom.crt".into()),
            ..Default::default()
        };
        let mut store = store(ConfigDocument::with_id("rec1", config));

        assert!(!store.initialize(&DeployDefaults::default()));
        assert_eq!(store.document().value(Field::CertPath), Some("/custom.crt"));
        assert_eq!(store.document().value(Field::Command), None);
    }

    #[test]
    fn test_subscribers_see_matching_errors() {
        let mut store = store(ConfigDocument::new());
        let schema = Schema::ssh_deploy(&Catalog::english()).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |snapshot| {
            let expected = schema.validate(&snapshot.document);
            sink.borrow_mut().push(*snapshot.errors == expected);
        });

        store.initialize(&DeployDefaults::default());
        store.set(store.document().with_field(Field::CertPath, String::new()));
        store.set(store.document().with_field(Field::CertPath, "/a.crt".into()));

        assert_eq!(*seen.borrow(), vec![true, true, true]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = store(ConfigDocument::new());
        let count = Rc::new(RefCell::new(0));

        let sink = Rc::clone(&count);
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.reset_errors();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.reset_errors();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_load_clears_errors_and_allows_reseeding() {
        let mut store = store(ConfigDocument::new());
        store.set(ConfigDocument::new());
        assert!(!store.errors().is_empty());

        store.load(ConfigDocument::new());
        assert!(store.errors().is_empty());
        assert!(store.initialize(&DeployDefaults::default()));
    }

    #[test]
    fn test_snapshots_outlive_replacement() {
        let mut store = store(ConfigDocument::new());
        store.initialize(&DeployDefaults::default());
        let before = store.snapshot();

        store.set(store.document().with_field(Field::KeyPath, String::new()));

        assert!(before.errors.is_empty());
        assert_eq!(before.document.value(Field::KeyPath), Some("/etc/nginx/ssl/nginx.key"));
        assert!(store.errors().contains(Field::KeyPath));
    }

    #[test]
    fn test_snapshot_shares_current_document() {
        let mut store = store(ConfigDocument::new());
        store.initialize(&DeployDefaults::default());

        let snapshot = store.snapshot();
        assert!(Rc::ptr_eq(&snapshot.document, &store.document()));
        assert_eq!(Rc::strong_count(&snapshot.errors), 2);

        store.set(store.document().with_field(Field::Command, "reload".into()));
        assert!(!Rc::ptr_eq(&snapshot.document, &store.document()));
        assert_eq!(Rc::strong_count(&snapshot.errors), 1);
    }
}
