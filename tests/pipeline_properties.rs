//! Consistency guarantees of the edit → validate → publish pipeline.

use deploy_editor::{ConfigDocument, DeployDefaults, Field};

mod common;

const SAMPLES: [Option<&str>; 4] = [None, Some(""), Some("/a.crt"), Some(" x ")];

fn documents() -> Vec<ConfigDocument> {
    let mut out = vec![ConfigDocument::new()];
    for cert in SAMPLES {
        for key in SAMPLES {
            let mut document = ConfigDocument::new().with_config(DeployDefaults::default().to_config());
            let config = document.config.get_or_insert_with(Default::default);
            config.cert_path = cert.map(str::to_string);
            config.key_path = key.map(str::to_string);
            out.push(document);
        }
    }
    out
}

#[test]
fn test_validation_is_idempotent() {
    let schema = common::schema();
    for document in documents() {
        assert_eq!(schema.validate(&document), schema.validate(&document));
    }
}

#[test]
fn test_error_keys_are_exactly_the_violated_fields() {
    let schema = common::schema();
    for document in documents() {
        let errors = schema.validate(&document);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            common::empty_paths(&document),
            "document: {document:?}"
        );
    }
}

#[test]
fn test_edit_does_not_touch_prior_snapshot() {
    let mut form = common::mounted_form();
    let before = form.document();
    let before_copy = (*before).clone();

    form.edit(Field::CertPath, "/new.crt");
    form.edit(Field::PreCommand, "echo pre");

    assert_eq!(*before, before_copy);
    assert_eq!(before.value(Field::CertPath), Some("/etc/nginx/ssl/nginx.crt"));
    assert_ne!(*form.document(), before_copy);
}

#[test]
fn test_every_snapshot_carries_its_own_errors() {
    let mut form = common::mounted_form();
    let seen = common::record_snapshots(&mut form);

    for (field, value) in [
        (Field::CertPath, ""),
        (Field::KeyPath, ""),
        (Field::Command, "reload"),
        (Field::CertPath, "/a.crt"),
        (Field::KeyPath, " /a.key "),
    ] {
        form.edit(field, value);
    }

    let schema = common::schema();
    let seen = seen.borrow();
    assert_eq!(seen.len(), 5);
    for snapshot in seen.iter() {
        assert_eq!(*snapshot.errors, schema.validate(&snapshot.document));
    }
    assert!(seen.last().map_or(false, |snapshot| snapshot.errors.is_empty()));
}

#[test]
fn test_last_edit_wins() {
    let mut form = common::mounted_form();

    form.edit(Field::Command, "first");
    form.edit(Field::Command, "second");

    assert_eq!(form.current_value(Field::Command), "second");
}

#[test]
fn test_check_agrees_with_validate() {
    let schema = common::schema();
    for document in documents() {
        let errors = schema.validate(&document);
        match schema.check(&document) {
            Ok(()) => assert!(errors.is_empty()),
            Err(violations) => assert_eq!(violations, errors.violations()),
        }
    }
}
