//! Declarative per-field schema.

use thiserror::Error;

use crate::deploy::{ConfigDocument, Field};
use crate::i18n::{keys, Translator};
use crate::validation::errors::{ErrorMap, FieldConstraintViolation};

/// A predicate over a field's string value.
///
/// An absent value is checked as the empty string. The SSH deploy schema only
/// needs `MinLength`; `MaxLength` is there for hosts that build their own
/// schema with [`Schema::builder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// At least this many characters.
    MinLength(usize),
    /// At most this many characters.
    MaxLength(usize),
}

impl Constraint {
    pub fn is_satisfied_by(&self, value: Option<&str>) -> bool {
        let len = value.unwrap_or_default().chars().count();
        match *self {
            Constraint::MinLength(min) => len >= min,
            Constraint::MaxLength(max) => len <= max,
        }
    }
}

/// A constraint paired with the message shown when it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub constraint: Constraint,
    pub message: String,
}

impl Check {
    pub fn new(constraint: Constraint, message: impl Into<String>) -> Self {
        Self {
            constraint,
            message: message.into(),
        }
    }

    /// Shorthand for `MinLength(1)`.
    pub fn non_empty(message: impl Into<String>) -> Self {
        Self::new(Constraint::MinLength(1), message)
    }
}

/// Error raised while building a schema.
///
/// Always a programming error; hosts treat it as fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("field {0} is declared more than once")]
    DuplicateField(Field),
}

#[derive(Debug, Clone)]
struct FieldRule {
    field: Field,
    checks: Vec<Check>,
}

/// Immutable mapping from field to its ordered checks.
#[derive(Debug, Clone)]
pub struct Schema {
    rules: Vec<FieldRule>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// The SSH deploy schema.
    ///
    /// Both paths must be non-empty and report the field's placeholder text.
    /// The two commands are free text and always pass.
    pub fn ssh_deploy(t: &dyn Translator) -> Result<Self, SchemaError> {
        Schema::builder()
            .field(Field::CertPath, [Check::non_empty(t.t(keys::CERT_PATH_PLACEHOLDER))])
            .field(Field::KeyPath, [Check::non_empty(t.t(keys::KEY_PATH_PLACEHOLDER))])
            .optional(Field::PreCommand)
            .optional(Field::Command)
            .build()
    }

    /// Declared fields, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.rules.iter().map(|rule| rule.field)
    }

    /// Evaluate every declared field of `document`.
    ///
    /// Each field reports at most its first failing check.
    pub fn validate(&self, document: &ConfigDocument) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for rule in &self.rules {
            let value = document.value(rule.field);
            if let Some(check) = rule
                .checks
                .iter()
                .find(|check| !check.constraint.is_satisfied_by(value))
            {
                errors.insert(rule.field, check.message.clone());
            }
        }
        errors
    }

    /// Same evaluation as [`Schema::validate`], shaped as a `Result`.
    pub fn check(&self, document: &ConfigDocument) -> Result<(), Vec<FieldConstraintViolation>> {
        let errors = self.validate(document);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.violations())
        }
    }
}

/// Builder for [`Schema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    rules: Vec<FieldRule>,
}

impl SchemaBuilder {
    /// Declare `field` with checks evaluated in order.
    pub fn field(mut self, field: Field, checks: impl IntoIterator<Item = Check>) -> Self {
        self.rules.push(FieldRule {
            field,
            checks: checks.into_iter().collect(),
        });
        self
    }

    /// Declare `field` without constraints.
    pub fn optional(self, field: Field) -> Self {
        self.field(field, [])
    }

    pub fn build(self) -> Result<Schema, SchemaError> {
        for (i, rule) in self.rules.iter().enumerate() {
            if self.rules[..i].iter().any(|earlier| earlier.field == rule.field) {
                return Err(SchemaError::DuplicateField(rule.field));
            }
        }
        Ok(Schema { rules: self.rules })
    }
}
