//! Constraint violations and the per-field error map.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use crate::deploy::Field;

/// A field whose current value breaks one of its constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldConstraintViolation {
    pub field: Field,
    pub message: String,
}

/// Field → message for every field currently in violation.
///
/// Satisfied fields are never present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<Field, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message for `field`, if it is in violation.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Fields in violation, in display order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.entries.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// The map as a list of violations.
    pub fn violations(&self) -> Vec<FieldConstraintViolation> {
        self.iter()
            .map(|(field, message)| FieldConstraintViolation {
                field,
                message: message.to_string(),
            })
            .collect()
    }

    pub(crate) fn insert(&mut self, field: Field, message: String) {
        self.entries.insert(field, message);
    }
}

impl FromIterator<FieldConstraintViolation> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = FieldConstraintViolation>>(iter: I) -> Self {
        let mut map = ErrorMap::new();
        for violation in iter {
            // First violation per field wins.
            map.entries.entry(violation.field).or_insert(violation.message);
        }
        map
    }
}

impl Serialize for ErrorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, message) in &self.entries {
            map.serialize_entry(field.as_str(), message)?;
        }
        map.end()
    }
}
