#![forbid(unsafe_code)]

//! Per-field error map.
//!
//! An absent key means the field currently has no error. Updates go through
//! [`ErrorMap::with`] and [`ErrorMap::without`], which consume the map and
//! return the updated one, so an entry is always replaced or removed and
//! never accumulated.

use std::collections::BTreeMap;
use std::fmt;

use crate::field::FieldKey;
use crate::validation::ValidationError;

/// Mapping from field to its current validation error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ErrorMap {
    entries: BTreeMap<FieldKey, ValidationError>,
}

impl ErrorMap {
    /// An empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the map with `field` set to `error`, replacing any previous entry.
    #[must_use]
    pub fn with(mut self, field: FieldKey, error: ValidationError) -> Self {
        self.entries.insert(field, error);
        self
    }

    /// Return the map with any entry for `field` removed.
    #[must_use]
    pub fn without(mut self, field: FieldKey) -> Self {
        self.entries.remove(&field);
        self
    }

    /// Return the map with `field` set to `error`, or removed when `None`.
    #[must_use]
    pub fn with_result(self, field: FieldKey, error: Option<ValidationError>) -> Self {
        match error {
            Some(error) => self.with(field, error),
            None => self.without(field),
        }
    }

    /// The error for `field`, if any.
    #[must_use]
    pub fn get(&self, field: FieldKey) -> Option<&ValidationError> {
        self.entries.get(&field)
    }

    /// The message for `field`, if any.
    #[must_use]
    pub fn message(&self, field: FieldKey) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    /// Whether `field` currently has an error.
    #[must_use]
    pub fn contains(&self, field: FieldKey) -> bool {
        self.entries.contains_key(&field)
    }

    /// Number of fields with an error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fields with errors, in display order.
    pub fn fields(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.entries.keys().copied()
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &ValidationError)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }
}

impl FromIterator<(FieldKey, ValidationError)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (FieldKey, ValidationError)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
            first = false;
        }
        Ok(())
    }
}
