#![forbid(unsafe_code)]

//! Field identifiers.

use std::fmt;

/// One of the three registration fields.
///
/// The string form (`email`, `country`, `terms`) is the key a rendering
/// layer uses to look up per-field errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldKey {
    /// The email text field.
    Email,
    /// The country selection.
    Country,
    /// The terms checkbox.
    Terms,
}

impl FieldKey {
    /// All fields in display order.
    pub const ALL: [Self; 3] = [Self::Email, Self::Country, Self::Terms];

    /// Stable lowercase key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Country => "country",
            Self::Terms => "terms",
        }
    }

    /// Parse a key produced by [`FieldKey::as_str`].
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == key)
    }

    const fn index(self) -> usize {
        match self {
            Self::Email => 0,
            Self::Country => 1,
            Self::Terms => 2,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed-size set of fields, used for touched tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldSet([bool; 3]);

impl FieldSet {
    /// Add a field to the set.
    pub fn insert(&mut self, field: FieldKey) {
        self.0[field.index()] = true;
    }

    /// Whether the set contains `field`.
    #[must_use]
    pub fn contains(&self, field: FieldKey) -> bool {
        self.0[field.index()]
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|&b| b)
    }

    /// Members in display order.
    pub fn iter(&self) -> impl Iterator<Item = FieldKey> + '_ {
        FieldKey::ALL.into_iter().filter(|f| self.contains(*f))
    }
}
