#![forbid(unsafe_code)]

//! Selectable country list.

/// Countries offered by default, in display order.
pub const DEFAULT_COUNTRIES: [&str; 10] = [
    "United States",
    "United Kingdom",
    "Canada",
    "Australia",
    "Germany",
    "France",
    "India",
    "Japan",
    "Brazil",
    "Mexico",
];

/// The ordered list of countries a rendering layer offers for selection.
///
/// Validation never consults the catalog; it only checks that a country is
/// present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCatalog {
    names: Vec<String>,
}

impl Default for CountryCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRIES)
    }
}

impl CountryCatalog {
    /// Build a catalog from names, keeping their order and dropping duplicates.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !out.contains(&name) {
                out.push(name);
            }
        }
        Self { names: out }
    }

    /// Whether `name` is offered (exact match).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Names whose text contains `query`, ignoring case, in catalog order.
    ///
    /// An empty query matches everything.
    pub fn filter<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        let needle = query.to_lowercase();
        self.names
            .iter()
            .map(String::as_str)
            .filter(move |name| needle.is_empty() || name.to_lowercase().contains(&needle))
    }

    /// All names in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of countries offered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing is offered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
