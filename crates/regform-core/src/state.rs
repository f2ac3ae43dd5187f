#![forbid(unsafe_code)]

//! Field values and form phase.

/// Values entered into the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FormState {
    /// Free-text email, empty by default.
    pub email: String,
    /// Selected country, unset by default.
    pub country: Option<String>,
    /// Whether the terms checkbox is ticked.
    pub terms_accepted: bool,
}

impl FormState {
    /// The selected country as a borrowed string.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Whether every field holds its default value.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Which view the form is in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FormPhase {
    /// Collecting input.
    #[default]
    Editing,
    /// A valid submission happened; the confirmation view is shown.
    Submitted,
}

impl FormPhase {
    /// Whether this is the confirmation phase.
    #[must_use]
    pub fn is_submitted(self) -> bool {
        self == Self::Submitted
    }

    /// Lowercase name for logs and JSON.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Editing => "editing",
            Self::Submitted => "submitted",
        }
    }
}

/// Confirmed registration details, available once submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration<'a> {
    /// Submitted email.
    pub email: &'a str,
    /// Submitted country.
    pub country: &'a str,
    /// Terms checkbox at submit time; always `true` after a valid submit.
    pub terms_accepted: bool,
}
