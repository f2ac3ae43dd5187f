#![forbid(unsafe_code)]

//! Form configuration.

use crate::countries::CountryCatalog;

/// How email input is stored before validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmailInput {
    /// Keep the value exactly as typed. Surrounding spaces fail the format check.
    #[default]
    Verbatim,
    /// Strip leading and trailing whitespace on every change.
    Trimmed,
}

impl EmailInput {
    pub(crate) fn normalize(self, value: String) -> String {
        match self {
            Self::Verbatim => value,
            Self::Trimmed => {
                let trimmed = value.trim();
                if trimmed.len() == value.len() {
                    value
                } else {
                    trimmed.to_string()
                }
            }
        }
    }
}

/// When field errors become visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationTiming {
    /// Format errors appear as the user types.
    #[default]
    RealTime,
    /// Field changes only clear errors; new errors appear on submit.
    OnSubmit,
}

impl ValidationTiming {
    /// The other timing.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::RealTime => Self::OnSubmit,
            Self::OnSubmit => Self::RealTime,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::RealTime => "Real-time",
            Self::OnSubmit => "On Submit",
        }
    }
}

/// Settings for a [`RegistrationForm`](crate::RegistrationForm).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormConfig {
    /// Countries offered for selection.
    pub countries: CountryCatalog,
    /// Email normalization.
    pub email_input: EmailInput,
    /// Live or deferred error reporting.
    pub timing: ValidationTiming,
}

impl FormConfig {
    /// Use a different country list.
    #[must_use]
    pub fn countries(mut self, countries: CountryCatalog) -> Self {
        self.countries = countries;
        self
    }

    /// Set email normalization.
    #[must_use]
    pub fn email_input(mut self, email_input: EmailInput) -> Self {
        self.email_input = email_input;
        self
    }

    /// Set validation timing.
    #[must_use]
    pub fn timing(mut self, timing: ValidationTiming) -> Self {
        self.timing = timing;
        self
    }
}
