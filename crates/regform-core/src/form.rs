#![forbid(unsafe_code)]

//! The registration form controller.
//!
//! [`RegistrationForm`] owns the field values, the error map and the phase.
//! A rendering layer calls the `on_*` handlers in response to user input and
//! reads [`state`](RegistrationForm::state), [`errors`](RegistrationForm::errors)
//! and [`phase`](RegistrationForm::phase) afterwards to re-render.
//!
//! # Phases
//!
//! ```text
//!            field changes, rejected submit
//!               ┌──────────┐
//!               ▼          │
//!           ┌─────────┐    │   accepted submit   ┌───────────┐
//!   start ─►│ Editing │────┴────────────────────►│ Submitted │
//!           └─────────┘◄─────────────────────────└───────────┘
//!                                reset
//! ```
//!
//! Events that have no transition from the current phase return a
//! [`TransitionError`] and leave the form unchanged.
//!
//! # Example
//!
//! ```rust
//! use regform_core::{FormPhase, RegistrationForm, SubmitOutcome};
//!
//! let mut form = RegistrationForm::new();
//! form.on_email_change("test@example.com")?;
//! form.on_country_change(Some("Canada".to_string()))?;
//! form.on_terms_change(true)?;
//! assert_eq!(form.on_submit()?, SubmitOutcome::Accepted);
//! assert_eq!(form.phase(), FormPhase::Submitted);
//!
//! form.on_reset()?;
//! assert!(form.state().is_default());
//! # Ok::<(), regform_core::TransitionError>(())
//! ```

use std::fmt;

use crate::config::{FormConfig, ValidationTiming};
use crate::errors::ErrorMap;
use crate::field::{FieldKey, FieldSet};
use crate::state::{FormPhase, FormState, Registration};
use crate::validation::{ValidationMode, validate_all, validate_email_field};

// ---------------------------------------------------------------------------
// Events and outcomes
// ---------------------------------------------------------------------------

/// A user interaction the form reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The email text field changed.
    EmailChanged(String),
    /// A country was picked, or the selection was cleared.
    CountryChanged(Option<String>),
    /// The terms checkbox was toggled.
    TermsChanged(bool),
    /// The register button was pressed.
    Submit,
    /// The register-another-user button was pressed.
    Reset,
}

impl FormEvent {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::EmailChanged(_) => "email_changed",
            Self::CountryChanged(_) => "country_changed",
            Self::TermsChanged(_) => "terms_changed",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the form is now submitted.
    Accepted,
    /// At least one field failed; the errors are in [`RegistrationForm::errors`].
    Rejected,
}

/// An event arrived in a phase that has no transition for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    /// Field changes and submit are only accepted while editing.
    AlreadySubmitted {
        /// The rejected event.
        event: &'static str,
    },
    /// Reset is only accepted after a successful submit.
    NotSubmitted,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadySubmitted { event } => {
                write!(f, "cannot handle {event}: form is already submitted")
            }
            Self::NotSubmitted => f.write_str("cannot reset: form has not been submitted"),
        }
    }
}

impl std::error::Error for TransitionError {}

/// Owned copy of everything a view needs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormSnapshot {
    /// Current phase.
    pub phase: FormPhase,
    /// Field values.
    pub state: FormState,
    /// Current field errors.
    pub errors: ErrorMap,
}

// ---------------------------------------------------------------------------
// RegistrationForm
// ---------------------------------------------------------------------------

/// Registration form model: values, errors, phase and touched fields.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    config: FormConfig,
    state: FormState,
    errors: ErrorMap,
    phase: FormPhase,
    touched: FieldSet,
}

impl RegistrationForm {
    /// A new form with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A new form with `config`.
    #[must_use]
    pub fn with_config(config: FormConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Current field values.
    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Current field errors; an absent field has no error.
    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Which view should be shown.
    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Whether a valid submission has occurred since the last reset.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.phase.is_submitted()
    }

    /// Whether the user has changed `field` since the form was created or reset.
    #[must_use]
    pub fn is_touched(&self, field: FieldKey) -> bool {
        self.touched.contains(field)
    }

    /// Fields the user has changed, in display order.
    pub fn touched_fields(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.touched.iter()
    }

    /// Whether no field has been changed yet.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.touched.is_empty()
    }

    /// The confirmed details, only while submitted.
    #[must_use]
    pub fn registration(&self) -> Option<Registration<'_>> {
        if !self.is_submitted() {
            return None;
        }
        Some(Registration {
            email: &self.state.email,
            country: self.state.country().unwrap_or_default(),
            terms_accepted: self.state.terms_accepted,
        })
    }

    /// Owned copy of phase, values and errors.
    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            phase: self.phase,
            state: self.state.clone(),
            errors: self.errors.clone(),
        }
    }

    /// Switch validation timing. Switching to on-submit hides current errors.
    pub fn set_timing(&mut self, timing: ValidationTiming) {
        if self.config.timing == timing {
            return;
        }
        self.config.timing = timing;
        if timing == ValidationTiming::OnSubmit && !self.errors.is_empty() {
            tracing::debug!(cleared = self.errors.len(), "errors hidden until submit");
            self.errors = ErrorMap::new();
        }
    }

    // -- Handlers --

    /// Store a new email value and refresh its live error.
    ///
    /// The required rule is not applied here: an empty email clears the error.
    pub fn on_email_change(&mut self, value: impl Into<String>) -> Result<(), TransitionError> {
        self.ensure_editing("email_changed")?;
        let value = self.config.email_input.normalize(value.into());
        let error = validate_email_field(&value, ValidationMode::Live).into_error();

        self.state.email = value;
        self.touched.insert(FieldKey::Email);

        let errors = std::mem::take(&mut self.errors);
        self.errors = match (error, self.config.timing) {
            (Some(error), ValidationTiming::RealTime) => {
                tracing::debug!(field = %FieldKey::Email, code = %error.code, "error set");
                errors.with(FieldKey::Email, error)
            }
            // Deferred timing keeps whatever the last submit reported.
            (Some(_), ValidationTiming::OnSubmit) => errors,
            (None, _) => {
                if errors.contains(FieldKey::Email) {
                    tracing::debug!(field = %FieldKey::Email, "error cleared");
                }
                errors.without(FieldKey::Email)
            }
        };
        Ok(())
    }

    /// Store a new country selection; a present value clears the country error.
    ///
    /// Values outside the configured catalog are kept but logged.
    pub fn on_country_change(&mut self, value: Option<String>) -> Result<(), TransitionError> {
        self.ensure_editing("country_changed")?;
        if let Some(name) = value.as_deref()
            && !name.is_empty()
            && !self.config.countries.contains(name)
        {
            tracing::warn!(country = name, "country not in catalog");
        }

        let present = value.as_deref().is_some_and(|name| !name.is_empty());
        self.state.country = value;
        self.touched.insert(FieldKey::Country);

        if present && self.errors.contains(FieldKey::Country) {
            tracing::debug!(field = %FieldKey::Country, "error cleared");
            self.errors = std::mem::take(&mut self.errors).without(FieldKey::Country);
        }
        Ok(())
    }

    /// Store the terms checkbox; ticking it clears the terms error.
    pub fn on_terms_change(&mut self, accepted: bool) -> Result<(), TransitionError> {
        self.ensure_editing("terms_changed")?;
        self.state.terms_accepted = accepted;
        self.touched.insert(FieldKey::Terms);

        if accepted && self.errors.contains(FieldKey::Terms) {
            tracing::debug!(field = %FieldKey::Terms, "error cleared");
            self.errors = std::mem::take(&mut self.errors).without(FieldKey::Terms);
        }
        Ok(())
    }

    /// Validate every field. On success the form moves to
    /// [`FormPhase::Submitted`]; otherwise the error map is replaced and the
    /// entered values are left as they are.
    pub fn on_submit(&mut self) -> Result<SubmitOutcome, TransitionError> {
        self.ensure_editing("submit")?;
        let errors = validate_all(&self.state);

        if errors.is_empty() {
            self.errors = ErrorMap::new();
            self.phase = FormPhase::Submitted;
            tracing::info!("registration submitted");
            Ok(SubmitOutcome::Accepted)
        } else {
            let fields: Vec<&str> = errors.fields().map(FieldKey::as_str).collect();
            tracing::debug!(errors = errors.len(), fields = %fields.join(","), "submit rejected");
            self.errors = errors;
            Ok(SubmitOutcome::Rejected)
        }
    }

    /// Return to an empty form. Only valid after a successful submit.
    pub fn on_reset(&mut self) -> Result<(), TransitionError> {
        if !self.is_submitted() {
            tracing::warn!("reset ignored: form not submitted");
            return Err(TransitionError::NotSubmitted);
        }
        self.state = FormState::default();
        self.errors = ErrorMap::new();
        self.touched = FieldSet::default();
        self.phase = FormPhase::Editing;
        tracing::info!("form reset");
        Ok(())
    }

    /// Route an event to its handler and return the resulting phase.
    pub fn dispatch(&mut self, event: FormEvent) -> Result<FormPhase, TransitionError> {
        let _span = tracing::debug_span!("regform.dispatch", event = event.name()).entered();
        match event {
            FormEvent::EmailChanged(value) => self.on_email_change(value)?,
            FormEvent::CountryChanged(value) => self.on_country_change(value)?,
            FormEvent::TermsChanged(accepted) => self.on_terms_change(accepted)?,
            FormEvent::Submit => {
                self.on_submit()?;
            }
            FormEvent::Reset => self.on_reset()?,
        }
        Ok(self.phase)
    }

    fn ensure_editing(&self, event: &'static str) -> Result<(), TransitionError> {
        if self.is_submitted() {
            tracing::warn!(event, "event ignored: form already submitted");
            return Err(TransitionError::AlreadySubmitted { event });
        }
        Ok(())
    }
}
