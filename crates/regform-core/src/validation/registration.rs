#![forbid(unsafe_code)]

//! Registration rules built from the generic validators.
//!
//! Email has two entry points selected by [`ValidationMode`]: live feedback
//! skips the required rule so an unfinished field is not flagged, while
//! submit-time validation applies it.

use super::validators::{Accepted, And, Email, Required, Selected, ValidationResult, Validator};
use crate::errors::ErrorMap;
use crate::field::FieldKey;
use crate::state::FormState;

/// Message for a missing email.
pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
/// Message for a malformed email.
pub const MSG_EMAIL_FORMAT: &str = "Please enter a valid email address";
/// Message for a missing country.
pub const MSG_COUNTRY_REQUIRED: &str = "Country is required";
/// Message for unaccepted terms.
pub const MSG_TERMS_REQUIRED: &str = "You must accept the terms and conditions";

const EMAIL_FORMAT: Email = Email::new().with_message(MSG_EMAIL_FORMAT);
// Presence is an exact emptiness check: whitespace-only input falls through
// to the format rule.
const EMAIL_SUBMIT: And<Required, Email> = And::new(
    Required::new()
        .allow_whitespace()
        .with_message(MSG_EMAIL_REQUIRED),
    EMAIL_FORMAT,
);
const COUNTRY: Selected = Selected::new(MSG_COUNTRY_REQUIRED);
const TERMS: Accepted = Accepted::new(MSG_TERMS_REQUIRED);

/// When a field is being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// On every change; required rules are skipped.
    Live,
    /// On a submit attempt; required rules apply.
    Submit,
}

/// Validate an email value.
#[must_use]
pub fn validate_email_field(value: &str, mode: ValidationMode) -> ValidationResult {
    match mode {
        ValidationMode::Live => EMAIL_FORMAT.validate(value),
        ValidationMode::Submit => EMAIL_SUBMIT.validate(value),
    }
}

/// Validate the country selection. Any non-empty value counts as present.
#[must_use]
pub fn validate_country_field(value: Option<&str>) -> ValidationResult {
    COUNTRY.validate(&value)
}

/// Validate the terms checkbox.
#[must_use]
pub fn validate_terms_field(accepted: bool) -> ValidationResult {
    TERMS.validate(&accepted)
}

/// Run every submit-time rule and collect only the failures.
#[must_use]
pub fn validate_all(state: &FormState) -> ErrorMap {
    [
        (
            FieldKey::Email,
            validate_email_field(&state.email, ValidationMode::Submit),
        ),
        (FieldKey::Country, validate_country_field(state.country())),
        (FieldKey::Terms, validate_terms_field(state.terms_accepted)),
    ]
    .into_iter()
    .filter_map(|(field, result)| result.into_error().map(|e| (field, e)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ERROR_CODE_ACCEPTED, ERROR_CODE_EMAIL, ERROR_CODE_REQUIRED};

    #[test]
    fn empty_email_is_required_only_on_submit() {
        let submit = validate_email_field("", ValidationMode::Submit);
        assert_eq!(submit.error_message(), Some(MSG_EMAIL_REQUIRED));
        assert_eq!(submit.error().unwrap().code, ERROR_CODE_REQUIRED);

        assert!(validate_email_field("", ValidationMode::Live).is_valid());
    }

    #[test]
    fn malformed_email_fails_in_both_modes() {
        for mode in [ValidationMode::Live, ValidationMode::Submit] {
            let result = validate_email_field("invalid-email", mode);
            assert_eq!(result.error_message(), Some(MSG_EMAIL_FORMAT));
            assert_eq!(result.error().unwrap().code, ERROR_CODE_EMAIL);
        }
    }

    #[test]
    fn whitespace_email_is_a_format_error() {
        let result = validate_email_field("   ", ValidationMode::Submit);
        assert_eq!(result.error_message(), Some(MSG_EMAIL_FORMAT));
    }

    #[test]
    fn valid_email_passes_in_both_modes() {
        for mode in [ValidationMode::Live, ValidationMode::Submit] {
            assert!(validate_email_field("test@example.com", mode).is_valid());
        }
    }

    #[test]
    fn country_presence() {
        assert_eq!(
            validate_country_field(None).error_message(),
            Some(MSG_COUNTRY_REQUIRED)
        );
        assert!(validate_country_field(Some("")).is_invalid());
        assert!(validate_country_field(Some("Canada")).is_valid());
    }

    #[test]
    fn terms_must_be_accepted() {
        let result = validate_terms_field(false);
        assert_eq!(result.error_message(), Some(MSG_TERMS_REQUIRED));
        assert_eq!(result.error().unwrap().code, ERROR_CODE_ACCEPTED);
        assert!(validate_terms_field(true).is_valid());
    }

    #[test]
    fn validate_all_on_default_state_reports_every_field() {
        let errors = validate_all(&FormState::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.message(FieldKey::Email), Some(MSG_EMAIL_REQUIRED));
        assert_eq!(
            errors.message(FieldKey::Country),
            Some(MSG_COUNTRY_REQUIRED)
        );
        assert_eq!(errors.message(FieldKey::Terms), Some(MSG_TERMS_REQUIRED));
    }

    #[test]
    fn validate_all_omits_passing_fields() {
        let state = FormState {
            email: "test@example.com".into(),
            ..FormState::default()
        };
        let errors = validate_all(&state);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![FieldKey::Country, FieldKey::Terms]
        );
    }

    #[test]
    fn validate_all_on_complete_state_is_empty() {
        let state = FormState {
            email: "test@example.com".into(),
            country: Some("Canada".into()),
            terms_accepted: true,
        };
        assert!(validate_all(&state).is_empty());
    }
}
