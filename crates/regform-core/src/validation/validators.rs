#![forbid(unsafe_code)]

//! Core validation types and built-in validators.

use std::fmt;

// ---------------------------------------------------------------------------
// Error Codes
// ---------------------------------------------------------------------------

/// Error code for a missing required value.
pub const ERROR_CODE_REQUIRED: &str = "required";
/// Error code for a malformed email address.
pub const ERROR_CODE_EMAIL: &str = "email";
/// Error code for a flag that must be accepted.
pub const ERROR_CODE_ACCEPTED: &str = "accepted";

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// A validation failure with a stable code and a human-readable message.
///
/// The `code` is meant for programmatic handling; the `message` is what a
/// rendering layer shows next to the field.
///
/// # Example
///
/// ```rust
/// use regform_core::validation::ValidationError;
///
/// let error = ValidationError::new("required", "Email is required");
/// assert_eq!(error.to_string(), "Email is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    /// Stable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error with the given code and message.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

/// The result of a validation operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationResult {
    /// The value is valid.
    #[default]
    Valid,
    /// The value is invalid with an error.
    Invalid(ValidationError),
}

impl ValidationResult {
    /// Returns `true` if the result is `Valid`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns `true` if the result is `Invalid`.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the error if the result is `Invalid`, otherwise `None`.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }

    /// Returns the error message if the result is `Invalid`, otherwise `None`.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error().map(|e| e.message.as_str())
    }

    /// Consume the result, yielding the error if any.
    #[must_use]
    pub fn into_error(self) -> Option<ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }

    /// Combine two results, returning the first error if any.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::Valid => other,
            Self::Invalid(_) => self,
        }
    }
}

// ---------------------------------------------------------------------------
// Validator Trait
// ---------------------------------------------------------------------------

/// A trait for validating values of type `T`.
///
/// # Implementing a Custom Validator
///
/// ```rust
/// use regform_core::validation::{Validator, ValidationResult, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validator<str> for NoSpaces {
///     fn validate(&self, value: &str) -> ValidationResult {
///         if value.contains(' ') {
///             ValidationResult::Invalid(
///                 ValidationError::new("no_spaces", "Value must not contain spaces")
///             )
///         } else {
///             ValidationResult::Valid
///         }
///     }
///
///     fn error_message(&self) -> &str {
///         "Value must not contain spaces"
///     }
/// }
/// ```
pub trait Validator<T: ?Sized>: Send + Sync {
    /// Validate the given value.
    fn validate(&self, value: &T) -> ValidationResult;

    /// Return the default error message for this validator.
    fn error_message(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Built-in Validators
// ---------------------------------------------------------------------------

/// Validates that a string is not empty.
///
/// By default, whitespace-only strings are considered empty.
#[derive(Debug, Clone, Copy)]
pub struct Required {
    /// Message reported when the value is missing.
    pub message: &'static str,
    /// If `true`, whitespace-only strings are considered present.
    pub allow_whitespace: bool,
}

impl Default for Required {
    fn default() -> Self {
        Self::new()
    }
}

impl Required {
    /// Create a new `Required` validator with the generic message.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: "This field is required",
            allow_whitespace: false,
        }
    }

    /// Report `message` instead of the generic one.
    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = message;
        self
    }

    /// Allow whitespace-only strings to pass validation.
    #[must_use]
    pub const fn allow_whitespace(mut self) -> Self {
        self.allow_whitespace = true;
        self
    }
}

impl Validator<str> for Required {
    fn validate(&self, value: &str) -> ValidationResult {
        let is_empty = if self.allow_whitespace {
            value.is_empty()
        } else {
            value.trim().is_empty()
        };

        if is_empty {
            ValidationResult::Invalid(ValidationError::new(ERROR_CODE_REQUIRED, self.message))
        } else {
            ValidationResult::Valid
        }
    }

    fn error_message(&self) -> &str {
        self.message
    }
}

/// Validates that a string looks like `local@domain.tld`.
///
/// Empty strings pass; pair with [`Required`] when presence matters.
/// Whitespace is not trimmed: a leading or trailing space fails the check.
#[derive(Debug, Clone, Copy)]
pub struct Email {
    /// Message reported for a malformed address.
    pub message: &'static str,
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl Email {
    /// Create a new `Email` validator with the generic message.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: "Invalid email address",
        }
    }

    /// Report `message` instead of the generic one.
    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = message;
        self
    }
}

impl Validator<str> for Email {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.is_empty() || is_email_format(value) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(ValidationError::new(ERROR_CODE_EMAIL, self.message))
        }
    }

    fn error_message(&self) -> &str {
        self.message
    }
}

/// Returns `true` iff `value` has the shape `local@domain.tld`.
///
/// Exactly one `@`, a non-empty local part, and a `.` after the `@` with at
/// least one character on each side of it. No segment may contain whitespace.
#[must_use]
pub fn is_email_format(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || !is_plain_segment(local) || !is_plain_segment(domain) {
        return false;
    }
    // `.` is a single byte, so `i + 1 < len` means something follows it.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn is_plain_segment(s: &str) -> bool {
    s.chars().all(|c| c != '@' && !is_js_whitespace(c))
}

// Browser pattern `\s`: U+FEFF is whitespace there but not for
// `char::is_whitespace`, and U+0085 is the reverse.
fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Validates that an optional choice is present and non-empty.
#[derive(Debug, Clone, Copy)]
pub struct Selected {
    /// Message reported when nothing is selected.
    pub message: &'static str,
}

impl Selected {
    /// Create a new `Selected` validator reporting `message`.
    #[must_use]
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl<'a> Validator<Option<&'a str>> for Selected {
    fn validate(&self, value: &Option<&'a str>) -> ValidationResult {
        match value {
            Some(choice) if !choice.is_empty() => ValidationResult::Valid,
            _ => ValidationResult::Invalid(ValidationError::new(ERROR_CODE_REQUIRED, self.message)),
        }
    }

    fn error_message(&self) -> &str {
        self.message
    }
}

/// Validates that a boolean flag is set.
#[derive(Debug, Clone, Copy)]
pub struct Accepted {
    /// Message reported when the flag is unset.
    pub message: &'static str,
}

impl Accepted {
    /// Create a new `Accepted` validator reporting `message`.
    #[must_use]
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl Validator<bool> for Accepted {
    fn validate(&self, value: &bool) -> ValidationResult {
        if *value {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(ValidationError::new(ERROR_CODE_ACCEPTED, self.message))
        }
    }

    fn error_message(&self) -> &str {
        self.message
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Both validators must pass. The first failure wins.
#[derive(Debug, Clone)]
pub struct And<A, B> {
    first: A,
    second: B,
}

impl<A, B> And<A, B> {
    /// Combine two validators.
    #[must_use]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A: Validator<T>, B: Validator<T>> Validator<T> for And<A, B> {
    fn validate(&self, value: &T) -> ValidationResult {
        match self.first.validate(value) {
            ValidationResult::Valid => self.second.validate(value),
            invalid => invalid,
        }
    }

    fn error_message(&self) -> &str {
        self.first.error_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- ValidationResult tests --

    #[test]
    fn validation_result_is_valid() {
        assert!(ValidationResult::Valid.is_valid());
        assert!(!ValidationResult::Invalid(ValidationError::new("", "")).is_valid());
    }

    #[test]
    fn validation_result_error() {
        let valid = ValidationResult::Valid;
        assert!(valid.error().is_none());
        assert!(valid.error_message().is_none());

        let invalid = ValidationResult::Invalid(ValidationError::new("test", "msg"));
        assert_eq!(invalid.error().unwrap().code, "test");
        assert_eq!(invalid.error_message(), Some("msg"));
        assert_eq!(invalid.into_error().unwrap().message, "msg");
    }

    #[test]
    fn validation_result_and() {
        let valid = ValidationResult::Valid;
        let first = ValidationResult::Invalid(ValidationError::new("a", "first"));
        let second = ValidationResult::Invalid(ValidationError::new("b", "second"));

        assert!(valid.clone().and(valid.clone()).is_valid());
        assert_eq!(valid.clone().and(second.clone()), second);
        assert_eq!(first.clone().and(second), first);
    }

    #[test]
    fn validation_error_display() {
        let err = ValidationError::new("required", "Country is required");
        assert_eq!(format!("{err}"), "Country is required");
    }

    // -- Required tests --

    #[test]
    fn required_empty_fails() {
        let v = Required::new();
        let result = v.validate("");
        assert_eq!(result.error().unwrap().code, ERROR_CODE_REQUIRED);
    }

    #[test]
    fn required_whitespace_only_fails_by_default() {
        let v = Required::new();
        assert!(v.validate("   ").is_invalid());
        assert!(v.validate("\t\n").is_invalid());
    }

    #[test]
    fn required_whitespace_allowed() {
        let v = Required::new().allow_whitespace();
        assert!(v.validate("   ").is_valid());
        assert!(v.validate("").is_invalid());
    }

    #[test]
    fn required_custom_message() {
        let v = Required::new().with_message("Email is required");
        assert_eq!(v.validate("").error_message(), Some("Email is required"));
        assert_eq!(v.error_message(), "Email is required");
    }

    // -- Email tests --

    #[test]
    fn email_format_accepts_common_addresses() {
        assert!(is_email_format("test@example.com"));
        assert!(is_email_format("user+test@example.co.uk"));
        assert!(is_email_format("a@b.c"));
        assert!(is_email_format("first.last@sub.domain.org"));
    }

    #[test]
    fn email_format_requires_at_sign() {
        assert!(!is_email_format("invalid-email"));
        assert!(!is_email_format("example.com"));
    }

    #[test]
    fn email_format_requires_dot_after_at() {
        assert!(!is_email_format("user@localhost"));
        assert!(!is_email_format("first.last@host"));
    }

    #[test]
    fn email_format_rejects_empty_segments() {
        assert!(!is_email_format("@example.com"));
        assert!(!is_email_format("user@"));
        assert!(!is_email_format("user@.com"));
        assert!(!is_email_format("user@example."));
    }

    #[test]
    fn email_format_dot_position_is_flexible() {
        // Any interior dot suffices, including a trailing one after the TLD.
        assert!(is_email_format("user@example.com."));
        assert!(is_email_format("user@a..b"));
    }

    #[test]
    fn email_format_rejects_second_at() {
        assert!(!is_email_format("a@b@c.com"));
        assert!(!is_email_format("a@b.c@d"));
    }

    #[test]
    fn email_format_rejects_whitespace() {
        assert!(!is_email_format("us er@example.com"));
        assert!(!is_email_format("user@exa mple.com"));
        assert!(!is_email_format("user@example.c om"));
        assert!(!is_email_format(" user@example.com"));
        assert!(!is_email_format("user@example.com\n"));
        assert!(!is_email_format("user@example.com\u{feff}"));
        assert!(!is_email_format("user@example.com\u{a0}"));
    }

    #[test]
    fn email_format_allows_next_line_control() {
        // U+0085 is not whitespace for browser patterns.
        assert!(is_email_format("a\u{85}b@c.de"));
        assert!(is_email_format("ab@c.de\u{85}"));
    }

    #[test]
    fn email_format_handles_unicode() {
        assert!(is_email_format("josé@café.fr"));
        assert!(is_email_format("δοκιμή@παράδειγμα.δοκιμή"));
    }

    #[test]
    fn email_validator_empty_passes() {
        assert!(Email::new().validate("").is_valid());
    }

    #[test]
    fn email_validator_reports_code() {
        let result = Email::new().with_message("bad").validate("nope");
        let err = result.error().unwrap();
        assert_eq!(err.code, ERROR_CODE_EMAIL);
        assert_eq!(err.message, "bad");
    }

    // -- Selected / Accepted tests --

    #[test]
    fn selected_requires_non_empty_choice() {
        let v = Selected::new("pick one");
        assert!(v.validate(&None).is_invalid());
        assert!(v.validate(&Some("")).is_invalid());
        assert!(v.validate(&Some("Canada")).is_valid());
        // Anything non-empty counts as present.
        assert!(v.validate(&Some("Atlantis")).is_valid());
    }

    #[test]
    fn accepted_requires_true() {
        let v = Accepted::new("must accept");
        assert!(v.validate(&true).is_valid());
        let result = v.validate(&false);
        assert_eq!(result.error().unwrap().code, ERROR_CODE_ACCEPTED);
    }

    // -- Composition tests --

    #[test]
    fn and_reports_first_failure() {
        let v = And::new(
            Required::new().allow_whitespace().with_message("required"),
            Email::new().with_message("format"),
        );
        assert_eq!(v.validate("").error_message(), Some("required"));
        assert_eq!(v.validate("nope").error_message(), Some("format"));
        assert!(v.validate("a@b.co").is_valid());
        assert_eq!(v.error_message(), "required");
    }
}
