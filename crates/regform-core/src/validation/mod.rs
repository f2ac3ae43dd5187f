#![forbid(unsafe_code)]

//! Field validation with composable validators.
//!
//! This module provides:
//! - A core `Validator` trait for validating values
//! - Built-in validators for presence, email shape, selections and accepted flags
//! - The `And` combinator for chaining rules
//! - The registration rules (`validate_*`) used by the form controller
//!
//! # Example
//!
//! ```rust
//! use regform_core::validation::{validate_email_field, ValidationMode};
//!
//! // Live feedback does not flag an empty field...
//! assert!(validate_email_field("", ValidationMode::Live).is_valid());
//!
//! // ...but a submit attempt does.
//! let result = validate_email_field("", ValidationMode::Submit);
//! assert_eq!(result.error_message(), Some("Email is required"));
//! ```

mod registration;
mod validators;

pub use registration::{
    MSG_COUNTRY_REQUIRED, MSG_EMAIL_FORMAT, MSG_EMAIL_REQUIRED, MSG_TERMS_REQUIRED,
    ValidationMode, validate_all, validate_country_field, validate_email_field,
    validate_terms_field,
};
pub use validators::{
    // Built-in validators
    Accepted,
    // Composition
    And,
    // Error codes
    ERROR_CODE_ACCEPTED,
    ERROR_CODE_EMAIL,
    ERROR_CODE_REQUIRED,
    Email,
    Required,
    Selected,
    // Core types
    ValidationError,
    ValidationResult,
    Validator,
    // Shape check
    is_email_format,
};
