//! Headless registration form model.
//!
//! Collects an email, a country and a terms-acceptance flag, validates them,
//! and moves between an editing view and a confirmation view. Any rendering
//! layer can bind to it: call the `on_*` handlers on user input, then read
//! the state, the error map and the phase to re-render.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`validation`] | Composable validators and the registration rules |
//! | [`errors`] | Per-field error map with replace/remove updates |
//! | [`field`] | Field keys |
//! | [`state`] | Field values, phase and confirmed registration |
//! | [`countries`] | Selectable country list with substring filtering |
//! | [`config`] | Email normalization and validation timing |
//! | [`form`] | The transition controller |
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for state, errors and snapshots |
//!
//! # Logging
//!
//! Transitions are instrumented with `tracing`. Field values are never
//! logged; events carry field keys and error codes only.

#![forbid(unsafe_code)]

pub mod config;
pub mod countries;
pub mod errors;
pub mod field;
pub mod form;
pub mod state;
pub mod validation;

pub use config::{EmailInput, FormConfig, ValidationTiming};
pub use countries::{CountryCatalog, DEFAULT_COUNTRIES};
pub use errors::ErrorMap;
pub use field::FieldKey;
pub use form::{FormEvent, FormSnapshot, RegistrationForm, SubmitOutcome, TransitionError};
pub use state::{FormPhase, FormState, Registration};
