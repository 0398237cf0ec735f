//! Registration form validation for presentation layers.
//!
//! Call [`FieldValidator::validate`] when a field loses focus or a file is
//! selected, and [`FieldValidator::validate_all`] when the form is submitted.
//! [`FormState`] keeps the per-field error state between calls.
//!
//! ```
//! use formguard::{FieldId, FieldValidator, FormContext, FormInput, FormState};
//!
//! let validator = FieldValidator::default();
//! let mut state = FormState::new();
//!
//! let result = validator.validate(FieldId::NationalId, "12.345.678-9", &FormContext::default());
//! state.record(FieldId::NationalId, &result);
//! assert_eq!(
//!     state.error(FieldId::NationalId),
//!     Some("National ID check digit does not match")
//! );
//!
//! let form = FormInput::new()
//!     .with(FieldId::Name, "Ada Lovelace")
//!     .with(FieldId::NationalId, "12.345.678-5")
//!     .with(FieldId::Email, "ada@example.com")
//!     .with(FieldId::Password, "Abcde1")
//!     .with(FieldId::ConfirmPassword, "Abcde1");
//! let outcome = validator.validate_all(&form);
//! state.apply(&outcome);
//! assert!(outcome.is_pass());
//! assert!(state.is_submittable());
//! ```

#![forbid(unsafe_code)]

pub use formguard_domain::checks::{birth_date, national_id, resume};
pub use formguard_domain::{
    FieldId, FieldOutcome, FieldSpec, FieldState, FieldValidator, FormContext, FormInput,
    FormOutcome, FormPolicy, FormState, ParseFieldIdError, Rule, validate, validate_all,
};
pub use formguard_types::{Finding, ValidationResult, Verdict, ids};
