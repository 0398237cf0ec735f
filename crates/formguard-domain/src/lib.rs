//! Pure form validation (no IO).
//!
//! Input: a field id plus its raw value (and the password for the confirmation
//! check), or a whole form on submit.
//! Output: a `ValidationResult` per field, or findings + verdict for the form.

#![forbid(unsafe_code)]

pub mod checks;
pub mod error;
pub mod model;
pub mod policy;
pub mod report;
pub mod state;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{FieldValidator, validate, validate_all};
pub use error::ParseFieldIdError;
pub use model::{FieldId, FieldSpec, FormContext, FormInput, Rule};
pub use policy::FormPolicy;
pub use report::{FieldOutcome, FormOutcome};
pub use state::{FieldState, FormState};
