//! Field-level state machine backing inline error display.
//!
//! Presentation layers feed every `ValidationResult` into a `FormState`; it
//! remembers the last verdict per field so errors can be shown, cleared on a
//! later success, and wiped on reset.

use crate::model::FieldId;
use crate::report::FormOutcome;
use formguard_types::ValidationResult;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    /// Not checked since the form was created or reset.
    #[default]
    Pristine,
    Valid,
    Invalid { message: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    fields: BTreeMap<FieldId, FieldState>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a verdict: a failure shows its message, a success clears any prior error.
    pub fn record(&mut self, field: FieldId, result: &ValidationResult) {
        let next = if result.valid {
            FieldState::Valid
        } else {
            FieldState::Invalid {
                message: result.message.clone().unwrap_or_default(),
            }
        };
        self.fields.insert(field, next);
    }

    pub fn apply(&mut self, outcome: &FormOutcome) {
        for o in &outcome.fields {
            self.record(o.field, &o.result);
        }
    }

    pub fn state(&self, field: FieldId) -> &FieldState {
        static PRISTINE: FieldState = FieldState::Pristine;
        self.fields.get(&field).unwrap_or(&PRISTINE)
    }

    pub fn error(&self, field: FieldId) -> Option<&str> {
        match self.state(field) {
            FieldState::Invalid { message } => Some(message),
            _ => None,
        }
    }

    pub fn errors(&self) -> Vec<(FieldId, &str)> {
        FieldId::ALL
            .into_iter()
            .filter_map(|f| self.error(f).map(|m| (f, m)))
            .collect()
    }

    /// Submission is allowed only once every field has been checked and passed.
    pub fn is_submittable(&self) -> bool {
        FieldId::ALL
            .into_iter()
            .all(|f| *self.state(f) == FieldState::Valid)
    }

    pub fn reset(&mut self) {
        self.fields.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::validate_all;
    use crate::policy::FormPolicy;
    use crate::test_support::valid_form;

    #[test]
    fn success_clears_prior_error() {
        let mut state = FormState::new();
        state.record(FieldId::Email, &ValidationResult::fail("required", "Email is required"));
        assert_eq!(state.error(FieldId::Email), Some("Email is required"));

        state.record(FieldId::Email, &ValidationResult::ok());
        assert_eq!(state.error(FieldId::Email), None);
        assert_eq!(*state.state(FieldId::Email), FieldState::Valid);
    }

    #[test]
    fn untouched_fields_are_pristine_and_block_submission() {
        let mut state = FormState::new();
        assert_eq!(*state.state(FieldId::Name), FieldState::Pristine);
        state.record(FieldId::Name, &ValidationResult::ok());
        assert!(!state.is_submittable());
    }

    #[test]
    fn applying_a_passing_outcome_allows_submission_and_reset_clears_it() {
        let mut state = FormState::new();
        state.apply(&validate_all(&valid_form(), &FormPolicy::default()));
        assert!(state.is_submittable());
        assert!(state.errors().is_empty());

        state.reset();
        assert!(!state.is_submittable());
        assert_eq!(*state.state(FieldId::Password), FieldState::Pristine);
    }

    #[test]
    fn errors_follow_canonical_order() {
        let mut state = FormState::new();
        state.record(FieldId::Password, &ValidationResult::fail("required", "Password is required"));
        state.record(FieldId::Name, &ValidationResult::fail("required", "Full name is required"));
        assert_eq!(
            state.errors(),
            vec![
                (FieldId::Name, "Full name is required"),
                (FieldId::Password, "Password is required"),
            ]
        );
    }
}
