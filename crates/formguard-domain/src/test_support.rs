use crate::engine::FieldValidator;
use crate::model::{FieldId, FormContext, FormInput};
use crate::policy::FormPolicy;
use formguard_types::ValidationResult;

pub const VALID_NATIONAL_ID: &str = "12.345.678-5";
pub const VALID_PASSWORD: &str = "Abcde1";

/// A form where every field passes under the default policy.
pub fn valid_form() -> FormInput {
    FormInput::new()
        .with(FieldId::Name, "Ada Lovelace")
        .with(FieldId::NationalId, VALID_NATIONAL_ID)
        .with(FieldId::BirthDate, "10/12/1990")
        .with(FieldId::Resume, "cv.pdf")
        .with(FieldId::Email, "ada@example.com")
        .with(FieldId::Password, VALID_PASSWORD)
        .with(FieldId::ConfirmPassword, VALID_PASSWORD)
}

pub fn check(field: FieldId, raw: &str) -> ValidationResult {
    FieldValidator::default().validate(field, raw, &FormContext::default())
}

pub fn check_with_policy(field: FieldId, raw: &str, policy: FormPolicy) -> ValidationResult {
    FieldValidator::new(policy).validate(field, raw, &FormContext::default())
}

pub fn check_confirmation(confirmation: &str, password: &str) -> ValidationResult {
    FieldValidator::default().validate(
        FieldId::ConfirmPassword,
        confirmation,
        &FormContext::with_password(password),
    )
}

pub fn code_of(result: &ValidationResult) -> Option<&str> {
    result.code.as_deref()
}
