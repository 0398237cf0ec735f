use super::Violation;
use crate::model::FieldId;
use formguard_types::ids;

pub fn required_violation(field: FieldId) -> Violation {
    let message = match field {
        FieldId::Name => "Full name is required",
        FieldId::NationalId => "National ID is required",
        FieldId::Email => "Email is required",
        FieldId::Password => "Password is required",
        FieldId::ConfirmPassword => "Please repeat the password",
        FieldId::BirthDate | FieldId::Resume => "This field is required",
    };
    Violation::new(ids::CODE_REQUIRED, message, "Fill in this field.")
}

pub fn join_extensions(extensions: &[String]) -> String {
    extensions.join(", ")
}
