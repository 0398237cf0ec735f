use thiserror::Error;

/// A field identifier that does not name any known form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown field: {identifier} (expected name, national_id, birth_date, resume, email, password or confirm_password)"
)]
pub struct ParseFieldIdError {
    pub identifier: String,
}
