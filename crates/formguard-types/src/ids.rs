//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace (`field.<field>`). `code` is a short snake_case discriminator.

// Checks
pub const CHECK_FIELD_NAME: &str = "field.name";
pub const CHECK_FIELD_NATIONAL_ID: &str = "field.national_id";
pub const CHECK_FIELD_BIRTH_DATE: &str = "field.birth_date";
pub const CHECK_FIELD_RESUME: &str = "field.resume";
pub const CHECK_FIELD_EMAIL: &str = "field.email";
pub const CHECK_FIELD_PASSWORD: &str = "field.password";
pub const CHECK_FIELD_CONFIRM_PASSWORD: &str = "field.confirm_password";

// Codes: shared by every required field
pub const CODE_REQUIRED: &str = "required";

// Codes: field.national_id
pub const CODE_MALFORMED_NATIONAL_ID: &str = "malformed_national_id";
pub const CODE_CHECK_DIGIT_MISMATCH: &str = "check_digit_mismatch";

// Codes: field.birth_date
pub const CODE_MALFORMED_DATE: &str = "malformed_date";
pub const CODE_NONEXISTENT_DATE: &str = "nonexistent_date";

// Codes: field.resume
pub const CODE_EXTENSION_NOT_ALLOWED: &str = "extension_not_allowed";

// Codes: field.email
pub const CODE_MALFORMED_EMAIL: &str = "malformed_email";

// Codes: field.password
pub const CODE_PASSWORD_LENGTH: &str = "password_length";
pub const CODE_PASSWORD_COMPLEXITY: &str = "password_complexity";

// Codes: field.confirm_password
pub const CODE_PASSWORD_MISMATCH: &str = "password_mismatch";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
