use super::Violation;
use crate::model::FormContext;
use formguard_types::ids;

/// The trimmed confirmation must equal the trimmed password, case included.
pub fn run(value: &str, ctx: &FormContext<'_>) -> Result<(), Violation> {
    if ctx.password.map(str::trim) == Some(value) {
        return Ok(());
    }
    Err(Violation::new(
        ids::CODE_PASSWORD_MISMATCH,
        "Passwords do not match",
        "Type the same password in both fields.",
    ))
}
