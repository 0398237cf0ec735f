//! The `field` use case: validate a single raw value, as a blur/change hook would.

use anyhow::Context;
use formguard_domain::{FieldId, FieldValidator, FormContext};
use formguard_settings::Overrides;
use formguard_types::ValidationResult;

use crate::config::load_config;

/// Input for the field use case.
#[derive(Clone, Debug)]
pub struct FieldInput<'a> {
    /// Field identifier as typed by the caller (any accepted spelling).
    pub field: &'a str,
    pub value: &'a str,
    /// Current password, used only by `confirm_password`.
    pub password: Option<&'a str>,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct FieldOutput {
    pub field: FieldId,
    pub result: ValidationResult,
}

pub fn run_field(input: FieldInput<'_>) -> anyhow::Result<FieldOutput> {
    let field: FieldId = input.field.parse().context("parse field identifier")?;
    let resolved = load_config(input.config_text, input.overrides)?;

    let ctx = FormContext {
        password: input.password,
    };
    let result = FieldValidator::new(resolved.policy).validate(field, input.value, &ctx);

    Ok(FieldOutput { field, result })
}

/// Map a single-field result to an exit code: 0 = valid, 2 = invalid.
pub fn field_exit_code(result: &ValidationResult) -> i32 {
    if result.valid { 0 } else { 2 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(field: &'a str, value: &'a str) -> FieldInput<'a> {
        FieldInput {
            field,
            value,
            password: None,
            config_text: "",
            overrides: Overrides::default(),
        }
    }

    #[test]
    fn accepts_alias_spelling() {
        let out = run_field(input("rut", "12.345.678-5")).expect("run");
        assert_eq!(out.field, FieldId::NationalId);
        assert!(out.result.valid);
        assert_eq!(field_exit_code(&out.result), 0);
    }

    #[test]
    fn invalid_value_is_not_an_error() {
        let out = run_field(input("email", "nobody")).expect("run");
        assert!(!out.result.valid);
        assert_eq!(out.result.code.as_deref(), Some("malformed_email"));
        assert_eq!(field_exit_code(&out.result), 2);
    }

    #[test]
    fn unknown_field_is_an_error() {
        let err = run_field(input("favourite_colour", "blue")).expect_err("should fail");
        assert!(format!("{err:#}").contains("unknown field: favourite_colour"));
    }

    #[test]
    fn confirmation_uses_supplied_password() {
        let mut i = input("confirm_password", "Abcde1");
        i.password = Some("Abcde1");
        assert!(run_field(i.clone()).expect("run").result.valid);

        i.password = Some("abcde1");
        let out = run_field(i).expect("run");
        assert_eq!(out.result.code.as_deref(), Some("password_mismatch"));
    }

    #[test]
    fn config_message_override_applies() {
        let mut i = input("national_id", "12.345.678-9");
        i.config_text = "[messages]\n\"national_id.check_digit_mismatch\" = \"El RUT no es valido\"\n";
        let out = run_field(i).expect("run");
        assert_eq!(out.result.message.as_deref(), Some("El RUT no es valido"));
    }
}
