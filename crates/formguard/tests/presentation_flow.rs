//! Drives the facade the way a registration page would: blur events,
//! a rejected submit, corrections, an accepted submit, then a reset.

use formguard::{
    FieldId, FieldState, FieldValidator, FormContext, FormInput, FormPolicy, FormState, Verdict,
};

fn blur(validator: &FieldValidator, state: &mut FormState, form: &FormInput, field: FieldId) {
    let result = validator.validate(field, form.get(field), &form.context());
    state.record(field, &result);
}

#[test]
fn blur_submit_correct_reset() {
    let validator = FieldValidator::default();
    let mut state = FormState::new();
    let mut form = FormInput::new()
        .with(FieldId::Name, "Ada Lovelace")
        .with(FieldId::NationalId, "12.345.678-9")
        .with(FieldId::BirthDate, "31/02/2020")
        .with(FieldId::Email, "ada@example.com")
        .with(FieldId::Password, "Abcde1")
        .with(FieldId::ConfirmPassword, "Abcde1");

    blur(&validator, &mut state, &form, FieldId::NationalId);
    assert_eq!(
        state.error(FieldId::NationalId),
        Some("National ID check digit does not match")
    );
    assert_eq!(*state.state(FieldId::Email), FieldState::Pristine);
    assert!(!state.is_submittable());

    let outcome = validator.validate_all(&form);
    state.apply(&outcome);
    assert_eq!(outcome.verdict, Verdict::Fail);
    let failed: Vec<FieldId> = state.errors().into_iter().map(|(f, _)| f).collect();
    assert_eq!(failed, vec![FieldId::NationalId, FieldId::BirthDate]);

    form.set(FieldId::NationalId, "12.345.678-5");
    form.set(FieldId::BirthDate, "29/02/2024");
    blur(&validator, &mut state, &form, FieldId::NationalId);
    blur(&validator, &mut state, &form, FieldId::BirthDate);
    assert!(state.errors().is_empty());
    assert!(state.is_submittable());

    let outcome = validator.validate_all(&form);
    assert!(outcome.is_pass());

    state.reset();
    assert_eq!(*state.state(FieldId::NationalId), FieldState::Pristine);
    assert!(!state.is_submittable());
}

#[test]
fn confirmation_follows_the_password_context() {
    let validator = FieldValidator::default();

    let ok = validator.validate(
        FieldId::ConfirmPassword,
        "Abcde1",
        &FormContext::with_password("Abcde1"),
    );
    assert!(ok.valid);

    let mismatch = validator.validate(
        FieldId::ConfirmPassword,
        "Abcde1",
        &FormContext::with_password("ABCDE1"),
    );
    assert_eq!(mismatch.code.as_deref(), Some("password_mismatch"));
}

#[test]
fn policy_drives_messages_and_bounds() {
    let mut policy = FormPolicy::default();
    policy.password_min_length = 8;
    policy.messages.insert(
        FormPolicy::message_key(FieldId::Email, "malformed_email"),
        "El correo no es válido".to_string(),
    );
    let validator = FieldValidator::new(policy);
    let ctx = FormContext::default();

    let short = validator.validate(FieldId::Password, "Abcde1", &ctx);
    assert_eq!(
        short.message.as_deref(),
        Some("Password must be between 8 and 12 characters")
    );

    let email = validator.validate(FieldId::Email, "ada", &ctx);
    assert_eq!(email.message.as_deref(), Some("El correo no es válido"));
}

#[test]
fn field_ids_parse_from_presentation_spellings() {
    assert_eq!("fechaNacimiento".parse::<FieldId>(), Ok(FieldId::BirthDate));
    assert_eq!("cv".parse::<FieldId>(), Ok(FieldId::Resume));
    assert!("telefono".parse::<FieldId>().is_err());
}
