//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - check digit determinism and uniqueness
//! - calendar round-tripping of birth dates
//! - optional fields, password rules and the confirmation check
//! - the validator never panicking on arbitrary input

use crate::checks::{birth_date, national_id};
use crate::engine::{FieldValidator, validate_all};
use crate::model::{FieldId, FormContext, FormInput};
use crate::policy::FormPolicy;
use formguard_types::{Verdict, ids};
use proptest::prelude::*;
use time::{Date, Month};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Numeric national-ID bodies, 1 to 9 digits.
fn arb_body() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{1,9}").unwrap()
}

fn arb_check_char() -> impl Strategy<Value = char> {
    prop_oneof![
        (0u32..10).prop_map(|d| char::from_digit(d, 10).unwrap()),
        Just('K'),
    ]
}

/// `(day, month, year)` triples that may or may not exist.
fn arb_date_parts() -> impl Strategy<Value = (u8, u8, i32)> {
    (0u8..=32, 0u8..=13, 1000i32..=9999)
}

fn arb_field() -> impl Strategy<Value = FieldId> {
    prop::sample::select(FieldId::ALL.to_vec())
}

/// Passwords built from the three required classes plus filler.
fn arb_complex_password() -> impl Strategy<Value = String> {
    (
        "[a-z]",
        "[A-Z]",
        "[0-9]",
        prop::string::string_regex("[a-zA-Z0-9]{3,9}").unwrap(),
    )
        .prop_map(|(l, u, d, rest)| format!("{rest}{l}{u}{d}"))
}

/// Group a digit string with dots every three digits from the right.
fn with_dots(body: &str) -> String {
    let chars: Vec<char> = body.chars().collect();
    let mut out = String::new();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*c);
    }
    out
}

proptest! {
    #[test]
    fn check_digit_is_deterministic(body in arb_body()) {
        prop_assert_eq!(national_id::check_digit(&body), national_id::check_digit(&body));
    }

    #[test]
    fn only_the_computed_check_character_is_accepted(body in arb_body(), supplied in arb_check_char()) {
        let expected = national_id::check_digit(&body).unwrap();
        let result = FieldValidator::default().validate(
            FieldId::NationalId,
            &format!("{body}-{supplied}"),
            &FormContext::default(),
        );
        prop_assert_eq!(result.valid, supplied == expected);
        if supplied != expected {
            prop_assert_eq!(result.code.as_deref(), Some(ids::CODE_CHECK_DIGIT_MISMATCH));
        }
    }

    #[test]
    fn separators_do_not_change_the_verdict(body in arb_body()) {
        let dv = national_id::check_digit(&body).unwrap();
        let plain = format!("{body}{dv}");
        let dotted = format!("{}-{}", with_dots(&body), dv.to_ascii_lowercase());
        let validator = FieldValidator::default();
        let ctx = FormContext::default();
        prop_assert!(validator.validate(FieldId::NationalId, &plain, &ctx).valid);
        prop_assert!(validator.validate(FieldId::NationalId, &dotted, &ctx).valid);
    }

    #[test]
    fn date_parse_agrees_with_calendar((day, month, year) in arb_date_parts()) {
        let text = format!("{day:02}/{month:02}/{year:04}");
        let reference = Month::try_from(month)
            .ok()
            .and_then(|m| Date::from_calendar_date(year, m, day).ok());
        prop_assert_eq!(birth_date::parse(&text), reference);
    }

    #[test]
    fn empty_optional_fields_are_valid(spaces in " {0,8}") {
        let validator = FieldValidator::default();
        let ctx = FormContext::default();
        prop_assert!(validator.validate(FieldId::BirthDate, &spaces, &ctx).valid);
        prop_assert!(validator.validate(FieldId::Resume, &spaces, &ctx).valid);
    }

    #[test]
    fn complex_passwords_within_bounds_pass(password in arb_complex_password()) {
        let result = FieldValidator::default().validate(
            FieldId::Password,
            &password,
            &FormContext::default(),
        );
        prop_assert!(result.valid, "{} rejected: {:?}", password, result);
    }

    #[test]
    fn passwords_without_uppercase_fail(password in "[a-z0-9]{6,12}") {
        let result = FieldValidator::default().validate(
            FieldId::Password,
            &password,
            &FormContext::default(),
        );
        prop_assert!(!result.valid);
    }

    #[test]
    fn confirmation_matches_only_identical_text(a in "[a-zA-Z0-9]{1,12}", b in "[a-zA-Z0-9]{1,12}") {
        let result = FieldValidator::default().validate(
            FieldId::ConfirmPassword,
            &b,
            &FormContext::with_password(&a),
        );
        prop_assert_eq!(result.valid, a == b);
    }

    #[test]
    fn surrounding_whitespace_never_changes_a_result(
        field in arb_field(),
        raw in "[a-zA-Z0-9./@-]{0,16}",
        pad in "[ \t]{0,3}",
    ) {
        let ctx = FormContext::with_password("Abcde1");
        let validator = FieldValidator::default();
        let plain = validator.validate(field, &raw, &ctx);
        let padded = validator.validate(field, &format!("{pad}{raw}{pad}"), &ctx);
        prop_assert_eq!(plain, padded);
    }

    #[test]
    fn validator_never_panics_and_failures_carry_messages(field in arb_field(), raw in ".{0,40}") {
        let result = FieldValidator::default().validate(field, &raw, &FormContext::default());
        prop_assert_eq!(result.valid, result.message.is_none());
        prop_assert_eq!(result.valid, result.code.is_none());
    }

    #[test]
    fn verdict_passes_only_when_every_field_passes(
        values in prop::collection::vec(".{0,16}", FieldId::ALL.len())
    ) {
        let input: FormInput = FieldId::ALL.into_iter().zip(values).collect();
        let outcome = validate_all(&input, &FormPolicy::default());
        let all_valid = outcome.fields.iter().all(|o| o.result.valid);
        prop_assert_eq!(outcome.verdict == Verdict::Pass, all_valid);
        prop_assert_eq!(outcome.findings.len() as u32, outcome.data.fields_failed);
    }
}
