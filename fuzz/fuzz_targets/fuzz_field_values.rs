//! Fuzz target for single-field validation.
//!
//! Goal: `validate` must **never panic** and must always carry a message and
//! code when it reports a failure.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_field_values
//! ```

#![no_main]

use arbitrary::Arbitrary;
use formguard_domain::{FieldId, FormContext, validate};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    field: u8,
    value: String,
    password: Option<String>,
}

fuzz_target!(|input: Input| {
    let field = FieldId::ALL[usize::from(input.field) % FieldId::ALL.len()];
    let ctx = FormContext {
        password: input.password.as_deref(),
    };

    let result = validate(field, &input.value, &ctx);
    assert_eq!(result.valid, result.message.is_none());
    assert_eq!(result.valid, result.code.is_none());

    // Helpers exposed for reuse must be total as well.
    let _ = formguard_domain::checks::national_id::normalize(&input.value);
    let _ = formguard_domain::checks::birth_date::parse(&input.value);
    let _ = formguard_domain::checks::resume::extension(&input.value);
});
