//! Fuzz target for validate-all-on-submit.
//!
//! Goal: a submission never panics, reports every field exactly once, and
//! only passes when it has no findings.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_form_submit
//! ```

#![no_main]

use formguard_domain::{FieldId, FormInput, FormPolicy, validate_all};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|values: [String; 7]| {
    let input: FormInput = FieldId::ALL.into_iter().zip(values).collect();
    let outcome = validate_all(&input, &FormPolicy::default());

    assert_eq!(outcome.fields.len(), FieldId::ALL.len());
    assert_eq!(outcome.is_pass(), outcome.findings.is_empty());
    assert_eq!(outcome.data.fields_failed as usize, outcome.findings.len());
});
