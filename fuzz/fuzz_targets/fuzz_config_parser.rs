//! Fuzz target for `formguard.toml` parsing and resolution.
//!
//! Goal: parsing and resolving should **never panic** on any input.
//! They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use formguard_settings::{Overrides, parse_config_toml, resolve_config};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Config files must be UTF-8
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(cfg) = parse_config_toml(text)
    {
        if let Ok(resolved) = resolve_config(cfg, Overrides::default()) {
            let policy = resolved.policy;
            assert!(policy.password_min_length >= 1);
            assert!(policy.password_min_length <= policy.password_max_length);
            assert!(!policy.allowed_extensions.is_empty());
        }
    }
});
