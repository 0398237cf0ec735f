use super::Violation;
use formguard_types::ids;
use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld: no whitespace, a single '@', a dot with text on both sides after it.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

pub fn run(value: &str) -> Result<(), Violation> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(Violation::new(
            ids::CODE_MALFORMED_EMAIL,
            "Email is not valid",
            "Use an address like name@example.com.",
        ))
    }
}
