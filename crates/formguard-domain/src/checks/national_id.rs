//! National identifier with a modulus-11 check character.

use super::Violation;
use formguard_types::ids;
use once_cell::sync::Lazy;
use regex::Regex;

static NATIONAL_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+[0-9K]$").expect("national id regex"));

/// Strip `.` and `-` separators and upper-case the check character.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '.' | '-'))
        .collect::<String>()
        .to_uppercase()
}

/// Compute the check character for a numeric body.
///
/// Digits are weighted 2..=7 (cycling) from the least significant one; the
/// character is `11 - (sum mod 11)` with 11 mapped to `'0'` and 10 to `'K'`.
/// Returns `None` for an empty body or any non-digit.
pub fn check_digit(body: &str) -> Option<char> {
    if body.is_empty() {
        return None;
    }

    let mut sum = 0u32;
    let mut weight = 2u32;
    for c in body.chars().rev() {
        let digit = c.to_digit(10)?;
        sum = (sum + digit * weight) % 11;
        weight = if weight == 7 { 2 } else { weight + 1 };
    }

    match 11 - sum {
        11 => Some('0'),
        10 => Some('K'),
        d => char::from_digit(d, 10),
    }
}

pub fn run(value: &str) -> Result<(), Violation> {
    let normalized = normalize(value);
    if !NATIONAL_ID_RE.is_match(&normalized) {
        return Err(Violation::new(
            ids::CODE_MALFORMED_NATIONAL_ID,
            "National ID must be digits followed by a check digit (0-9 or K)",
            "Use digits followed by the check character, e.g. 12.345.678-5.",
        ));
    }

    // The pattern guarantees ASCII, so the last byte is the check character.
    let (body, supplied) = normalized.split_at(normalized.len() - 1);
    if check_digit(body) != supplied.chars().next() {
        return Err(Violation::new(
            ids::CODE_CHECK_DIGIT_MISMATCH,
            "National ID check digit does not match",
            "Re-enter the identifier including its check character.",
        ));
    }

    Ok(())
}
