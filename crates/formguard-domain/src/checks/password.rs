use super::Violation;
use crate::policy::FormPolicy;
use formguard_types::ids;

/// Which character classes a password contains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Complexity {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
}

impl Complexity {
    pub fn of(value: &str) -> Self {
        value.chars().fold(Self::default(), |acc, c| Self {
            lowercase: acc.lowercase || c.is_ascii_lowercase(),
            uppercase: acc.uppercase || c.is_ascii_uppercase(),
            digit: acc.digit || c.is_ascii_digit(),
        })
    }

    pub fn is_satisfied(self) -> bool {
        self.lowercase && self.uppercase && self.digit
    }
}

pub fn run(value: &str, policy: &FormPolicy) -> Result<(), Violation> {
    let len = value.chars().count();
    if len < policy.password_min_length || len > policy.password_max_length {
        return Err(Violation::new(
            ids::CODE_PASSWORD_LENGTH,
            format!(
                "Password must be between {} and {} characters",
                policy.password_min_length, policy.password_max_length
            ),
            "Choose a password within the allowed length.",
        ));
    }

    if !Complexity::of(value).is_satisfied() {
        return Err(Violation::new(
            ids::CODE_PASSWORD_COMPLEXITY,
            "Password needs at least one lowercase letter, one uppercase letter and one digit",
            "Mix lowercase letters, uppercase letters and digits.",
        ));
    }

    Ok(())
}
