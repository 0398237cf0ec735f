use crate::model::{FormContext, Rule};
use crate::policy::FormPolicy;

pub mod birth_date;
pub mod confirm_password;
pub mod email;
pub mod national_id;
pub mod password;
pub mod resume;
mod utils;


pub(crate) use utils::required_violation;

/// A failed check: stable code plus the default user-facing text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub code: &'static str,
    pub message: String,
    pub help: &'static str,
}

impl Violation {
    pub fn new(code: &'static str, message: impl Into<String>, help: &'static str) -> Self {
        Self {
            code,
            message: message.into(),
            help,
        }
    }
}

/// Run a field's rule against a prepared, non-empty value.
pub fn run(
    rule: Rule,
    value: &str,
    ctx: &FormContext<'_>,
    policy: &FormPolicy,
) -> Result<(), Violation> {
    match rule {
        Rule::Present => Ok(()),
        Rule::NationalId => national_id::run(value),
        Rule::CalendarDate => birth_date::run(value),
        Rule::FileExtension => resume::run(value, policy),
        Rule::Email => email::run(value),
        Rule::Password => password::run(value, policy),
        Rule::MatchesPassword => confirm_password::run(value, ctx),
    }
}
