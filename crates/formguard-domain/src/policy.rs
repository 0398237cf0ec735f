use crate::model::FieldId;
use std::collections::BTreeMap;

pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 6;
pub const DEFAULT_PASSWORD_MAX_LENGTH: usize = 12;
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx"];

/// Tunable knobs of the rule set. Resolved from config by `formguard-settings`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormPolicy {
    /// Inclusive bounds, counted in characters.
    pub password_min_length: usize,
    pub password_max_length: usize,

    /// Lower-case extensions without the leading dot.
    pub allowed_extensions: Vec<String>,

    /// Message overrides keyed `"<field>.<code>"`.
    pub messages: BTreeMap<String, String>,
}

impl Default for FormPolicy {
    fn default() -> Self {
        Self {
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            password_max_length: DEFAULT_PASSWORD_MAX_LENGTH,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            messages: BTreeMap::new(),
        }
    }
}

impl FormPolicy {
    pub fn message_key(field: FieldId, code: &str) -> String {
        format!("{}.{}", field.as_str(), code)
    }

    pub fn message_override(&self, field: FieldId, code: &str) -> Option<&str> {
        self.messages
            .get(&Self::message_key(field, code))
            .map(String::as_str)
    }

    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions.iter().any(|e| e == extension)
    }
}
