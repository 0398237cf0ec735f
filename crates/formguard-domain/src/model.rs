use crate::error::ParseFieldIdError;
use formguard_types::ids;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Known fields of the registration form, in canonical (submission) order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    NationalId,
    BirthDate,
    Resume,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldId {
    pub const ALL: [FieldId; 7] = [
        FieldId::Name,
        FieldId::NationalId,
        FieldId::BirthDate,
        FieldId::Resume,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::NationalId => "national_id",
            FieldId::BirthDate => "birth_date",
            FieldId::Resume => "resume",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirm_password",
        }
    }

    pub fn check_id(self) -> &'static str {
        match self {
            FieldId::Name => ids::CHECK_FIELD_NAME,
            FieldId::NationalId => ids::CHECK_FIELD_NATIONAL_ID,
            FieldId::BirthDate => ids::CHECK_FIELD_BIRTH_DATE,
            FieldId::Resume => ids::CHECK_FIELD_RESUME,
            FieldId::Email => ids::CHECK_FIELD_EMAIL,
            FieldId::Password => ids::CHECK_FIELD_PASSWORD,
            FieldId::ConfirmPassword => ids::CHECK_FIELD_CONFIRM_PASSWORD,
        }
    }

    pub fn spec(self) -> &'static FieldSpec {
        &FIELD_SPECS[self as usize]
    }

    /// Codes this field can report.
    pub fn codes(self) -> &'static [&'static str] {
        match self {
            FieldId::Name => &[ids::CODE_REQUIRED],
            FieldId::NationalId => &[
                ids::CODE_REQUIRED,
                ids::CODE_MALFORMED_NATIONAL_ID,
                ids::CODE_CHECK_DIGIT_MISMATCH,
            ],
            FieldId::BirthDate => &[ids::CODE_MALFORMED_DATE, ids::CODE_NONEXISTENT_DATE],
            FieldId::Resume => &[ids::CODE_EXTENSION_NOT_ALLOWED],
            FieldId::Email => &[ids::CODE_REQUIRED, ids::CODE_MALFORMED_EMAIL],
            FieldId::Password => &[
                ids::CODE_REQUIRED,
                ids::CODE_PASSWORD_LENGTH,
                ids::CODE_PASSWORD_COMPLEXITY,
            ],
            FieldId::ConfirmPassword => &[ids::CODE_REQUIRED, ids::CODE_PASSWORD_MISMATCH],
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = ParseFieldIdError;

    /// Accepts the canonical snake_case name plus the camelCase and legacy
    /// element ids used by existing form markup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" | "nombre" => Ok(FieldId::Name),
            "national_id" | "nationalId" | "rut" => Ok(FieldId::NationalId),
            "birth_date" | "birthDate" | "fechaNacimiento" => Ok(FieldId::BirthDate),
            "resume" | "cv" => Ok(FieldId::Resume),
            "email" => Ok(FieldId::Email),
            "password" => Ok(FieldId::Password),
            "confirm_password" | "confirmPassword" => Ok(FieldId::ConfirmPassword),
            other => Err(ParseFieldIdError {
                identifier: other.to_string(),
            }),
        }
    }
}

/// Which check a field runs once it is known to be non-empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Presence is the whole rule.
    Present,
    NationalId,
    CalendarDate,
    FileExtension,
    Email,
    Password,
    MatchesPassword,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub required: bool,
    pub rule: Rule,
}

/// Static rules table, indexed by `FieldId as usize`.
pub static FIELD_SPECS: [FieldSpec; 7] = [
    FieldSpec {
        id: FieldId::Name,
        required: true,
        rule: Rule::Present,
    },
    FieldSpec {
        id: FieldId::NationalId,
        required: true,
        rule: Rule::NationalId,
    },
    FieldSpec {
        id: FieldId::BirthDate,
        required: false,
        rule: Rule::CalendarDate,
    },
    FieldSpec {
        id: FieldId::Resume,
        required: false,
        rule: Rule::FileExtension,
    },
    FieldSpec {
        id: FieldId::Email,
        required: true,
        rule: Rule::Email,
    },
    FieldSpec {
        id: FieldId::Password,
        required: true,
        rule: Rule::Password,
    },
    FieldSpec {
        id: FieldId::ConfirmPassword,
        required: true,
        rule: Rule::MatchesPassword,
    },
];

/// Read-only cross-field context for a single check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormContext<'a> {
    /// Current value of the password field, for the confirmation check.
    pub password: Option<&'a str>,
}

impl<'a> FormContext<'a> {
    pub fn with_password(password: &'a str) -> Self {
        Self {
            password: Some(password),
        }
    }
}

/// Raw values of a whole form. Missing fields read as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormInput {
    values: BTreeMap<FieldId, String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn context(&self) -> FormContext<'_> {
        FormContext::with_password(self.get(FieldId::Password))
    }
}

impl<V: Into<String>> FromIterator<(FieldId, V)> for FormInput {
    fn from_iter<I: IntoIterator<Item = (FieldId, V)>>(iter: I) -> Self {
        let mut input = FormInput::new();
        for (field, value) in iter {
            input.set(field, value);
        }
        input
    }
}
