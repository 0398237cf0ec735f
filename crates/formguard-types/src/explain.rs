//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after input examples.
    pub examples: ExamplePair,
}

/// Before and after input examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Input that would trigger a finding.
    pub before: &'static str,
    /// Input that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    // Try check_id first, then code
    match identifier {
        // Check IDs
        ids::CHECK_FIELD_NAME => Some(explain_name()),
        ids::CHECK_FIELD_NATIONAL_ID => Some(explain_national_id()),
        ids::CHECK_FIELD_BIRTH_DATE => Some(explain_birth_date()),
        ids::CHECK_FIELD_RESUME => Some(explain_resume()),
        ids::CHECK_FIELD_EMAIL => Some(explain_email()),
        ids::CHECK_FIELD_PASSWORD => Some(explain_password()),
        ids::CHECK_FIELD_CONFIRM_PASSWORD => Some(explain_confirm_password()),

        // Codes
        ids::CODE_REQUIRED => Some(explain_required()),
        ids::CODE_MALFORMED_NATIONAL_ID => Some(explain_malformed_national_id()),
        ids::CODE_CHECK_DIGIT_MISMATCH => Some(explain_check_digit_mismatch()),
        ids::CODE_MALFORMED_DATE => Some(explain_malformed_date()),
        ids::CODE_NONEXISTENT_DATE => Some(explain_nonexistent_date()),
        ids::CODE_EXTENSION_NOT_ALLOWED => Some(explain_extension_not_allowed()),
        ids::CODE_MALFORMED_EMAIL => Some(explain_malformed_email()),
        ids::CODE_PASSWORD_LENGTH => Some(explain_password_length()),
        ids::CODE_PASSWORD_COMPLEXITY => Some(explain_password_complexity()),
        ids::CODE_PASSWORD_MISMATCH => Some(explain_password_mismatch()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_FIELD_NAME,
        ids::CHECK_FIELD_NATIONAL_ID,
        ids::CHECK_FIELD_BIRTH_DATE,
        ids::CHECK_FIELD_RESUME,
        ids::CHECK_FIELD_EMAIL,
        ids::CHECK_FIELD_PASSWORD,
        ids::CHECK_FIELD_CONFIRM_PASSWORD,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_REQUIRED,
        ids::CODE_MALFORMED_NATIONAL_ID,
        ids::CODE_CHECK_DIGIT_MISMATCH,
        ids::CODE_MALFORMED_DATE,
        ids::CODE_NONEXISTENT_DATE,
        ids::CODE_EXTENSION_NOT_ALLOWED,
        ids::CODE_MALFORMED_EMAIL,
        ids::CODE_PASSWORD_LENGTH,
        ids::CODE_PASSWORD_COMPLEXITY,
        ids::CODE_PASSWORD_MISMATCH,
    ]
}

// --- Check-level explanations ---

fn explain_name() -> Explanation {
    Explanation {
        title: "Full Name",
        description: "\
The full name is required. Surrounding whitespace is ignored, so a value made only of
spaces counts as empty.",
        remediation: "Enter the applicant's full name.",
        examples: ExamplePair {
            before: "name = \"   \"",
            after: "name = \"Ada Lovelace\"",
        },
    }
}

fn explain_national_id() -> Explanation {
    Explanation {
        title: "National ID",
        description: "\
The national identifier is required and must carry a valid check digit.

Before checking, dots and hyphens are removed and the value is upper-cased, so
`12.345.678-5`, `12345678-5` and `123456785` are equivalent. The remaining text must be
one or more digits followed by a check character (a digit or `K`).

The check character is computed from the body with a modulus-11 weighted sum: digits are
multiplied by weights 2, 3, 4, 5, 6, 7 (repeating) starting from the least significant
digit. `11 - (sum mod 11)` gives the check character, where 11 maps to `0` and 10 maps to
`K`.",
        remediation: "\
Re-enter the identifier exactly as printed on the identity document, including its check
character. A lowercase `k` is accepted.",
        examples: ExamplePair {
            before: "national_id = \"12.345.678-9\"",
            after: "national_id = \"12.345.678-5\"",
        },
    }
}

fn explain_birth_date() -> Explanation {
    Explanation {
        title: "Birth Date",
        description: "\
The birth date is optional. When present it must be written as `dd/mm/yyyy` and name a
real calendar day: `31/02/2020` and `29/02/2023` are rejected, `29/02/2024` is accepted.",
        remediation: "Use two-digit day and month and a four-digit year, or leave the field empty.",
        examples: ExamplePair {
            before: "birth_date = \"1990-07-14\"",
            after: "birth_date = \"14/07/1990\"",
        },
    }
}

fn explain_resume() -> Explanation {
    Explanation {
        title: "Resume File",
        description: "\
The resume upload is optional. When a file is selected its extension (case-insensitive)
must be one of the allowed extensions, `pdf` and `docx` by default.",
        remediation: "Export the resume as PDF or DOCX, or leave the field empty.",
        examples: ExamplePair {
            before: "resume = \"resume.odt\"",
            after: "resume = \"resume.PDF\"",
        },
    }
}

fn explain_email() -> Explanation {
    Explanation {
        title: "Email",
        description: "\
The email is required and must look like `local@domain.tld`: no whitespace, exactly one
`@`, and a dot inside the domain part with text on both sides.",
        remediation: "Enter a complete address such as `name@example.com`.",
        examples: ExamplePair {
            before: "email = \"ada@localhost\"",
            after: "email = \"ada@example.com\"",
        },
    }
}

fn explain_password() -> Explanation {
    Explanation {
        title: "Password",
        description: "\
The password is required, must be 6 to 12 characters long (configurable), and must contain
at least one lowercase letter, one uppercase letter and one digit. Surrounding spaces are
trimmed before the value is measured.",
        remediation: "Choose a password that satisfies both the length and the character rules.",
        examples: ExamplePair {
            before: "password = \"abcdef1\"",
            after: "password = \"Abcde1\"",
        },
    }
}

fn explain_confirm_password() -> Explanation {
    Explanation {
        title: "Confirm Password",
        description: "\
The confirmation is required and must be identical to the password field, including
letter case.",
        remediation: "Type the same password again.",
        examples: ExamplePair {
            before: "password = \"Abcde1\"\nconfirm_password = \"abcde1\"",
            after: "password = \"Abcde1\"\nconfirm_password = \"Abcde1\"",
        },
    }
}

// --- Code-level explanations ---

fn explain_required() -> Explanation {
    Explanation {
        title: "Required Field Missing",
        description: "\
A required field (name, national_id, email, password or confirm_password) was left
empty. For every field except the two password fields, whitespace-only values count as
empty.",
        remediation: "Fill in the field named in the finding.",
        examples: ExamplePair {
            before: "email = \"\"",
            after: "email = \"ada@example.com\"",
        },
    }
}

fn explain_malformed_national_id() -> Explanation {
    let mut exp = explain_national_id();
    exp.title = "Malformed National ID";
    exp.examples = ExamplePair {
        before: "national_id = \"12A45678-5\"",
        after: "national_id = \"12345678-5\"",
    };
    exp
}

fn explain_check_digit_mismatch() -> Explanation {
    let mut exp = explain_national_id();
    exp.title = "Check Digit Mismatch";
    exp
}

fn explain_malformed_date() -> Explanation {
    let mut exp = explain_birth_date();
    exp.title = "Malformed Date";
    exp
}

fn explain_nonexistent_date() -> Explanation {
    let mut exp = explain_birth_date();
    exp.title = "Nonexistent Date";
    exp.examples = ExamplePair {
        before: "birth_date = \"31/02/2020\"",
        after: "birth_date = \"29/02/2024\"",
    };
    exp
}

fn explain_extension_not_allowed() -> Explanation {
    let mut exp = explain_resume();
    exp.title = "File Extension Not Allowed";
    exp
}

fn explain_malformed_email() -> Explanation {
    let mut exp = explain_email();
    exp.title = "Malformed Email";
    exp
}

fn explain_password_length() -> Explanation {
    let mut exp = explain_password();
    exp.title = "Password Length";
    exp.examples = ExamplePair {
        before: "password = \"Ab1\"",
        after: "password = \"Abcde1\"",
    };
    exp
}

fn explain_password_complexity() -> Explanation {
    let mut exp = explain_password();
    exp.title = "Password Complexity";
    exp
}

fn explain_password_mismatch() -> Explanation {
    let mut exp = explain_confirm_password();
    exp.title = "Passwords Do Not Match";
    exp
}
