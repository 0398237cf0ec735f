//! The `explain` use case: documentation for a field check or a finding code,
//! cross-referenced with the field/code table.

use formguard_domain::FieldId;
use formguard_types::explain::{self, Explanation};

/// What an identifier resolved to.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// A field check, looked up by check id or by any accepted field spelling.
    Check {
        field: FieldId,
        explanation: Explanation,
    },
    /// A finding code together with every field that can report it.
    Code {
        code: &'static str,
        explanation: Explanation,
        fields: Vec<FieldId>,
    },
    NotFound {
        identifier: String,
    },
}

impl ExplainOutput {
    pub fn is_found(&self) -> bool {
        !matches!(self, ExplainOutput::NotFound { .. })
    }
}

/// Resolve `identifier` as a check id (`field.email`), a field name
/// (`email`, `rut`, `fechaNacimiento`) or a code (`password_mismatch`).
pub fn run_explain(identifier: &str) -> ExplainOutput {
    let identifier = identifier.trim();

    let field = FieldId::ALL
        .into_iter()
        .find(|f| f.check_id() == identifier)
        .or_else(|| identifier.parse().ok());
    if let Some(field) = field
        && let Some(explanation) = explain::lookup_explanation(field.check_id())
    {
        return ExplainOutput::Check { field, explanation };
    }

    if let Some(&code) = explain::all_codes().iter().find(|c| **c == identifier)
        && let Some(explanation) = explain::lookup_explanation(code)
    {
        let fields = FieldId::ALL
            .into_iter()
            .filter(|f| f.codes().contains(&code))
            .collect();
        return ExplainOutput::Code {
            code,
            explanation,
            fields,
        };
    }

    ExplainOutput::NotFound {
        identifier: identifier.to_string(),
    }
}

/// Terminal text for any explain outcome.
pub fn format_explain(output: &ExplainOutput) -> String {
    match output {
        ExplainOutput::Check { field, explanation } => {
            let spec = field.spec();
            let mut out = heading(explanation, field.check_id());
            out.push_str(&format!(
                "Field `{}` is {}.\n\n",
                field,
                if spec.required { "required" } else { "optional" }
            ));
            push_body(&mut out, explanation);
            out.push_str("Codes\n-----\n");
            for code in field.codes() {
                let title = explain::lookup_explanation(code).map_or("", |e| e.title);
                out.push_str(&format!("  - {code}: {title}\n"));
            }
            out.push('\n');
            push_examples(&mut out, explanation);
            out
        }
        ExplainOutput::Code {
            code,
            explanation,
            fields,
        } => {
            let mut out = heading(explanation, code);
            push_body(&mut out, explanation);
            out.push_str("Reported by\n-----------\n");
            for field in fields {
                out.push_str(&format!("  - {} ({})\n", field, field.check_id()));
            }
            out.push('\n');
            push_examples(&mut out, explanation);
            out
        }
        ExplainOutput::NotFound { identifier } => {
            let mut out = format!("Unknown check id or code: {identifier}\n\nField checks:\n");
            for field in FieldId::ALL {
                out.push_str(&format!(
                    "  - {}: {}\n",
                    field.check_id(),
                    field.codes().join(", ")
                ));
            }
            out
        }
    }
}

fn heading(explanation: &Explanation, identifier: &str) -> String {
    let title = format!("{} ({})", explanation.title, identifier);
    format!("{title}\n{}\n\n", "=".repeat(title.chars().count()))
}

fn push_body(out: &mut String, explanation: &Explanation) {
    out.push_str(explanation.description);
    out.push_str("\n\nRemediation\n-----------\n");
    out.push_str(explanation.remediation);
    out.push_str("\n\n");
}

fn push_examples(out: &mut String, explanation: &Explanation) {
    out.push_str("Rejected input:\n");
    for line in explanation.examples.before.lines() {
        out.push_str(&format!("    {line}\n"));
    }
    out.push_str("\nAccepted input:\n");
    for line in explanation.examples.after.lines() {
        out.push_str(&format!("    {line}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formguard_types::ids;

    #[test]
    fn field_aliases_resolve_to_their_check() {
        for identifier in ["field.national_id", "national_id", "nationalId", "rut"] {
            match run_explain(identifier) {
                ExplainOutput::Check { field, .. } => assert_eq!(field, FieldId::NationalId),
                other => panic!("{identifier} resolved to {other:?}"),
            }
        }
    }

    #[test]
    fn code_lists_every_field_that_reports_it() {
        let ExplainOutput::Code { code, fields, .. } = run_explain(ids::CODE_REQUIRED) else {
            panic!("required should resolve to a code");
        };
        assert_eq!(code, ids::CODE_REQUIRED);
        assert_eq!(
            fields,
            vec![
                FieldId::Name,
                FieldId::NationalId,
                FieldId::Email,
                FieldId::Password,
                FieldId::ConfirmPassword,
            ]
        );
    }

    #[test]
    fn optional_check_lists_codes_without_required() {
        let text = format_explain(&run_explain("fechaNacimiento"));
        assert!(text.starts_with("Birth Date (field.birth_date)\n"));
        assert!(text.contains("Field `birth_date` is optional."));
        assert!(text.contains("  - malformed_date: "));
        assert!(text.contains("  - nonexistent_date: "));
        assert!(!text.contains("  - required: "));
    }

    #[test]
    fn code_text_names_reporting_fields() {
        let text = format_explain(&run_explain(" password_mismatch "));
        assert!(text.contains("Reported by"));
        assert!(text.contains("  - confirm_password (field.confirm_password)\n"));
        assert!(!text.contains("  - password (field.password)\n"));
        assert!(text.contains("Accepted input:\n    password = \"Abcde1\"\n"));
    }

    #[test]
    fn unknown_identifier_lists_the_field_code_table() {
        let output = run_explain("field.phone");
        assert!(!output.is_found());

        let text = format_explain(&output);
        assert!(text.starts_with("Unknown check id or code: field.phone\n"));
        assert!(text.contains(
            "  - field.national_id: required, malformed_national_id, check_digit_mismatch\n"
        ));
        assert_eq!(text.lines().filter(|l| l.starts_with("  - field.")).count(), 7);
    }
}
