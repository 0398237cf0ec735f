use crate::RenderableReport;

/// Render findings as inline error lines for a presentation layer.
///
/// Format:
/// `{field}: {message}` (tool-level findings use their `check_id` instead of a field)
pub fn render_inline_errors(report: &RenderableReport) -> Vec<String> {
    report
        .findings
        .iter()
        .map(|f| {
            let target = f.field.as_deref().unwrap_or(&f.check_id);
            let message = f.message.replace(['\r', '\n'], " ");
            format!("{}: {}", target, message)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableFinding, RenderableVerdict};

    #[test]
    fn one_line_per_finding_keyed_by_field() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Fail,
            findings: vec![
                RenderableFinding {
                    check_id: "field.email".to_string(),
                    code: "malformed_email".to_string(),
                    field: Some("email".to_string()),
                    message: "Email is not valid".to_string(),
                    help: None,
                },
                RenderableFinding {
                    check_id: "tool.runtime".to_string(),
                    code: "runtime_error".to_string(),
                    field: None,
                    message: "read form\ncaused by: missing".to_string(),
                    help: None,
                },
            ],
            fields: Vec::new(),
            data: RenderableData {
                fields_checked: 7,
                fields_failed: 1,
            },
        };

        assert_eq!(
            render_inline_errors(&report),
            vec![
                "email: Email is not valid".to_string(),
                "tool.runtime: read form caused by: missing".to_string(),
            ]
        );
    }
}
