use crate::{RenderableReport, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Formguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Fields: {} checked / {} failed\n\n",
        verdict, report.data.fields_checked, report.data.fields_failed
    ));

    if !report.fields.is_empty() {
        out.push_str("## Fields\n\n");
        out.push_str("| Field | Status | Message |\n");
        out.push_str("|---|---|---|\n");
        for f in &report.fields {
            out.push_str(&format!(
                "| `{}` | {} | {} |\n",
                f.field,
                if f.valid { "ok" } else { "error" },
                escape_cell(f.message.as_deref().unwrap_or(""))
            ));
        }
        out.push('\n');
    }

    if report.findings.is_empty() {
        out.push_str("All fields passed.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        out.push_str(&format!("- `{}` / `{}`: {}\n", f.check_id, f.code, f.message));
        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
