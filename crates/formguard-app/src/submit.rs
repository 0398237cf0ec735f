//! The `submit` use case: validate every field of a form and produce a report.

use anyhow::Context;
use formguard_domain::{FieldId, FieldValidator, FormInput};
use formguard_settings::Overrides;
use formguard_types::{FormguardReport, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;

use crate::config::load_config;

/// Input for the submit use case.
#[derive(Clone, Debug)]
pub struct SubmitInput<'a> {
    /// JSON object of `field -> string`.
    pub form_json: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct SubmitOutput {
    pub report: FormguardReport,
}

pub fn run_submit(input: SubmitInput<'_>) -> anyhow::Result<SubmitOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = load_config(input.config_text, input.overrides)?;
    let form = parse_form_json(input.form_json).context("parse form input")?;

    let outcome = FieldValidator::new(resolved.policy.clone()).validate_all(&form);
    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at,
        verdict: outcome.verdict,
        fields: outcome.field_reports(),
        findings: outcome.findings,
        data: outcome.data,
    };

    Ok(SubmitOutput { report })
}

/// Read a form from a JSON object. Unknown keys are skipped with a warning;
/// `null` reads as an empty value.
pub fn parse_form_json(text: &str) -> anyhow::Result<FormInput> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse form json")?;
    let Some(object) = value.as_object() else {
        anyhow::bail!("form input must be a JSON object of field -> string");
    };

    let mut form = FormInput::new();
    for (key, raw) in object {
        let field = match key.parse::<FieldId>() {
            Ok(field) => field,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "ignoring unknown form key");
                continue;
            }
        };
        match raw {
            serde_json::Value::String(s) => form.set(field, s.as_str()),
            serde_json::Value::Null => form.set(field, ""),
            other => anyhow::bail!("value for `{key}` must be a string, got {other}"),
        }
    }

    Ok(form)
}

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "formguard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Map verdict to exit code: 0 = pass, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
