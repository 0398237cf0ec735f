use anyhow::Context;
use formguard_render::{
    RenderableData, RenderableField, RenderableFinding, RenderableReport, RenderableVerdict,
};
use formguard_types::{
    Finding, FormguardData, FormguardReport, ReportEnvelope, SCHEMA_REPORT_V1, Verdict, ids,
};
use time::OffsetDateTime;

use crate::submit::tool_meta;

pub fn parse_report_json(text: &str) -> anyhow::Result<FormguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse formguard v1 report")
}

pub fn serialize_report(report: &FormguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &FormguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        fields: report
            .fields
            .iter()
            .map(|f| RenderableField {
                field: f.field.clone(),
                valid: f.valid,
                message: f.message.clone(),
            })
            .collect(),
        data: RenderableData {
            fields_checked: report.data.fields_checked,
            fields_failed: report.data.fields_failed,
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        check_id: f.check_id.clone(),
        code: f.code.clone(),
        field: f.field.clone(),
        message: f.message.clone(),
        help: f.help.clone(),
    }
}

/// Report written when a submission could not be evaluated at all.
pub fn runtime_error_report(message: &str) -> FormguardReport {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            field: None,
            message: message.to_string(),
            help: Some("Fix the tool error and re-run formguard.".to_string()),
        }],
        fields: Vec::new(),
        data: FormguardData::default(),
    }
}
