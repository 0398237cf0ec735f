use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for formguard reports.
pub const SCHEMA_REPORT_V1: &str = "formguard.report.v1";

/// Verdict for a single field check.
///
/// Produced fresh per call and never stored by the validator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationResult {
    pub valid: bool,

    /// User-facing message; present only on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Stable code of the failed check (see `ids`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
            code: None,
        }
    }

    pub fn fail(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
            code: Some(code.into()),
        }
    }
}

/// Overall submission verdict: a form passes only when every field is valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub check_id: String,
    pub code: String,

    /// Canonical field name; absent for tool-level findings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

/// Per-field line of a submission report, in canonical field order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldReport {
    pub field: String,
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Formguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct FormguardData {
    pub fields_checked: u32,
    pub fields_failed: u32,
}

/// A generic receipt/envelope.
///
/// Keeping this generic lets tools embed their own summary while the outer shape stays stable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = FormguardData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    #[serde(default)]
    pub fields: Vec<FieldReport>,
    pub data: TData,
}

pub type FormguardReport = ReportEnvelope<FormguardData>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn passing_result_serializes_without_message() {
        let value = serde_json::to_value(ValidationResult::ok()).expect("serialize");
        assert_eq!(value, json!({ "valid": true }));
    }

    #[test]
    fn failing_result_carries_code_and_message() {
        let result = ValidationResult::fail("required", "Email is required");
        let value = serde_json::to_value(&result).expect("serialize");
        assert_eq!(
            value,
            json!({ "valid": false, "message": "Email is required", "code": "required" })
        );
    }

    #[test]
    fn verdict_is_lowercase_on_the_wire() {
        assert_eq!(serde_json::to_value(Verdict::Fail).unwrap(), json!("fail"));
    }
}
