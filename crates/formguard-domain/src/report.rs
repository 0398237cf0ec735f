use crate::model::FieldId;
use formguard_types::{FieldReport, Finding, FormguardData, ValidationResult, Verdict};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldOutcome {
    pub field: FieldId,
    pub result: ValidationResult,
}

/// Result of the validate-all-on-submit hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormOutcome {
    pub verdict: Verdict,
    /// One entry per field, in canonical order.
    pub fields: Vec<FieldOutcome>,
    /// One finding per failed field, in canonical order.
    pub findings: Vec<Finding>,
    pub data: FormguardData,
}

impl FormOutcome {
    pub fn is_pass(&self) -> bool {
        self.verdict == Verdict::Pass
    }

    pub fn result(&self, field: FieldId) -> Option<&ValidationResult> {
        self.fields
            .iter()
            .find(|o| o.field == field)
            .map(|o| &o.result)
    }

    /// `(field, message)` for every failed field.
    pub fn errors(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.fields
            .iter()
            .filter_map(|o| o.result.message.as_deref().map(|m| (o.field, m)))
    }

    pub fn field_reports(&self) -> Vec<FieldReport> {
        self.fields
            .iter()
            .map(|o| FieldReport {
                field: o.field.as_str().to_string(),
                valid: o.result.valid,
                message: o.result.message.clone(),
            })
            .collect()
    }
}
