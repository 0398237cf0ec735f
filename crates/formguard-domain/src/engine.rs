use crate::checks::{self, Violation};
use crate::model::{FieldId, FormContext, FormInput};
use crate::policy::FormPolicy;
use crate::report::{FieldOutcome, FormOutcome};
use formguard_types::{Finding, FormguardData, ValidationResult, Verdict};

/// Entry point for presentation layers: one call per blur/change event,
/// or `validate_all` on submit.
#[derive(Clone, Debug, Default)]
pub struct FieldValidator {
    policy: FormPolicy,
}

impl FieldValidator {
    pub fn new(policy: FormPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &FormPolicy {
        &self.policy
    }

    /// Validate one raw value. Never fails: bad input is an invalid result.
    pub fn validate(&self, field: FieldId, raw: &str, ctx: &FormContext<'_>) -> ValidationResult {
        let result = match self.check(field, raw, ctx) {
            Ok(()) => ValidationResult::ok(),
            Err(v) => ValidationResult::fail(v.code, self.message_for(field, &v)),
        };
        tracing::debug!(
            field = %field,
            valid = result.valid,
            code = result.code.as_deref().unwrap_or(""),
            "field validated"
        );
        result
    }

    /// Validate every field in canonical order, taking the password context
    /// from the input itself.
    pub fn validate_all(&self, input: &FormInput) -> FormOutcome {
        let ctx = input.context();
        let mut fields = Vec::with_capacity(FieldId::ALL.len());
        let mut findings = Vec::new();

        for field in FieldId::ALL {
            let raw = input.get(field);
            let result = match self.check(field, raw, &ctx) {
                Ok(()) => ValidationResult::ok(),
                Err(v) => {
                    let message = self.message_for(field, &v);
                    findings.push(Finding {
                        check_id: field.check_id().to_string(),
                        code: v.code.to_string(),
                        field: Some(field.as_str().to_string()),
                        message: message.clone(),
                        help: Some(v.help.to_string()),
                    });
                    ValidationResult::fail(v.code, message)
                }
            };
            fields.push(FieldOutcome { field, result });
        }

        let verdict = if findings.is_empty() {
            Verdict::Pass
        } else {
            Verdict::Fail
        };
        let data = FormguardData {
            fields_checked: fields.len() as u32,
            fields_failed: findings.len() as u32,
        };
        tracing::debug!(
            verdict = ?verdict,
            fields_failed = data.fields_failed,
            "form evaluated"
        );

        FormOutcome {
            verdict,
            fields,
            findings,
            data,
        }
    }

    fn check(&self, field: FieldId, raw: &str, ctx: &FormContext<'_>) -> Result<(), Violation> {
        let spec = field.spec();
        let value = raw.trim();
        if value.is_empty() {
            return if spec.required {
                Err(checks::required_violation(field))
            } else {
                Ok(())
            };
        }
        checks::run(spec.rule, value, ctx, &self.policy)
    }

    fn message_for(&self, field: FieldId, violation: &Violation) -> String {
        self.policy
            .message_override(field, violation.code)
            .map(str::to_string)
            .unwrap_or_else(|| violation.message.clone())
    }
}

/// Validate one field with the default policy.
pub fn validate(field: FieldId, raw: &str, ctx: &FormContext<'_>) -> ValidationResult {
    FieldValidator::default().validate(field, raw, ctx)
}

/// Validate a whole form under `policy`.
pub fn validate_all(input: &FormInput, policy: &FormPolicy) -> FormOutcome {
    FieldValidator::new(policy.clone()).validate_all(input)
}
