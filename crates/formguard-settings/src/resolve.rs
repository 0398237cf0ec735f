use crate::model::FormguardConfigV1;
use anyhow::Context;
use formguard_domain::{FieldId, FormPolicy};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub password_min_length: Option<u32>,
    pub password_max_length: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub policy: FormPolicy,
}

pub fn resolve_config(
    cfg: FormguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut policy = FormPolicy::default();

    // Password bounds
    if let Some(min) = overrides.password_min_length.or(cfg.password.min_length) {
        policy.password_min_length = min as usize;
    }
    if let Some(max) = overrides.password_max_length.or(cfg.password.max_length) {
        policy.password_max_length = max as usize;
    }
    validate_password_bounds(&policy).context("invalid password bounds")?;

    // Resume extensions
    if let Some(exts) = cfg.resume.allowed_extensions.as_deref() {
        policy.allowed_extensions = normalize_extensions(exts)?;
    }

    // Message overrides
    for (key, message) in cfg.messages {
        validate_message_key(&key)?;
        policy.messages.insert(key, message);
    }

    tracing::debug!(
        password_min_length = policy.password_min_length,
        password_max_length = policy.password_max_length,
        allowed_extensions = ?policy.allowed_extensions,
        message_overrides = policy.messages.len(),
        "resolved form policy"
    );

    Ok(ResolvedConfig { policy })
}

fn validate_password_bounds(policy: &FormPolicy) -> anyhow::Result<()> {
    if policy.password_min_length == 0 {
        anyhow::bail!("min_length must be at least 1");
    }
    if policy.password_min_length > policy.password_max_length {
        anyhow::bail!(
            "min_length ({}) exceeds max_length ({})",
            policy.password_min_length,
            policy.password_max_length
        );
    }
    Ok(())
}

fn normalize_extensions(exts: &[String]) -> anyhow::Result<Vec<String>> {
    let mut out: Vec<String> = Vec::with_capacity(exts.len());
    for ext in exts {
        let normalized = ext.trim().trim_start_matches('.').to_lowercase();
        if normalized.is_empty() || normalized.contains(['.', '/', '\\']) {
            anyhow::bail!("invalid resume extension: {ext:?}");
        }
        if !out.contains(&normalized) {
            out.push(normalized);
        }
    }
    if out.is_empty() {
        anyhow::bail!("resume.allowed_extensions must not be empty");
    }
    Ok(out)
}

fn validate_message_key(key: &str) -> anyhow::Result<()> {
    let (field, code) = key
        .split_once('.')
        .with_context(|| format!("invalid message key: {key} (expected <field>.<code>)"))?;
    let field: FieldId = field
        .parse()
        .with_context(|| format!("invalid message key: {key}"))?;
    if !field.codes().contains(&code) {
        anyhow::bail!(
            "invalid message key: {key} ({field} reports: {})",
            field.codes().join(", ")
        );
    }
    if key != FormPolicy::message_key(field, code) {
        anyhow::bail!(
            "invalid message key: {key} (use {})",
            FormPolicy::message_key(field, code)
        );
    }
    Ok(())
}
