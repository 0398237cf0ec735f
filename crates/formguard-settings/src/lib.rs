//! Config parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{FormguardConfigV1, PasswordConfig, ResumeConfig};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `formguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<FormguardConfigV1> {
    let cfg: FormguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective policy used by the validator (defaults + config + overrides).
pub fn resolve_config(
    cfg: FormguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
