use anyhow::Context;
use formguard_settings::{FormguardConfigV1, Overrides, ResolvedConfig};

/// Parse and resolve config text. An empty string means "no config file"; defaults apply.
pub fn load_config(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        FormguardConfigV1::default()
    } else {
        formguard_settings::parse_config_toml(config_text).context("parse config")?
    };

    formguard_settings::resolve_config(cfg, overrides).context("resolve config")
}
