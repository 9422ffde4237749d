use shared_types::DashboardConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<DashboardConfig> = OnceLock::new();

/// Workspace `config.toml`, embedded so web builds need no file access.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parsed dashboard config. Parsed on first call; later calls are free.
pub fn config() -> &'static DashboardConfig {
    CONFIG.get_or_init(|| parse_config(CONFIG_TOML))
}

/// Parse config text, falling back to defaults when it is malformed.
fn parse_config(contents: &str) -> DashboardConfig {
    match toml::from_str::<DashboardConfig>(contents) {
        Ok(config) => {
            tracing::debug!(?config, "loaded dashboard config");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "invalid config.toml, using defaults");
            DashboardConfig::default()
        }
    }
}
