use pretty_assertions::assert_eq;
use shared_types::DashboardConfig;

const WORKSPACE_CONFIG: &str = include_str!("../../../config.toml");

#[test]
fn shipped_config_matches_defaults() {
    let config: DashboardConfig = toml::from_str(WORKSPACE_CONFIG).unwrap();
    assert_eq!(config, DashboardConfig::default());
}
