use serde::{Deserialize, Serialize};

/// Branding shown in the sidebar header and page titles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandingConfig {
    #[serde(default = "default_brand_name")]
    pub name: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            name: default_brand_name(),
        }
    }
}

fn default_brand_name() -> String {
    "Sales Dashboard".to_string()
}

/// Dashboard chrome settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Whether the sidebar is expanded when a dashboard first mounts.
    #[serde(default = "default_true")]
    pub sidebar_open_by_default: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sidebar_open_by_default: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Toast behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    #[serde(default = "default_toast_duration_secs")]
    pub toast_duration_secs: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            toast_duration_secs: default_toast_duration_secs(),
        }
    }
}

fn default_toast_duration_secs() -> u64 {
    4
}

/// Top-level config file structure matching `config.toml`.
///
/// Every field has a default so that a missing or partial file still
/// yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub branding: BrandingConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}
