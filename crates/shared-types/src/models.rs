use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard role selecting the navigation table and dashboard shell.
///
/// - `Admin` manages agents and sales data.
/// - `Agent` only sees their own dashboard and settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Agent,
}

/// All roles in display order.
pub const ALL_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Agent];

impl UserRole {
    /// Parse a role string. Unknown values default to `Agent`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => UserRole::Admin,
            _ => UserRole::Agent,
        }
    }

    /// Lowercase string, also the URL prefix of the role's routes.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Agent => "agent",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Agent => "Agent",
        }
    }

    /// Title shown in the dashboard header.
    pub fn dashboard_title(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin Dashboard",
            UserRole::Agent => "Agent Dashboard",
        }
    }

    /// Landing page after sign-in.
    pub fn home_path(&self) -> &'static str {
        match self {
            UserRole::Admin => "/admin/dashboard",
            UserRole::Agent => "/agent/dashboard",
        }
    }

    /// Sidebar links for this role.
    pub fn nav_items(&self) -> &'static [NavItem] {
        match self {
            UserRole::Admin => ADMIN_NAV_ITEMS,
            UserRole::Agent => AGENT_NAV_ITEMS,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon shown next to a sidebar link. Mapped to a concrete icon by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Users,
    Spreadsheet,
    Settings,
}

/// One sidebar navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: NavIcon,
    pub href: &'static str,
}

pub const ADMIN_NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        icon: NavIcon::Dashboard,
        href: "/admin/dashboard",
    },
    NavItem {
        label: "Agents",
        icon: NavIcon::Users,
        href: "/admin/agents",
    },
    NavItem {
        label: "Sales Data",
        icon: NavIcon::Spreadsheet,
        href: "/admin/sales",
    },
    NavItem {
        label: "Settings",
        icon: NavIcon::Settings,
        href: "/admin/settings",
    },
];

pub const AGENT_NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        icon: NavIcon::Dashboard,
        href: "/agent/dashboard",
    },
    NavItem {
        label: "Settings",
        icon: NavIcon::Settings,
        href: "/agent/settings",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn admin_has_four_nav_items() {
        assert_eq!(UserRole::Admin.nav_items().len(), 4);
    }

    #[test]
    fn agent_has_two_nav_items() {
        assert_eq!(UserRole::Agent.nav_items().len(), 2);
    }

    #[test]
    fn nav_hrefs_stay_under_role_prefix() {
        for role in ALL_ROLES {
            let prefix = format!("/{}/", role.as_str());
            for item in role.nav_items() {
                assert!(
                    item.href.starts_with(&prefix),
                    "{} is outside {prefix}",
                    item.href
                );
            }
        }
    }

    #[test]
    fn first_nav_item_is_the_home_page() {
        for role in ALL_ROLES {
            assert_eq!(role.nav_items()[0].href, role.home_path());
        }
    }

    #[test]
    fn admin_nav_labels_in_order() {
        let labels: Vec<&str> = ADMIN_NAV_ITEMS.iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Agents", "Sales Data", "Settings"]);
    }

    #[test]
    fn role_parsing_defaults_to_agent() {
        assert_eq!(UserRole::from_str_or_default("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_str_or_default(" ADMIN "), UserRole::Admin);
        assert_eq!(UserRole::from_str_or_default("agent"), UserRole::Agent);
        assert_eq!(UserRole::from_str_or_default("root"), UserRole::Agent);
        assert_eq!(UserRole::from_str_or_default(""), UserRole::Agent);
    }

    #[test]
    fn role_as_str_roundtrip() {
        for role in ALL_ROLES {
            assert_eq!(UserRole::from_str_or_default(role.as_str()), *role);
        }
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), r#""admin""#);
        let parsed: UserRole = serde_json::from_str(r#""agent""#).unwrap();
        assert_eq!(parsed, UserRole::Agent);
    }

    #[test]
    fn dashboard_titles() {
        assert_eq!(UserRole::Admin.dashboard_title(), "Admin Dashboard");
        assert_eq!(UserRole::Agent.dashboard_title(), "Agent Dashboard");
    }
}
