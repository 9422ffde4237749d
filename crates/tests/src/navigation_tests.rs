use pretty_assertions::assert_eq;
use shared_types::{NavIcon, UserRole, ADMIN_NAV_ITEMS, AGENT_NAV_ITEMS};
use std::collections::HashSet;

#[test]
fn nav_sizes_per_role() {
    assert_eq!(UserRole::Admin.nav_items().len(), 4);
    assert_eq!(UserRole::Agent.nav_items().len(), 2);
}

#[test]
fn nav_hrefs_are_unique() {
    for items in [ADMIN_NAV_ITEMS, AGENT_NAV_ITEMS] {
        let hrefs: HashSet<&str> = items.iter().map(|i| i.href).collect();
        assert_eq!(hrefs.len(), items.len());
    }
}

#[test]
fn agent_nav_is_dashboard_and_settings() {
    let pairs: Vec<(&str, NavIcon)> = AGENT_NAV_ITEMS.iter().map(|i| (i.label, i.icon)).collect();
    assert_eq!(
        pairs,
        vec![("Dashboard", NavIcon::Dashboard), ("Settings", NavIcon::Settings)]
    );
}

#[test]
fn admin_nav_icons() {
    let icons: Vec<NavIcon> = ADMIN_NAV_ITEMS.iter().map(|i| i.icon).collect();
    assert_eq!(
        icons,
        vec![
            NavIcon::Dashboard,
            NavIcon::Users,
            NavIcon::Spreadsheet,
            NavIcon::Settings
        ]
    );
}
