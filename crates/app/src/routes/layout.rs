use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdChartColumn, LdFileSpreadsheet, LdLogOut, LdMenu, LdSettings, LdUsers, LdX,
};
use dioxus_free_icons::Icon;
use shared_types::{DashboardConfig, NavIcon, NavItem, UserRole};
use shared_ui::{
    use_sidebar_open, use_toast, Button, ButtonVariant, Sidebar, SidebarContent, SidebarFooter,
    SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem,
    SidebarProvider, SidebarTrigger,
};

use crate::notify;
use crate::routes::{go_to, Route};

/// Sidebar + header chrome around role-specific dashboard pages.
#[component]
pub fn DashboardLayout(role: UserRole, children: Element) -> Element {
    let config: DashboardConfig = use_context();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: config.layout.sidebar_open_by_default,
            Sidebar {
                SidebarHeader {
                    h2 { class: "sidebar-brand", "{config.branding.name}" }
                }
                SidebarContent {
                    SidebarMenu {
                        for item in role.nav_items() {
                            NavLink { key: "{item.href}", item: *item }
                        }
                    }
                }
                SidebarFooter {
                    LogoutButton {}
                }
            }

            SidebarInset {
                header { class: "dashboard-header",
                    SidebarTrigger { SidebarTriggerIcon {} }
                    h1 { class: "dashboard-title", "{role.dashboard_title()}" }
                }
                main { class: "dashboard-main", {children} }
            }
        }
    }
}

#[component]
fn NavLink(item: NavItem) -> Element {
    let route: Route = use_route();
    let active = route.to_string() == item.href;

    rsx! {
        SidebarMenuItem {
            Link { to: item.href,
                SidebarMenuButton { active,
                    NavItemIcon { icon: item.icon }
                    "{item.label}"
                }
            }
        }
    }
}

#[component]
fn NavItemIcon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! {
            Icon::<LdChartColumn> { icon: LdChartColumn, width: 20, height: 20 }
        },
        NavIcon::Users => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 }
        },
        NavIcon::Spreadsheet => rsx! {
            Icon::<LdFileSpreadsheet> { icon: LdFileSpreadsheet, width: 20, height: 20 }
        },
        NavIcon::Settings => rsx! {
            Icon::<LdSettings> { icon: LdSettings, width: 20, height: 20 }
        },
    }
}

/// Close icon while the sidebar is open, hamburger while it is closed.
#[component]
fn SidebarTriggerIcon() -> Element {
    if use_sidebar_open() {
        rsx! { Icon::<LdX> { icon: LdX, width: 20, height: 20 } }
    } else {
        rsx! { Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 } }
    }
}

#[component]
fn LogoutButton() -> Element {
    let toasts = use_toast();
    let config: DashboardConfig = use_context();

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            class: "sidebar-logout",
            onclick: move |_| {
                let outcome = shared_types::logout();
                tracing::info!("user logged out");
                notify::show(toasts, &outcome.notice, &config);
                go_to(outcome.redirect);
            },
            Icon::<LdLogOut> { icon: LdLogOut, width: 20, height: 20 }
            "Logout"
        }
    }
}
