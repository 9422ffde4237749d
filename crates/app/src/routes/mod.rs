pub mod admin;
pub mod agent;
pub mod layout;
pub mod login;
pub mod not_found;
pub mod register;

use dioxus::prelude::*;
use shared_types::UserRole;

use admin::{AdminAgents, AdminDashboard, AdminSales, AdminSettings};
use agent::{AgentDashboard, AgentSettings};
use layout::DashboardLayout;
use login::Login;
use not_found::NotFound;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[nest("/admin")]
        #[layout(AdminShell)]
            #[route("/dashboard")]
            AdminDashboard {},
            #[route("/agents")]
            AdminAgents {},
            #[route("/sales")]
            AdminSales {},
            #[route("/settings")]
            AdminSettings {},
        #[end_layout]
    #[end_nest]
    #[nest("/agent")]
        #[layout(AgentShell)]
            #[route("/dashboard")]
            AgentDashboard {},
            #[route("/settings")]
            AgentSettings {},
        #[end_layout]
    #[end_nest]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Dashboard chrome for everything under `/admin`.
#[component]
fn AdminShell() -> Element {
    rsx! {
        DashboardLayout { role: UserRole::Admin,
            Outlet::<Route> {}
        }
    }
}

/// Dashboard chrome for everything under `/agent`.
#[component]
fn AgentShell() -> Element {
    rsx! {
        DashboardLayout { role: UserRole::Agent,
            Outlet::<Route> {}
        }
    }
}

/// Navigate to an absolute in-app path such as an auth redirect target.
///
/// Paths go through the route table, so `/` lands on the login page.
pub fn go_to(path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            tracing::debug!(path, "navigating");
            navigator().push(route);
        }
        Err(e) => {
            tracing::warn!(path, error = %e, "navigation target is not a known route");
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{ADMIN_NAV_ITEMS, AGENT_NAV_ITEMS, LOGIN_PATH, REGISTER_PATH, ROOT_PATH};

    fn parse(path: &str) -> Option<Route> {
        path.parse::<Route>().ok()
    }

    #[test]
    fn root_redirects_to_login() {
        assert_eq!(parse(ROOT_PATH), Some(Route::Login {}));
    }

    #[test]
    fn auth_pages_resolve() {
        assert_eq!(parse(LOGIN_PATH), Some(Route::Login {}));
        assert_eq!(parse(REGISTER_PATH), Some(Route::Register {}));
    }

    #[test]
    fn admin_pages_resolve() {
        assert_eq!(parse("/admin/dashboard"), Some(Route::AdminDashboard {}));
        assert_eq!(parse("/admin/agents"), Some(Route::AdminAgents {}));
        assert_eq!(parse("/admin/sales"), Some(Route::AdminSales {}));
        assert_eq!(parse("/admin/settings"), Some(Route::AdminSettings {}));
    }

    #[test]
    fn agent_pages_resolve() {
        assert_eq!(parse("/agent/dashboard"), Some(Route::AgentDashboard {}));
        assert_eq!(parse("/agent/settings"), Some(Route::AgentSettings {}));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        for path in ["/nope", "/admin", "/agent/sales", "/admin/dashboard/extra", "/login/x"] {
            assert!(
                matches!(parse(path), Some(Route::NotFound { .. })),
                "{path} should be not-found, got {:?}",
                parse(path)
            );
        }
    }

    #[test]
    fn not_found_keeps_the_attempted_segments() {
        assert_eq!(
            parse("/reports/q3"),
            Some(Route::NotFound {
                route: vec!["reports".to_string(), "q3".to_string()],
            })
        );
    }

    #[test]
    fn every_nav_item_links_to_a_real_page() {
        for item in ADMIN_NAV_ITEMS.iter().chain(AGENT_NAV_ITEMS) {
            let route = parse(item.href).expect("nav href parses");
            assert!(
                !matches!(route, Route::NotFound { .. }),
                "{} has no page",
                item.href
            );
            assert_eq!(route.to_string(), item.href);
        }
    }

    #[test]
    fn role_home_paths_are_routes() {
        assert_eq!(
            parse(UserRole::Admin.home_path()),
            Some(Route::AdminDashboard {})
        );
        assert_eq!(
            parse(UserRole::Agent.home_path()),
            Some(Route::AgentDashboard {})
        );
    }

    #[test]
    fn routes_display_as_paths() {
        assert_eq!(Route::Login {}.to_string(), "/login");
        assert_eq!(Route::AgentSettings {}.to_string(), "/agent/settings");
    }
}
