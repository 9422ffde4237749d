use dioxus::prelude::*;

mod config;
pub mod notify;
mod routes;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let config = config::config();

    use_hook(|| {
        tracing::info!(
            platform = client_platform(),
            brand = %config.branding.name,
            "sales dashboard starting"
        );
    });

    rsx! {
        AppShell {
            Router::<Route> {}
        }
    }
}

/// Stylesheet, title, config context and toast host shared by every page.
#[component]
fn AppShell(children: Element) -> Element {
    let config = use_context_provider(|| config::config().clone());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "{config.branding.name}" }
        shared_ui::ToastProvider {
            {children}
        }
    }
}
