use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page for any path outside the route table.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    use_hook({
        let path = path.clone();
        move || tracing::warn!(path = %path, "attempted to access a non-existent route")
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "The page "
                    code { "{path}" }
                    " could not be found."
                }
                Link { to: Route::Login {},
                    class: "not-found-link",
                    "Return to sign in"
                }
            }
        }
    }
}
