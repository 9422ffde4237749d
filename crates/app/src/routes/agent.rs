//! Agent pages. Placeholders until the sales features land.

use dioxus::prelude::*;

#[component]
pub fn AgentDashboard() -> Element {
    rsx! {
        h2 { class: "dashboard-placeholder", "data-emphasis": "true",
            "Agent Dashboard (Coming Soon)"
        }
    }
}

#[component]
pub fn AgentSettings() -> Element {
    rsx! {
        p { class: "dashboard-placeholder", "Agent Settings" }
    }
}
