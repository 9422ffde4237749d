//! Admin pages. Placeholders until the sales features land.

use dioxus::prelude::*;

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        h2 { class: "dashboard-placeholder", "data-emphasis": "true",
            "Admin Dashboard (Coming Soon)"
        }
    }
}

#[component]
pub fn AdminAgents() -> Element {
    rsx! {
        p { class: "dashboard-placeholder", "Agents Management" }
    }
}

#[component]
pub fn AdminSales() -> Element {
    rsx! {
        p { class: "dashboard-placeholder", "Sales Data" }
    }
}

#[component]
pub fn AdminSettings() -> Element {
    rsx! {
        p { class: "dashboard-placeholder", "Admin Settings" }
    }
}
