use dioxus::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};

// ─── Context ───────────────────────────────────────────────────────────

/// Open/closed state of the dashboard sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// `data-state` value consumed by the stylesheet.
    pub fn data_state(self) -> &'static str {
        if self.open {
            "open"
        } else {
            "closed"
        }
    }
}

/// Provides sidebar state to the sidebar, inset and trigger below it.
///
/// State lives as long as the provider is mounted.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if (state)().open { "true" } else { "false" },
            {children}
        }
    }
}

/// Shared state of the enclosing [`SidebarProvider`].
pub fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

/// Whether the enclosing sidebar is currently open.
pub fn use_sidebar_open() -> bool {
    use_sidebar()().open
}

/// Open a closed sidebar or close an open one.
pub fn toggle_sidebar(mut state: Signal<SidebarState>) {
    let next = state().toggled();
    state.set(next);
}

// ─── Layout components ─────────────────────────────────────────────────

/// Fixed-width panel that slides out of view when closed.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let state = use_sidebar();

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new("data-state", (state)().data_state(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Scrollable middle section of the Sidebar.
#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

// ─── Menu components ───────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-menu", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        nav {
            ul {
                ..merged,
                {children}
            }
        }
    }
}

#[component]
pub fn SidebarMenuItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-menu-item", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        li {
            ..merged,
            {children}
        }
    }
}

/// Row content of a menu link. `active` highlights the current page.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sidebar-menu-button", None, false),
        Attribute::new(
            "data-active",
            if active { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        span {
            ..merged,
            {children}
        }
    }
}

// ─── Utility components ────────────────────────────────────────────────

/// Header button that opens/closes the sidebar.
#[component]
pub fn SidebarTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let state = use_sidebar();
    let open = state().open;

    let base = vec![
        Attribute::new("class", "sidebar-trigger", None, false),
        Attribute::new(
            "aria-label",
            if open { "Close sidebar" } else { "Open sidebar" },
            None,
            false,
        ),
        Attribute::new("aria-expanded", if open { "true" } else { "false" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Icon,
            onclick: move |_| toggle_sidebar(state),
            attributes: merged,
            {children}
        }
    }
}

/// Main column next to the Sidebar. Its left padding tracks the sidebar.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-inset", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}
