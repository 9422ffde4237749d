use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_ui::{toggle_password, Input, PasswordToggle, PasswordVisibility};
use std::cell::Cell;

use crate::common::count;

thread_local! {
    static VISIBILITY: Cell<Option<Signal<PasswordVisibility>>> = Cell::new(None);
}

/// A password input wired to its eye toggle the way the auth forms do it.
fn password_field() -> Element {
    let visibility = use_signal(PasswordVisibility::default);
    use_hook(|| VISIBILITY.with(|slot| slot.set(Some(visibility))));

    rsx! {
        Input { id: "password", input_type: visibility().input_type(), value: "hunter2" }
        PasswordToggle { visibility: visibility }
    }
}

fn mount() -> VirtualDom {
    let mut dom = VirtualDom::new(password_field);
    dom.rebuild_in_place();
    dom
}

/// Runs the toggle's click action and returns the re-rendered HTML.
fn click_toggle(dom: &mut VirtualDom) -> String {
    let visibility = VISIBILITY
        .with(|slot| slot.get())
        .expect("password field is mounted");
    dom.in_runtime(|| toggle_password(visibility));
    dom.render_immediate_to_vec();
    dioxus_ssr::render(dom)
}

#[test]
fn field_starts_masked() {
    let html = dioxus_ssr::render(&mount());
    assert!(html.contains(r#"type="password""#), "{html}");
    assert!(html.contains("Show password"), "{html}");
    assert!(html.contains(r#"aria-pressed="false""#), "{html}");
}

#[test]
fn click_reveals_the_password() {
    let mut dom = mount();
    let html = click_toggle(&mut dom);
    assert!(html.contains(r#"type="text""#), "{html}");
    assert!(!html.contains(r#"type="password""#), "{html}");
    assert!(html.contains("Hide password"), "{html}");
    assert!(html.contains(r#"aria-pressed="true""#), "{html}");
}

#[test]
fn each_click_alternates_the_input_type() {
    let mut dom = mount();
    let mut seen = Vec::new();
    for _ in 0..4 {
        let html = click_toggle(&mut dom);
        seen.push(if count(&html, r#"type="text""#) == 1 {
            "text"
        } else {
            "password"
        });
    }
    assert_eq!(seen, vec!["text", "password", "text", "password"]);
}
