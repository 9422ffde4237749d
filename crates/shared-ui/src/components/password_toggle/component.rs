use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff};
use dioxus_free_icons::Icon;

use crate::components::button::{Button, ButtonSize, ButtonVariant};

/// Whether password inputs show their contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordVisibility {
    #[default]
    Masked,
    Revealed,
}

impl PasswordVisibility {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            PasswordVisibility::Masked => PasswordVisibility::Revealed,
            PasswordVisibility::Revealed => PasswordVisibility::Masked,
        }
    }

    /// `type` attribute for inputs governed by this state.
    pub fn input_type(self) -> &'static str {
        match self {
            PasswordVisibility::Masked => "password",
            PasswordVisibility::Revealed => "text",
        }
    }

    pub fn is_revealed(self) -> bool {
        self == PasswordVisibility::Revealed
    }

    fn aria_label(self) -> &'static str {
        match self {
            PasswordVisibility::Masked => "Show password",
            PasswordVisibility::Revealed => "Hide password",
        }
    }
}

/// Flip `visibility` between masked and revealed.
pub fn toggle_password(mut visibility: Signal<PasswordVisibility>) {
    let next = visibility().toggled();
    visibility.set(next);
}

/// Eye button overlaid on the right edge of a password input.
///
/// The parent owns the signal so one toggle can drive several inputs.
#[component]
pub fn PasswordToggle(visibility: Signal<PasswordVisibility>) -> Element {
    let current = visibility();
    let attributes = vec![
        Attribute::new("class", "password-toggle", None, false),
        Attribute::new("aria-label", current.aria_label(), None, false),
        Attribute::new(
            "aria-pressed",
            if current.is_revealed() { "true" } else { "false" },
            None,
            false,
        ),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Button {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Icon,
            onclick: move |_| toggle_password(visibility),
            attributes: attributes,
            if current.is_revealed() {
                Icon::<LdEyeOff> { icon: LdEyeOff, width: 16, height: 16 }
            } else {
                Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
            }
        }
    }
}
