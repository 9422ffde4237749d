use crate::notify;
use crate::routes::{go_to, Route};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogIn;
use dioxus_free_icons::Icon;
use shared_types::{failure_notice, AuthAction, DashboardConfig, LoginRequest, UserRole, ALL_ROLES};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Form, FormField, FormSelect, Input, Label, PasswordToggle, PasswordVisibility,
};

/// Sign-in page.
///
/// There is no account store, so the user picks which dashboard to open and
/// lands on that role's home page.
#[component]
pub fn Login() -> Element {
    let toasts = use_toast();
    let config: DashboardConfig = use_context();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(UserRole::default);
    let visibility = use_signal(PasswordVisibility::default);
    let mut loading = use_signal(|| false);

    let handle_login = move |_: FormEvent| {
        loading.set(true);

        let req = LoginRequest {
            email: email(),
            password: password(),
            role: role(),
        };
        match shared_types::login(&req) {
            Ok(success) => {
                tracing::info!(role = %req.role, "signed in");
                notify::show(toasts, &success.notice, &config);
                go_to(success.redirect);
            }
            Err(e) => {
                tracing::warn!(error = %e, "sign in failed");
                notify::show(toasts, &failure_notice(AuthAction::Login, &e), &config);
            }
        }

        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Welcome back" }
                    CardDescription { "Sign in to your {config.branding.name} account" }
                }

                CardContent {
                    Form { onsubmit: handle_login,
                        FormField {
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "Email",
                                required: true,
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        FormField { class: "form-field-password",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: visibility().input_type(),
                                id: "password",
                                placeholder: "Password",
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            PasswordToggle { visibility: visibility }
                        }
                        FormField {
                            Label { html_for: "role", "Sign in as" }
                            FormSelect {
                                id: "role",
                                value: role().as_str(),
                                onchange: move |e: Event<FormData>| {
                                    role.set(UserRole::from_str_or_default(&e.value()));
                                },
                                for option_role in ALL_ROLES {
                                    option {
                                        key: "{option_role}",
                                        value: option_role.as_str(),
                                        selected: *option_role == role(),
                                        "{option_role.display_name()}"
                                    }
                                }
                            }
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            disabled: loading(),
                            if loading() {
                                "Signing in..."
                            } else {
                                Icon::<LdLogIn> { icon: LdLogIn, width: 16, height: 16 }
                                "Sign in"
                            }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Don't have an account? "
                        Link { to: Route::Register {}, "Create one" }
                    }
                }
            }
        }
    }
}
