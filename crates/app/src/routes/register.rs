use crate::notify;
use crate::routes::{go_to, Route};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUserPlus;
use dioxus_free_icons::Icon;
use shared_types::{failure_notice, AuthAction, DashboardConfig, RegisterRequest};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Form, FormField, Input, Label, PasswordToggle, PasswordVisibility,
};

/// Registration page. Both password fields share one visibility toggle.
#[component]
pub fn Register() -> Element {
    let toasts = use_toast();
    let config: DashboardConfig = use_context();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let visibility = use_signal(PasswordVisibility::default);
    let mut loading = use_signal(|| false);
    let mut confirm_error = use_signal(|| None::<String>);

    let handle_register = move |_: FormEvent| {
        loading.set(true);
        confirm_error.set(None);

        let req = RegisterRequest {
            email: email(),
            password: password(),
            confirm_password: confirm_password(),
        };
        match shared_types::register(&req) {
            Ok(success) => {
                tracing::info!("registration accepted");
                notify::show(toasts, &success.notice, &config);
                go_to(success.redirect);
            }
            Err(e) => {
                tracing::info!(error = %e, "registration rejected");
                confirm_error.set(e.field_error("confirm_password").map(str::to_string));
                notify::show(toasts, &failure_notice(AuthAction::Register, &e), &config);
            }
        }

        loading.set(false);
    };

    let input_type = visibility().input_type();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Create an account" }
                    CardDescription { "Enter your details to get started" }
                }

                CardContent {
                    Form { onsubmit: handle_register,
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
                                input_type: input_type,
                                id: "password",
                                placeholder: "Password",
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            PasswordToggle { visibility: visibility }
                        }
                        FormField {
                            Label { html_for: "confirm_password", "Confirm Password" }
                            Input {
                                input_type: input_type,
                                id: "confirm_password",
                                placeholder: "Confirm Password",
                                required: true,
                                aria_invalid: if confirm_error().is_some() { "true" } else { "false" },
                                value: confirm_password(),
                                on_input: move |e: FormEvent| confirm_password.set(e.value()),
                            }
                            if let Some(message) = confirm_error() {
                                p { class: "form-field-error", role: "alert", "{message}" }
                            }
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            disabled: loading(),
                            if loading() {
                                "Creating account..."
                            } else {
                                Icon::<LdUserPlus> { icon: LdUserPlus, width: 16, height: 16 }
                                "Create account"
                            }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
