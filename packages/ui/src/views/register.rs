//! Registration page view.

use dioxus::prelude::*;
use store::RegisterRequest;

use crate::components::{Button, ButtonVariant, FormError, Input};
use crate::outcome::REGISTER_FAILED;
use crate::{use_api, Outcome, Route};

/// Register page component. A new account still has to sign in afterwards.
#[component]
pub fn Register() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut nickname = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let request = RegisterRequest {
                username: username().trim().to_string(),
                email: email().trim().to_string(),
                nickname: nickname().trim().to_string(),
                password: password(),
            };

            match Outcome::from_result(api.register(&request).await, REGISTER_FAILED) {
                Outcome::Proceed(()) => {
                    tracing::info!(username = %request.username, "registered");
                    nav.push(Route::Login {});
                }
                Outcome::Stay(message) => {
                    loading.set(false);
                    error.set(Some(message));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",

                h2 {
                    class: "auth-title",
                    "Create your account"
                }

                form {
                    onsubmit: handle_register,
                    class: "auth-form",

                    if let Some(err) = error() {
                        FormError { message: err }
                    }

                    Input {
                        kind: "text",
                        placeholder: "Username",
                        required: true,
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }

                    Input {
                        kind: "email",
                        placeholder: "Email address",
                        required: true,
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    Input {
                        kind: "text",
                        placeholder: "Nickname",
                        required: true,
                        value: nickname(),
                        oninput: move |evt: FormEvent| nickname.set(evt.value()),
                    }

                    Input {
                        kind: "password",
                        placeholder: "Password",
                        required: true,
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        kind: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign up" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link {
                        to: Route::Login {},
                        "Sign in"
                    }
                }
            }
        }
    }
}
