//! Login page view with username/password form.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, FormError, Input};
use crate::outcome::LOGIN_FAILED;
use crate::{use_api, use_session, Outcome, Route};

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go to the articles
    if session.read().has_token() {
        nav.replace(Route::ArticleList {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            match Outcome::from_result(api.login(username(), password()).await, LOGIN_FAILED) {
                Outcome::Proceed(auth) => {
                    tracing::info!(username = %auth.user.username, "logged in");
                    session.write().set_auth(auth.user, auth.token);
                    nav.push(Route::ArticleList {});
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
                    "Sign in to your account"
                }

                form {
                    onsubmit: handle_login,
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
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    Link {
                        to: Route::Register {},
                        "Sign up"
                    }
                }
            }
        }
    }
}
