use dioxus::prelude::*;

use crate::auth::{use_session, LogoutButton};
use crate::icons::FaFeather;
use crate::{Icon, Route};

/// Top bar of the protected area: brand link, greeting and logout.
#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let username = session
        .read()
        .user()
        .map(|user| user.username)
        .unwrap_or_default();

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-inner",
                Link {
                    class: "navbar-brand",
                    to: Route::ArticleList {},
                    Icon { icon: FaFeather, width: 18, height: 18 }
                    "Blog System"
                }
                div {
                    class: "navbar-user",
                    span { "Welcome, {username}" }
                    LogoutButton {}
                }
            }
        }
    }
}
