use dioxus::prelude::*;

use crate::{Navbar, Route};

/// Chrome around every protected view.
#[component]
pub fn Shell() -> Element {
    rsx! {
        div {
            class: "shell",
            Navbar {}
            main {
                class: "shell-main",
                Outlet::<Route> {}
            }
        }
    }
}
