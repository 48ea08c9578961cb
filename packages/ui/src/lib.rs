//! This crate contains all shared UI for the workspace: routes, views and the
//! session context. Platform crates only pick a session backend and launch.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const BLOG_CSS: Asset = asset!("/assets/blog.css");

mod auth;
pub use auth::{use_api, use_session, AuthProvider, LogoutButton};

mod guard;
pub use guard::{Access, RequireAuth};

mod navbar;
pub use navbar::Navbar;

pub mod pager;
pub use pager::{Pager, PAGE_SIZE};

pub mod outcome;
pub use outcome::Outcome;

pub mod detail;
pub use detail::DetailState;

pub mod article_form;
pub use article_form::{ArticleForm, EditorMode};

mod routes;
pub use routes::Route;

pub mod views;
