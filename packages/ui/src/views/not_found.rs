use dioxus::prelude::*;

use crate::Route;

/// Unknown paths fall back to the article list (which is itself guarded).
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!(path = %segments.join("/"), "unknown route");
    nav.replace(Route::ArticleList {});
    rsx! {}
}
