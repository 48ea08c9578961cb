use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, FormError};
use crate::icons::{FaPenToSquare, FaTrashCan};
use crate::outcome::DELETE_FAILED;
use crate::views::ConfirmDialog;
use crate::{use_api, use_session, DetailState, Icon, Outcome, Route};

const DETAIL_DATE_FORMAT: &str = "%B %d, %Y";

/// One article, with edit/delete for its author.
#[component]
pub fn ArticleDetail(id: i64) -> Element {
    // Track the id in a signal so use_resource re-runs on route param change
    let mut id_signal = use_signal(|| id);
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();
    let mut detail = use_signal(|| DetailState::new(id));
    let mut confirming = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // A new id hides the previous article until its own fetch lands
    if detail.peek().id() != id {
        detail.write().follow(id);
        id_signal.set(id);
        confirming.set(false);
        error.set(None);
    }

    let fetch_api = api.clone();
    let _loader = use_resource(move || {
        let api = fetch_api.clone();
        let id = id_signal();
        async move {
            match api.get_article(id).await {
                Ok(article) => detail.write().loaded(article),
                Err(e) => {
                    detail.write().failed();
                    // Missing and unreachable both end on the list; only the log differs.
                    if e.is_not_found() {
                        tracing::warn!(id, "Article not accessible: {e}");
                    } else {
                        tracing::error!(id, "Failed to fetch article: {e}");
                    }
                    nav.replace(Route::ArticleList {});
                }
            }
        }
    });

    let handle_delete = move |_| {
        let api = api.clone();
        let id = id_signal();
        spawn(async move {
            deleting.set(true);
            match Outcome::from_result(api.delete_article(id).await, DELETE_FAILED) {
                Outcome::Proceed(()) => {
                    tracing::info!(id, "article deleted");
                    nav.push(Route::ArticleList {});
                }
                Outcome::Stay(message) => {
                    error.set(Some(message));
                    deleting.set(false);
                    confirming.set(false);
                }
            }
        });
    };

    if detail.read().is_loading() {
        return rsx! {
            div { class: "loading", "Loading..." }
        };
    }
    let Some(article) = detail.read().article().cloned() else {
        return rsx! {};
    };

    let is_author = session.read().is_author(&article);
    let created = article.created_on(DETAIL_DATE_FORMAT);

    rsx! {
        div {
            class: "page page-narrow",
            div {
                class: "article-detail",
                header {
                    class: "article-header",
                    h1 { class: "article-title", "{article.title}" }
                    div {
                        class: "article-meta",
                        span { class: "article-author", "{article.author_name}" }
                        span { "•" }
                        span { "{created}" }
                        span { "•" }
                        span { "{article.view_count} views" }
                    }
                }

                div {
                    class: "article-body",
                    "{article.content}"
                }

                if let Some(err) = error() {
                    FormError { message: err }
                }

                if is_author {
                    div {
                        class: "article-actions",
                        Link {
                            class: "btn btn-outline",
                            to: Route::EditArticle { id: article.id },
                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                            "Edit Article"
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            onclick: move |_| confirming.set(true),
                            Icon { icon: FaTrashCan, width: 14, height: 14 }
                            "Delete Article"
                        }
                    }
                }
            }
        }

        if confirming() {
            ConfirmDialog {
                title: "Delete article",
                message: "Are you sure you want to delete this article?",
                confirm_label: "Delete",
                busy_label: "Deleting...",
                busy: deleting(),
                on_confirm: handle_delete,
                on_cancel: move |_| confirming.set(false),
            }
        }
    }
}
