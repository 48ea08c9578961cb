use dioxus::prelude::*;
use store::Article;

use crate::components::{Button, ButtonVariant};
use crate::{use_api, Pager, Route, PAGE_SIZE};

const LIST_DATE_FORMAT: &str = "%b %d, %Y";

/// Paginated list of published articles.
#[component]
pub fn ArticleList() -> Element {
    let api = use_api();
    let mut page = use_signal(|| 0u32);
    let mut articles = use_signal(Vec::<Article>::new);
    let mut total_pages = use_signal(|| 0u32);
    let mut loading = use_signal(|| true);

    // Refetch whenever the page index changes. No caching between pages.
    let _loader = use_resource(move || {
        let api = api.clone();
        let page = page();
        async move {
            loading.set(true);
            match api.list_articles(page, PAGE_SIZE).await {
                Ok(result) => {
                    articles.set(result.articles);
                    total_pages.set(result.total_pages);
                }
                Err(e) => tracing::error!(page, "Failed to fetch articles: {e}"),
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! {
            div { class: "loading", "Loading..." }
        };
    }

    let pager = Pager::new(page(), total_pages());
    let count = articles.read().len();

    rsx! {
        div {
            class: "page",

            div {
                class: "page-header",
                h1 { class: "page-title", "Latest Articles" }
                Link {
                    class: "btn btn-primary",
                    to: Route::CreateArticle {},
                    "Write Article"
                }
            }

            div {
                class: "article-cards",
                for article in articles() {
                    ArticleCard { key: "{article.id}", article: article.clone() }
                }
            }

            if count == 0 {
                div {
                    class: "empty-state",
                    "No articles found. Be the first to write one!"
                }
            }

            if pager.show_controls(count) {
                div {
                    class: "pagination",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: !pager.has_previous(),
                        onclick: move |_| page.set(pager.previous()),
                        "Previous"
                    }
                    span { class: "pagination-label", "{pager.label()}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: !pager.has_next(),
                        onclick: move |_| page.set(pager.next()),
                        "Next"
                    }
                }
            }
        }
    }
}

#[component]
fn ArticleCard(article: Article) -> Element {
    let created = article.created_on(LIST_DATE_FORMAT);

    rsx! {
        div {
            class: "article-card",
            Link {
                to: Route::ArticleDetail { id: article.id },
                h2 { class: "article-card-title", "{article.title}" }
            }
            p { class: "article-card-excerpt", "{article.excerpt()}" }
            div {
                class: "article-meta",
                span { "By {article.author_name}" }
                span { "•" }
                span { "{created}" }
                span { "•" }
                span { "{article.view_count} views" }
            }
        }
    }
}
