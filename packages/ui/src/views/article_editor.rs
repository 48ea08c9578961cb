use dioxus::prelude::*;
use store::ArticleStatus;

use crate::components::{Button, ButtonVariant, FormError, Input, Label, Textarea};
use crate::outcome::SAVE_FAILED;
use crate::{use_api, ArticleForm, EditorMode, Outcome, Route};

/// `/create-article`
#[component]
pub fn CreateArticle() -> Element {
    rsx! {
        ArticleEditor { mode: EditorMode::Create }
    }
}

/// `/edit-article/:id`
#[component]
pub fn EditArticle(id: i64) -> Element {
    rsx! {
        ArticleEditor { key: "{id}", mode: EditorMode::Edit(id) }
    }
}

/// Form for writing a new article or changing an existing one.
#[component]
pub fn ArticleEditor(mode: EditorMode) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut fields = use_signal(ArticleForm::default);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // Edit mode starts from the stored article
    let fetch_api = api.clone();
    let _prefill = use_resource(move || {
        let api = fetch_api.clone();
        async move {
            let EditorMode::Edit(id) = mode else {
                return;
            };
            match api.get_article(id).await {
                Ok(article) => fields.set(ArticleForm::from_article(&article)),
                Err(e) => tracing::error!(id, "Failed to fetch article: {e}"),
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        let form = fields();
        if let Err(reason) = form.validate() {
            error.set(Some(reason.to_string()));
            return;
        }

        let api = api.clone();
        spawn(async move {
            error.set(None);
            saving.set(true);

            let request = form.to_request();
            let result = match mode {
                EditorMode::Create => api.create_article(&request).await,
                EditorMode::Edit(id) => api.update_article(id, &request).await,
            };

            match Outcome::from_result(result, SAVE_FAILED) {
                Outcome::Proceed(saved) => {
                    let id = saved.map(|article| article.id).or(mode.article_id());
                    tracing::info!(?id, "article saved");
                    nav.push(Route::ArticleList {});
                }
                Outcome::Stay(message) => {
                    error.set(Some(message));
                    saving.set(false);
                }
            }
        });
    };

    let status = fields.read().status.as_i32();

    rsx! {
        div {
            class: "page page-narrow",
            h1 { class: "page-title", "{mode.heading()}" }

            form {
                class: "editor-form",
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    FormError { message: err }
                }

                div {
                    class: "form-field",
                    Label { html_for: "article-title", "Title" }
                    Input {
                        id: "article-title",
                        placeholder: "Enter article title",
                        required: true,
                        value: fields.read().title.clone(),
                        oninput: move |evt: FormEvent| fields.write().title = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "article-summary", "Summary" }
                    Input {
                        id: "article-summary",
                        placeholder: "Short summary (optional)",
                        value: fields.read().summary.clone(),
                        oninput: move |evt: FormEvent| fields.write().summary = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "article-content", "Content" }
                    Textarea {
                        id: "article-content",
                        class: "monospace",
                        placeholder: "Write your article content here...",
                        required: true,
                        rows: 15,
                        value: fields.read().content.clone(),
                        oninput: move |evt: FormEvent| fields.write().content = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "article-status", "Status" }
                    select {
                        id: "article-status",
                        class: "input",
                        value: "{status}",
                        onchange: move |evt: FormEvent| {
                            fields.write().status = ArticleStatus::from_form_value(&evt.value());
                        },
                        for choice in ArticleStatus::ALL {
                            option {
                                key: "{choice.as_i32()}",
                                value: "{choice.as_i32()}",
                                selected: choice.as_i32() == status,
                                "{choice.label()}"
                            }
                        }
                    }
                }

                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            nav.push(Route::ArticleList {});
                        },
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        kind: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save Article" }
                    }
                }
            }
        }
    }
}
