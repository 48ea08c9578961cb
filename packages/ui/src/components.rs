//! Small form primitives shared by the views.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Danger,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button")] kind: &'static str,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    #[props(default)] title: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "btn {variant.class()} {class}",
            r#type: kind,
            title: "{title}",
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text")] kind: &'static str,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    #[props(default)] class: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: if id.is_empty() { None } else { Some(id.clone()) },
            class: "input {class}",
            r#type: kind,
            placeholder: "{placeholder}",
            required: required,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    #[props(default = 15)] rows: u32,
    #[props(default)] class: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id: if id.is_empty() { None } else { Some(id.clone()) },
            class: "input textarea {class}",
            placeholder: "{placeholder}",
            required: required,
            rows: "{rows}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "label",
            r#for: "{html_for}",
            {children}
        }
    }
}

/// Inline error box above a form.
#[component]
pub fn FormError(message: String) -> Element {
    rsx! {
        div {
            class: "form-error",
            role: "alert",
            "{message}"
        }
    }
}
