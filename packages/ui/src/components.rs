//! Basic building blocks shared by every page: buttons, labelled inputs with
//! an inline error line, and a modal shell.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] class: String,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type,
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

/// Labelled input with an optional error line under it.
#[component]
pub fn Input(
    #[props(default)] label: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] name: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default)] error: Option<String>,
    #[props(default)] disabled: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let input_class = if error.is_some() {
        "field-input field-input-error"
    } else {
        "field-input"
    };
    rsx! {
        div { class: "field",
            if !label.is_empty() {
                label { class: "field-label", "{label}" }
            }
            input {
                class: input_class,
                r#type,
                name,
                placeholder,
                value,
                disabled,
                oninput: move |evt| oninput.call(evt),
            }
            if let Some(err) = error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}

/// Modal shell; clicking the backdrop or the close button closes it.
#[component]
pub fn Modal(title: String, onclose: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| onclose.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "modal-header",
                    h3 { "{title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| onclose.call(()),
                        "×"
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}

/// Single form-level error banner, hidden when there is nothing to show.
#[component]
pub fn ErrorBanner(#[props(default)] message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            div { class: "banner-error", "{message}" }
        }
    }
}
