//! Asks the server to email a password-reset token.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorBanner, Input};
use ui::forms::{RequestResetForm, Submission};
use ui::use_api;

use crate::Route;

#[component]
pub fn RequestReset() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut form = use_signal(RequestResetForm::new);
    let mut banner = use_signal(|| Option::<String>::None);
    let mut submission = use_signal(Submission::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            banner.set(None);

            let validated = form.read().payload();
            let payload = match validated {
                Ok(payload) => payload,
                Err(errors) => {
                    form.write().errors = errors;
                    return;
                }
            };

            if !submission.write().begin() {
                return;
            }
            match api.request_reset(&payload).await {
                Ok(_) => {
                    submission.write().finish();
                    nav.replace(Route::ResetPassword {});
                }
                Err(err) => {
                    submission.write().finish();
                    banner.set(Some(err.message()));
                }
            }
        });
    };

    let loading = submission.read().in_flight();
    let state = form.read().clone();

    rsx! {
        div { class: "page page-center",
            div { class: "card card-narrow",
                h1 { class: "page-title", "Recuperar senha" }
                p { class: "page-subtitle", "Enviaremos um token para o seu email" }

                form { class: "form", onsubmit: handle_submit,
                    ErrorBanner { message: banner() }

                    Input {
                        label: "Email",
                        r#type: "email",
                        placeholder: "email@empresa.com",
                        value: state.email.clone(),
                        error: state.errors.email.clone(),
                        disabled: loading,
                        oninput: move |evt: FormEvent| form.write().set_email(&evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading,
                        if loading { "Enviando..." } else { "Enviar token" }
                    }
                }

                div { class: "page-links",
                    Link { to: Route::ResetPassword {}, "Já tenho um token" }
                    Link { to: Route::Login {}, "Voltar ao login" }
                }
            }
        }
    }
}
