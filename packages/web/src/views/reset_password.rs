//! Redeems an emailed token for a new password.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorBanner, Input};
use ui::forms::{ResetPasswordForm, Submission};
use ui::use_api;

use crate::Route;

#[component]
pub fn ResetPassword() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut form = use_signal(ResetPasswordForm::new);
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
            match api.reset_password(&payload).await {
                Ok(_) => {
                    submission.write().finish();
                    nav.replace(Route::Login {});
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
                h1 { class: "page-title", "Redefinir senha" }
                p { class: "page-subtitle", "Informe o token recebido por email" }

                form { class: "form", onsubmit: handle_submit,
                    ErrorBanner { message: banner() }

                    Input {
                        label: "Email",
                        r#type: "email",
                        value: state.email.clone(),
                        error: state.errors.email.clone(),
                        disabled: loading,
                        oninput: move |evt: FormEvent| form.write().set_email(&evt.value()),
                    }
                    Input {
                        label: "Token",
                        value: state.token.clone(),
                        error: state.errors.token.clone(),
                        disabled: loading,
                        oninput: move |evt: FormEvent| form.write().set_token(&evt.value()),
                    }
                    Input {
                        label: "Nova senha",
                        r#type: "password",
                        value: state.new_password.clone(),
                        error: state.errors.new_password.clone(),
                        disabled: loading,
                        oninput: move |evt: FormEvent| form.write().set_new_password(&evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading,
                        if loading { "Salvando..." } else { "Redefinir senha" }
                    }
                }

                div { class: "page-links",
                    Link { to: Route::Login {}, "Voltar ao login" }
                }
            }
        }
    }
}
