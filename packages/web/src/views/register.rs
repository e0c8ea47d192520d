//! User registration: name, CPF, email, password and role.

use dioxus::prelude::*;
use store::UserRole;
use ui::components::{Button, ButtonVariant, ErrorBanner, Input};
use ui::format::mask_cpf;
use ui::forms::{RegisterForm, Submission};
use ui::use_api;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let api = use_api();
    let mut form = use_signal(RegisterForm::new);
    let mut banner = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
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
            match api.register(&payload).await {
                Ok(ack) => {
                    submission.write().finish();
                    success.set(Some(ack.message));
                    form.set(RegisterForm::new());
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
                h1 { class: "page-title", "Cadastro de Usuário" }

                form { class: "form", onsubmit: handle_submit,
                    ErrorBanner { message: banner() }
                    if let Some(message) = success() {
                        div { class: "banner-success", "{message}" }
                    }

                    Input {
                        label: "Nome completo *",
                        value: state.name.clone(),
                        error: state.errors.name.clone(),
                        disabled: loading,
                        oninput: move |evt: FormEvent| form.write().set_name(&evt.value()),
                    }
                    Input {
                        label: "CPF *",
                        value: mask_cpf(&state.cpf),
                        error: state.errors.cpf.clone(),
                        disabled: loading,
                        oninput: move |evt: FormEvent| form.write().set_cpf(&evt.value()),
                    }
                    Input {
                        label: "Email *",
                        r#type: "email",
                        value: state.email.clone(),
                        error: state.errors.email.clone(),
                        disabled: loading,
                        oninput: move |evt: FormEvent| form.write().set_email(&evt.value()),
                    }
                    Input {
                        label: "Senha *",
                        r#type: "password",
                        value: state.password.clone(),
                        error: state.errors.password.clone(),
                        disabled: loading,
                        oninput: move |evt: FormEvent| form.write().set_password(&evt.value()),
                    }

                    div { class: "field",
                        label { class: "field-label", "Perfil *" }
                        select {
                            class: "field-input",
                            value: if state.role.is_admin() { "ADMIN" } else { "GESTOR" },
                            onchange: move |evt: FormEvent| {
                                let role = if evt.value() == "ADMIN" {
                                    UserRole::Admin
                                } else {
                                    UserRole::Gestor
                                };
                                form.write().set_role(role);
                            },
                            option { value: "GESTOR", "Gestor" }
                            option { value: "ADMIN", "Administrador" }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading,
                        if loading { "Cadastrando..." } else { "Cadastrar" }
                    }
                }

                div { class: "page-links",
                    Link { to: Route::Login {}, "Voltar ao login" }
                }
            }
        }
    }
}
