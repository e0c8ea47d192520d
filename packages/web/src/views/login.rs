//! Login page: email/password against `POST /auth/login`.

use api::LoginPayload;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorBanner, Input};
use ui::forms::Submission;
use ui::{use_api, use_auth};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let api = use_api();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submission = use_signal(Submission::new);

    // Already logged in: straight to the dashboard.
    if auth.is_ready() && auth.is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let mut auth = auth.clone();
        spawn(async move {
            error.set(None);

            let payload = LoginPayload {
                email: email().trim().to_string(),
                password: password(),
            };
            if payload.email.is_empty() {
                error.set(Some("Informe seu email.".to_string()));
                return;
            }
            if payload.password.is_empty() {
                error.set(Some("Informe sua senha.".to_string()));
                return;
            }

            if !submission.write().begin() {
                return;
            }
            match api.login(&payload).await {
                Ok(response) => {
                    submission.write().finish();
                    auth.login(response.user, response.token);
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    submission.write().finish();
                    error.set(Some(err.message()));
                }
            }
        });
    };

    let loading = submission.read().in_flight();

    rsx! {
        div { class: "page page-center",
            div { class: "card card-narrow",
                h1 { class: "page-title", "Portal de Gestão" }
                p { class: "page-subtitle", "Acesse com suas credenciais" }

                form { class: "form", onsubmit: handle_login,
                    ErrorBanner { message: error() }

                    Input {
                        label: "Email",
                        r#type: "email",
                        placeholder: "email@empresa.com",
                        value: email(),
                        disabled: loading,
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    Input {
                        label: "Senha",
                        r#type: "password",
                        placeholder: "********",
                        value: password(),
                        disabled: loading,
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading,
                        if loading { "Entrando..." } else { "Entrar" }
                    }
                }

                div { class: "page-links",
                    Link { to: Route::RequestReset {}, "Esqueci minha senha" }
                    Link { to: Route::Register {}, "Cadastrar usuário" }
                }
            }
        }
    }
}
