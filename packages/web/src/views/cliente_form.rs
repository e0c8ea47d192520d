//! Create/edit form for a client, rendered inside the list page's modal.

use api::{Cliente, TipoPessoa};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorBanner, Input};
use ui::format::{mask_cep, mask_cnpj, mask_cpf};
use ui::forms::{ClienteForm, Submission};
use ui::{use_api, use_auth};

#[component]
pub fn ClienteFormView(
    cliente: Option<Cliente>,
    onsave: EventHandler<()>,
    oncancel: EventHandler<()>,
) -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut form = use_signal({
        let cliente = cliente.clone();
        move || match &cliente {
            Some(cliente) => ClienteForm::edit(cliente),
            None => ClienteForm::new(),
        }
    });
    let mut banner = use_signal(|| Option::<String>::None);
    let mut submission = use_signal(Submission::new);

    // Reseed when the list page hands over a different client while the
    // modal is already mounted.
    let mut seeded_from = use_signal(|| cliente.clone());
    if *seeded_from.read() != cliente {
        seeded_from.set(cliente.clone());
        form.set(match &cliente {
            Some(cliente) => ClienteForm::edit(cliente),
            None => ClienteForm::new(),
        });
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let mut auth = auth.clone();
        spawn(async move {
            banner.set(None);

            let snapshot = form.read().clone();
            let (id, payload) = match snapshot.payload() {
                Ok(payload) => (snapshot.id, payload),
                Err(errors) => {
                    form.write().errors = errors;
                    return;
                }
            };

            if !submission.write().begin() {
                return;
            }
            let result = match id {
                Some(id) => api.update_cliente(id, &payload).await,
                None => api.create_cliente(&payload).await,
            };
            submission.write().finish();
            match result {
                Ok(_) => onsave.call(()),
                Err(err) => {
                    if err.is_unauthorized() {
                        auth.logout();
                    }
                    banner.set(Some(err.message()));
                }
            }
        });
    };

    let loading = submission.read().in_flight();
    let state = form.read().clone();
    let documento_label = match state.tipo {
        TipoPessoa::Fisica => "CPF *",
        TipoPessoa::Juridica => "CNPJ *",
    }
    .to_string();
    let documento_masked = match state.tipo {
        TipoPessoa::Fisica => mask_cpf(state.documento_digits()),
        TipoPessoa::Juridica => mask_cnpj(state.documento_digits()),
    };

    rsx! {
        form { class: "form", onsubmit: handle_submit,
            ErrorBanner { message: banner() }

            div { class: "field",
                label { class: "field-label", "Tipo de pessoa *" }
                div { class: "toggle-group",
                    Button {
                        variant: if state.tipo == TipoPessoa::Juridica {
                            ButtonVariant::Primary
                        } else {
                            ButtonVariant::Secondary
                        },
                        disabled: loading,
                        onclick: move |_| form.write().set_tipo(TipoPessoa::Juridica),
                        "Pessoa Jurídica"
                    }
                    Button {
                        variant: if state.tipo == TipoPessoa::Fisica {
                            ButtonVariant::Primary
                        } else {
                            ButtonVariant::Secondary
                        },
                        disabled: loading,
                        onclick: move |_| form.write().set_tipo(TipoPessoa::Fisica),
                        "Pessoa Física"
                    }
                }
            }

            Input {
                label: (if state.tipo == TipoPessoa::Fisica { "Nome completo *" } else { "Razão Social *" }).to_string(),
                value: state.nome_ou_razao.clone(),
                error: state.errors.nome_ou_razao.clone(),
                disabled: loading,
                oninput: move |evt: FormEvent| form.write().set_nome_ou_razao(&evt.value()),
            }
            Input {
                label: documento_label,
                value: documento_masked,
                error: state.errors.documento.clone(),
                disabled: loading,
                oninput: move |evt: FormEvent| form.write().set_documento(&evt.value()),
            }
            Input {
                label: "CEP *",
                value: mask_cep(&state.cep),
                error: state.errors.cep.clone(),
                disabled: loading,
                oninput: move |evt: FormEvent| form.write().set_cep(&evt.value()),
            }
            Input {
                label: "Endereço completo *",
                value: state.endereco_completo.clone(),
                error: state.errors.endereco_completo.clone(),
                disabled: loading,
                oninput: move |evt: FormEvent| form.write().set_endereco_completo(&evt.value()),
            }

            div { class: "form-actions",
                Button {
                    variant: ButtonVariant::Secondary,
                    disabled: loading,
                    onclick: move |_| oncancel.call(()),
                    "Cancelar"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading,
                    if loading {
                        "Salvando..."
                    } else if state.id.is_some() {
                        "Salvar alterações"
                    } else {
                        "Cadastrar"
                    }
                }
            }
        }
    }
}
