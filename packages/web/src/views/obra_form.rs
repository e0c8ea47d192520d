//! Creation form for an obra: client selection, type-dependent fields and
//! photo attachments.

use api::{Cliente, FotoUpload, TipoObra, MAX_FOTOS};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorBanner, Input};
use ui::forms::{ObraForm, Submission};
use ui::{use_api, use_auth};

#[component]
pub fn ObraFormView(onsave: EventHandler<()>, oncancel: EventHandler<()>) -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut form = use_signal(ObraForm::new);
    let mut clientes = use_signal(Vec::<Cliente>::new);
    let mut clientes_loading = use_signal(|| true);
    let mut banner = use_signal(|| Option::<String>::None);
    let mut submission = use_signal(Submission::new);

    // The client dropdown needs the list regardless of what the list page has
    // already fetched, so the form loads its own copy on mount.
    {
        let api = api.clone();
        let mut auth = auth.clone();
        use_hook(move || {
            spawn(async move {
                match api.list_clientes().await {
                    Ok(list) => clientes.set(list),
                    Err(err) => {
                        if err.is_unauthorized() {
                            auth.logout();
                        }
                        banner.set(Some(err.message()));
                    }
                }
                clientes_loading.set(false);
            });
        });
    }

    // Start date defaults to today, like a fresh paper form.
    use_hook(move || {
        if let Some(today) = today() {
            form.write().set_data_inicio(&today);
        }
    });

    let handle_files = move |evt: FormEvent| {
        spawn(async move {
            let Some(engine) = evt.files() else {
                return;
            };
            // add_foto enforces the cap and raises the field error itself.
            for name in engine.files() {
                if let Some(bytes) = engine.read_file(&name).await {
                    let mime = mime_for(&name).to_string();
                    form.write().add_foto(FotoUpload {
                        file_name: name,
                        mime,
                        bytes,
                    });
                }
            }
        });
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let mut auth = auth.clone();
        spawn(async move {
            banner.set(None);

            let snapshot = form.read().clone();
            let payload = match snapshot.payload() {
                Ok(payload) => payload,
                Err(errors) => {
                    form.write().errors = errors;
                    return;
                }
            };

            if !submission.write().begin() {
                return;
            }
            let result = api.create_obra(&payload, &snapshot.fotos).await;
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
    let cliente_options = clientes.read().clone();

    rsx! {
        form { class: "form", onsubmit: handle_submit,
            ErrorBanner { message: banner() }

            div { class: "field",
                label { class: "field-label", "Cliente *" }
                if clientes_loading() {
                    p { class: "field-hint", "Carregando clientes..." }
                } else {
                    select {
                        class: if state.errors.cliente_id.is_some() {
                            "field-input field-input-error"
                        } else {
                            "field-input"
                        },
                        disabled: loading,
                        value: state.cliente_id.map(|id| id.to_string()).unwrap_or_default(),
                        onchange: move |evt: FormEvent| {
                            form.write().set_cliente_id(evt.value().parse().ok());
                        },
                        option { value: "", "Selecione um cliente" }
                        for cliente in cliente_options {
                            option { value: "{cliente.id}", "{cliente.nome_ou_razao}" }
                        }
                    }
                }
                if let Some(err) = state.errors.cliente_id.clone() {
                    span { class: "field-error", "{err}" }
                }
            }

            Input {
                label: "Nome da obra *",
                value: state.nome_obra.clone(),
                error: state.errors.nome_obra.clone(),
                disabled: loading,
                oninput: move |evt: FormEvent| form.write().set_nome_obra(&evt.value()),
            }

            div { class: "field",
                label { class: "field-label", "Tipo de obra *" }
                div { class: "toggle-group",
                    Button {
                        variant: if state.tipo == TipoObra::Construcao {
                            ButtonVariant::Primary
                        } else {
                            ButtonVariant::Secondary
                        },
                        disabled: loading,
                        onclick: move |_| form.write().set_tipo(TipoObra::Construcao),
                        "Construção"
                    }
                    Button {
                        variant: if state.tipo == TipoObra::Reforma {
                            ButtonVariant::Primary
                        } else {
                            ButtonVariant::Secondary
                        },
                        disabled: loading,
                        onclick: move |_| form.write().set_tipo(TipoObra::Reforma),
                        "Reforma"
                    }
                }
            }

            {match state.tipo {
                TipoObra::Construcao => rsx! {
                    Input {
                        label: "CNO *",
                        placeholder: "Cadastro Nacional de Obras",
                        value: state.cno.clone(),
                        error: state.errors.detalhe.clone(),
                        disabled: loading,
                        oninput: move |evt: FormEvent| form.write().set_cno(&evt.value()),
                    }
                },
                TipoObra::Reforma => rsx! {
                    div { class: "field",
                        label { class: "field-label", "Descrição detalhada *" }
                        textarea {
                            class: if state.errors.detalhe.is_some() {
                                "field-input field-input-error"
                            } else {
                                "field-input"
                            },
                            disabled: loading,
                            value: state.descricao.clone(),
                            oninput: move |evt: FormEvent| form.write().set_descricao(&evt.value()),
                        }
                        if let Some(err) = state.errors.detalhe.clone() {
                            span { class: "field-error", "{err}" }
                        }
                    }
                },
            }}

            Input {
                label: "Endereço completo *",
                value: state.endereco_completo.clone(),
                error: state.errors.endereco_completo.clone(),
                disabled: loading,
                oninput: move |evt: FormEvent| form.write().set_endereco_completo(&evt.value()),
            }
            Input {
                label: "Data de início *",
                r#type: "date",
                value: state.data_inicio.clone(),
                error: state.errors.data_inicio.clone(),
                disabled: loading,
                oninput: move |evt: FormEvent| form.write().set_data_inicio(&evt.value()),
            }
            Input {
                label: "Previsão de entrega *",
                r#type: "date",
                value: state.previsao_entrega.clone(),
                error: state.errors.previsao_entrega.clone(),
                disabled: loading,
                oninput: move |evt: FormEvent| form.write().set_previsao_entrega(&evt.value()),
            }

            div { class: "field",
                label { class: "field-label", "Fotos (máximo {MAX_FOTOS})" }
                input {
                    class: "field-input",
                    r#type: "file",
                    accept: "image/*",
                    multiple: true,
                    disabled: loading,
                    onchange: handle_files,
                }
                if !state.fotos.is_empty() {
                    p { class: "field-hint", "{state.fotos.len()} foto(s) selecionada(s)" }
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: loading,
                        onclick: move |_| form.write().clear_fotos(),
                        "Limpar fotos"
                    }
                }
                if let Some(err) = state.errors.fotos.clone() {
                    span { class: "field-error", "{err}" }
                }
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
                    if loading { "Salvando..." } else { "Cadastrar Obra" }
                }
            }
        }
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name.rsplit('.').next().unwrap_or_default();
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Today's date as `YYYY-MM-DD`, taken from the browser clock.
#[cfg(target_arch = "wasm32")]
fn today() -> Option<String> {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    iso.get(..10).map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
fn today() -> Option<String> {
    None
}
