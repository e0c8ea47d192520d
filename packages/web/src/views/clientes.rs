//! Client listing with create, edit and delete.

use api::Cliente;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorBanner, Modal};
use ui::format::{mask_cep, mask_documento};
use ui::{use_clientes, Navbar, Protected};

use crate::views::ClienteFormView;
use crate::Route;

#[component]
pub fn Clientes() -> Element {
    rsx! {
        Protected {
            ClientesContent {}
        }
    }
}

#[component]
fn ClientesContent() -> Element {
    let handle = use_clientes();
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Cliente>::None);
    let mut confirming_delete = use_signal(|| Option::<Cliente>::None);

    let clientes = handle.clientes.read().clone();
    let loading = *handle.loading.read();

    rsx! {
        div { class: "page",
            Navbar {
                Link { class: "navbar-link", to: Route::Dashboard {}, "← Voltar" }
                span { class: "navbar-title", "Clientes" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                    "Novo Cliente"
                }
            }

            ErrorBanner { message: handle.error.read().clone() }

            if loading {
                div { class: "gate-loading", "Carregando..." }
            } else if clientes.is_empty() {
                p { class: "empty-list", "Nenhum cliente cadastrado." }
            } else {
                table { class: "table",
                    thead {
                        tr {
                            th { "Nome / Razão Social" }
                            th { "Documento" }
                            th { "CEP" }
                            th { "Endereço" }
                            th { "" }
                        }
                    }
                    tbody {
                        for cliente in clientes {
                            ClienteRow {
                                key: "{cliente.id}",
                                cliente: cliente.clone(),
                                onedit: move |cliente: Cliente| {
                                    editing.set(Some(cliente));
                                    show_form.set(true);
                                },
                                ondelete: move |cliente: Cliente| {
                                    confirming_delete.set(Some(cliente));
                                },
                            }
                        }
                    }
                }
            }

            if let Some(cliente) = confirming_delete.read().clone() {
                Modal {
                    title: "Excluir Cliente".to_string(),
                    onclose: move |_| confirming_delete.set(None),
                    p { "Excluir o cliente \"{cliente.nome_ou_razao}\"? Esta ação não pode ser desfeita." }
                    div { class: "form-actions",
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| confirming_delete.set(None),
                            "Cancelar"
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            onclick: {
                                let handle = handle.clone();
                                let id = cliente.id;
                                move |_| {
                                    confirming_delete.set(None);
                                    let mut handle = handle.clone();
                                    spawn(async move {
                                        if let Err(message) = handle.remove(id).await {
                                            handle.error.set(Some(message));
                                        }
                                    });
                                }
                            },
                            "Excluir"
                        }
                    }
                }
            }

            if show_form() {
                Modal {
                    title: (if editing.read().is_some() { "Editar Cliente" } else { "Novo Cliente" }).to_string(),
                    onclose: move |_| show_form.set(false),
                    ClienteFormView {
                        cliente: editing.read().clone(),
                        onsave: {
                            let handle = handle.clone();
                            move |_| {
                                show_form.set(false);
                                let mut handle = handle.clone();
                                spawn(async move {
                                    handle.refresh().await;
                                });
                            }
                        },
                        oncancel: move |_| show_form.set(false),
                    }
                }
            }
        }
    }
}

#[component]
fn ClienteRow(
    cliente: Cliente,
    onedit: EventHandler<Cliente>,
    ondelete: EventHandler<Cliente>,
) -> Element {
    let documento = mask_documento(&cliente.documento);
    let cep = mask_cep(&cliente.cep);
    rsx! {
        tr {
            td { "{cliente.nome_ou_razao}" }
            td { "{documento}" }
            td { "{cep}" }
            td { "{cliente.endereco_completo}" }
            td { class: "table-actions",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: {
                        let cliente = cliente.clone();
                        move |_| onedit.call(cliente.clone())
                    },
                    "Editar"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: {
                        let cliente = cliente.clone();
                        move |_| ondelete.call(cliente.clone())
                    },
                    "Excluir"
                }
            }
        }
    }
}
