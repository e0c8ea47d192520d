//! Obra listing with creation. Obras are read-only once created.

use api::{Obra, ObraDetalhe};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorBanner, Modal};
use ui::{use_obras, Navbar, Protected};

use crate::views::ObraFormView;
use crate::Route;

#[component]
pub fn Obras() -> Element {
    rsx! {
        Protected {
            ObrasContent {}
        }
    }
}

#[component]
fn ObrasContent() -> Element {
    let handle = use_obras();
    let mut show_form = use_signal(|| false);

    let obras = handle.obras.read().clone();
    let loading = *handle.loading.read();

    rsx! {
        div { class: "page",
            Navbar {
                Link { class: "navbar-link", to: Route::Dashboard {}, "← Voltar" }
                span { class: "navbar-title", "Obras" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| show_form.set(true),
                    "Nova Obra"
                }
            }

            ErrorBanner { message: handle.error.read().clone() }

            if loading {
                div { class: "gate-loading", "Carregando..." }
            } else if obras.is_empty() {
                p { class: "empty-list", "Nenhuma obra cadastrada." }
            } else {
                table { class: "table",
                    thead {
                        tr {
                            th { "Obra" }
                            th { "Tipo" }
                            th { "Cliente" }
                            th { "Início" }
                            th { "Previsão" }
                            th { "Fotos" }
                        }
                    }
                    tbody {
                        for obra in obras {
                            ObraRow { key: "{obra.id}", obra: obra.clone() }
                        }
                    }
                }
            }

            if show_form() {
                Modal {
                    title: "Nova Obra",
                    onclose: move |_| show_form.set(false),
                    ObraFormView {
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
fn ObraRow(obra: Obra) -> Element {
    let tipo = match &obra.detalhe {
        ObraDetalhe::Construcao { cno } => format!("Construção · CNO {cno}"),
        ObraDetalhe::Reforma { .. } => "Reforma".to_string(),
    };
    let cliente = obra.cliente_nome.clone().unwrap_or_else(|| "—".to_string());
    rsx! {
        tr {
            td { "{obra.nome_obra}" }
            td { "{tipo}" }
            td { "{cliente}" }
            td { "{obra.data_inicio}" }
            td { "{obra.previsao_entrega}" }
            td { "{obra.fotos.len()}" }
        }
    }
}
