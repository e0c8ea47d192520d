//! Landing page after login: role-filtered menu plus the signed-in identity.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::{use_auth, visible_entries, Navbar, Protected};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        Protected {
            DashboardContent {}
        }
    }
}

#[component]
fn DashboardContent() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let Some(user) = auth.user() else {
        return rsx! {};
    };
    let entries: Vec<_> = visible_entries(user.role).collect();

    rsx! {
        div { class: "page",
            Navbar {
                span { class: "navbar-title", "Portal de Gestão" }
                span { class: "navbar-user", "{user.name} · {user.role.label()}" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        let mut auth = auth.clone();
                        auth.logout();
                        nav.replace(Route::Login {});
                    },
                    "Sair"
                }
            }

            div { class: "menu-grid",
                for entry in entries {
                    Link { class: "menu-card", to: entry.path,
                        h2 { "{entry.label}" }
                    }
                }
            }
        }
    }
}
