use dioxus::prelude::*;

use crate::Route;

/// Unknown paths fall back to the public entry route.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("unknown route /{}, redirecting", segments.join("/"));
    nav.replace(Route::Login {});
    rsx! {}
}
