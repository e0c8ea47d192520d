use dioxus::prelude::*;

use ui::AuthProvider;
use views::{
    Clientes, Dashboard, Login, NotFound, Obras, Register, RequestReset, ResetPassword,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/request-reset")]
    RequestReset {},
    #[route("/reset-password")]
    ResetPassword {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/clientes")]
    Clientes {},
    #[route("/obras")]
    Obras {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        AuthProvider {
            Router::<Route> {}
        }
    }
}
