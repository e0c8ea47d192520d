//! Route guard for protected views.
//!
//! Three states: still checking the persisted session, authorized, or
//! unauthorized. The transition function is pure so the ordering property —
//! never report `Unauthorized` before the initial session check completes —
//! is testable without a renderer.

use dioxus::prelude::*;

use crate::auth::use_auth;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Checking,
    Authorized,
    Unauthorized,
}

pub fn gate_state(ready: bool, authenticated: bool) -> GateState {
    if !ready {
        GateState::Checking
    } else if authenticated {
        GateState::Authorized
    } else {
        GateState::Unauthorized
    }
}

/// Wraps protected content. Re-evaluated on every render: shows a placeholder
/// while the session check is pending, redirects unauthenticated visitors to
/// the public entry route (replacing history so Back cannot return here), and
/// otherwise renders its children.
#[component]
pub fn Protected(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    match gate_state(auth.is_ready(), auth.is_authenticated()) {
        GateState::Checking => rsx! {
            div { class: "gate-loading", "Carregando..." }
        },
        GateState::Unauthorized => {
            nav.replace("/");
            rsx! {}
        }
        GateState::Authorized => rsx! {
            {children}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_unauthorized_before_the_check_completes() {
        // Whatever the (not yet meaningful) authentication flag says, an
        // unready session must keep the gate in Checking.
        assert_eq!(gate_state(false, false), GateState::Checking);
        assert_eq!(gate_state(false, true), GateState::Checking);
    }

    #[test]
    fn resolves_once_ready() {
        assert_eq!(gate_state(true, true), GateState::Authorized);
        assert_eq!(gate_state(true, false), GateState::Unauthorized);
    }
}
