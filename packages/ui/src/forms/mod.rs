//! # Form controllers — validation and payload building, no rendering
//!
//! One controller per form, each a plain struct the views keep in a signal.
//! The contract is the same everywhere:
//!
//! - setters normalize as the user types (digit-limited fields never accept a
//!   non-digit character) and clear the field's own error;
//! - `validate()` is a pure function of the current state returning a typed
//!   errors struct — a field carries a message only when invalid;
//! - `payload()` validates and, only when clean, builds the normalized API
//!   payload, so an invalid form can never reach the network;
//! - toggling a mutually-exclusive choice (person type, obra type) clears the
//!   fields that became inapplicable and every current error.
//!
//! [`Submission`] is the double-submit guard shared by all of them.

mod cliente;
pub use cliente::{ClienteForm, ClienteFormErrors};

mod obra;
pub use obra::{ObraForm, ObraFormErrors};

mod register;
pub use register::{RegisterForm, RegisterFormErrors};

mod reset;
pub use reset::{
    RequestResetForm, RequestResetFormErrors, ResetPasswordForm, ResetPasswordFormErrors,
};

mod submission;
pub use submission::Submission;
