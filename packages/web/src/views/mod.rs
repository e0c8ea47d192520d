mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod request_reset;
pub use request_reset::RequestReset;

mod reset_password;
pub use reset_password::ResetPassword;

mod dashboard;
pub use dashboard::Dashboard;

mod clientes;
pub use clientes::Clientes;

mod obras;
pub use obras::Obras;

mod cliente_form;
pub use cliente_form::ClienteFormView;

mod obra_form;
pub use obra_form::ObraFormView;

mod not_found;
pub use not_found::NotFound;
