pub mod auth;
pub mod cliente;
pub mod obra;
