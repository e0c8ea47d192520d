//! User registration form (admin flow).

use api::RegisterPayload;
use store::UserRole;

use crate::format::digits;

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    /// Digits only, at most 11.
    pub cpf: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub errors: RegisterFormErrors,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterFormErrors {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegisterFormErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none()
            && self.cpf.is_none()
            && self.email.is_none()
            && self.password.is_none()
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            cpf: String::new(),
            email: String::new(),
            password: String::new(),
            role: UserRole::Gestor,
            errors: RegisterFormErrors::default(),
        }
    }
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: &str) {
        self.name = value.to_string();
        self.errors.name = None;
    }

    pub fn set_cpf(&mut self, value: &str) {
        self.cpf = digits(value, 11);
        self.errors.cpf = None;
    }

    pub fn set_email(&mut self, value: &str) {
        self.email = value.to_string();
        self.errors.email = None;
    }

    pub fn set_password(&mut self, value: &str) {
        self.password = value.to_string();
        self.errors.password = None;
    }

    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
    }

    pub fn validate(&self) -> RegisterFormErrors {
        let mut errors = RegisterFormErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some("Nome é obrigatório.".to_string());
        }
        if self.cpf.len() != 11 {
            errors.cpf = Some("CPF deve ter 11 dígitos.".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            errors.email = Some("Informe um email válido.".to_string());
        }
        if self.password.is_empty() {
            errors.password = Some("Senha é obrigatória.".to_string());
        }
        errors
    }

    pub fn payload(&self) -> Result<RegisterPayload, RegisterFormErrors> {
        let errors = self.validate();
        if !errors.is_clean() {
            return Err(errors);
        }
        Ok(RegisterPayload {
            name: self.name.trim().to_string(),
            cpf: self.cpf.clone(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_must_have_exactly_eleven_digits() {
        let mut form = RegisterForm::new();
        form.set_name("João");
        form.set_email("joao@x.com");
        form.set_password("segredo");
        form.set_cpf("123.456.789");

        assert_eq!(form.cpf, "123456789");
        assert!(form.validate().cpf.is_some());

        form.set_cpf("123.456.789-01");
        assert!(form.validate().is_clean());
    }

    #[test]
    fn payload_is_normalized() {
        let mut form = RegisterForm::new();
        form.set_name("  João  ");
        form.set_email(" joao@x.com ");
        form.set_password("segredo");
        form.set_cpf("123.456.789-01");
        form.set_role(UserRole::Admin);

        let payload = form.payload().unwrap();
        assert_eq!(payload.name, "João");
        assert_eq!(payload.email, "joao@x.com");
        assert_eq!(payload.cpf, "12345678901");
        assert_eq!(payload.role, UserRole::Admin);
    }
}
