//! Password-reset forms: request the emailed token, then redeem it.

use api::{RequestResetPayload, ResetPasswordPayload};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestResetForm {
    pub email: String,
    pub errors: RequestResetFormErrors,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestResetFormErrors {
    pub email: Option<String>,
}

impl RequestResetFormErrors {
    pub fn is_clean(&self) -> bool {
        self.email.is_none()
    }
}

impl RequestResetForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, value: &str) {
        self.email = value.to_string();
        self.errors.email = None;
    }

    pub fn validate(&self) -> RequestResetFormErrors {
        let mut errors = RequestResetFormErrors::default();
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            errors.email = Some("Informe um email válido.".to_string());
        }
        errors
    }

    pub fn payload(&self) -> Result<RequestResetPayload, RequestResetFormErrors> {
        let errors = self.validate();
        if !errors.is_clean() {
            return Err(errors);
        }
        Ok(RequestResetPayload {
            email: self.email.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResetPasswordForm {
    pub email: String,
    pub token: String,
    pub new_password: String,
    pub errors: ResetPasswordFormErrors,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResetPasswordFormErrors {
    pub email: Option<String>,
    pub token: Option<String>,
    pub new_password: Option<String>,
}

impl ResetPasswordFormErrors {
    pub fn is_clean(&self) -> bool {
        self.email.is_none() && self.token.is_none() && self.new_password.is_none()
    }
}

impl ResetPasswordForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, value: &str) {
        self.email = value.to_string();
        self.errors.email = None;
    }

    pub fn set_token(&mut self, value: &str) {
        self.token = value.trim().to_string();
        self.errors.token = None;
    }

    pub fn set_new_password(&mut self, value: &str) {
        self.new_password = value.to_string();
        self.errors.new_password = None;
    }

    pub fn validate(&self) -> ResetPasswordFormErrors {
        let mut errors = ResetPasswordFormErrors::default();
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            errors.email = Some("Informe um email válido.".to_string());
        }
        if self.token.is_empty() {
            errors.token = Some("Informe o token recebido por email.".to_string());
        }
        if self.new_password.len() < 6 {
            errors.new_password = Some("Nova senha deve ter ao menos 6 caracteres.".to_string());
        }
        errors
    }

    pub fn payload(&self) -> Result<ResetPasswordPayload, ResetPasswordFormErrors> {
        let errors = self.validate();
        if !errors.is_clean() {
            return Err(errors);
        }
        Ok(ResetPasswordPayload {
            email: self.email.trim().to_string(),
            token: self.token.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_reset_requires_a_plausible_email() {
        let mut form = RequestResetForm::new();
        form.set_email("not-an-email");
        assert!(form.payload().is_err());

        form.set_email("a@x.com");
        assert_eq!(form.payload().unwrap().email, "a@x.com");
    }

    #[test]
    fn reset_password_requires_token_and_minimum_length() {
        let mut form = ResetPasswordForm::new();
        form.set_email("a@x.com");
        form.set_new_password("12345");
        let errors = form.validate();
        assert!(errors.token.is_some());
        assert!(errors.new_password.is_some());

        form.set_token(" abc123 ");
        form.set_new_password("123456");
        let payload = form.payload().unwrap();
        assert_eq!(payload.token, "abc123");
    }
}
