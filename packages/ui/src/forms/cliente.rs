//! Client form: create and edit, individual (CPF) or organization (CNPJ).

use api::{Cliente, ClientePayload, Documento, TipoPessoa};

use crate::format::digits;

#[derive(Debug, Clone, PartialEq)]
pub struct ClienteForm {
    pub id: Option<i64>,
    pub tipo: TipoPessoa,
    pub nome_ou_razao: String,
    /// Digits only, at most 11.
    pub cpf: String,
    /// Digits only, at most 14.
    pub cnpj: String,
    /// Digits only, at most 8.
    pub cep: String,
    pub endereco_completo: String,
    pub errors: ClienteFormErrors,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClienteFormErrors {
    pub nome_ou_razao: Option<String>,
    pub documento: Option<String>,
    pub cep: Option<String>,
    pub endereco_completo: Option<String>,
}

impl ClienteFormErrors {
    pub fn is_clean(&self) -> bool {
        self.nome_ou_razao.is_none()
            && self.documento.is_none()
            && self.cep.is_none()
            && self.endereco_completo.is_none()
    }
}

impl Default for ClienteForm {
    fn default() -> Self {
        Self {
            id: None,
            // Organization is the common case for this business.
            tipo: TipoPessoa::Juridica,
            nome_ou_razao: String::new(),
            cpf: String::new(),
            cnpj: String::new(),
            cep: String::new(),
            endereco_completo: String::new(),
            errors: ClienteFormErrors::default(),
        }
    }
}

impl ClienteForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill from an existing client for the edit flow.
    pub fn edit(cliente: &Cliente) -> Self {
        let mut form = Self {
            id: Some(cliente.id),
            tipo: cliente.documento.tipo(),
            nome_ou_razao: cliente.nome_ou_razao.clone(),
            cep: digits(&cliente.cep, 8),
            endereco_completo: cliente.endereco_completo.clone(),
            ..Self::default()
        };
        match &cliente.documento {
            Documento::Cpf(d) => form.cpf = d.clone(),
            Documento::Cnpj(d) => form.cnpj = d.clone(),
        }
        form
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn set_nome_ou_razao(&mut self, value: &str) {
        self.nome_ou_razao = value.to_string();
        self.errors.nome_ou_razao = None;
    }

    /// Document input for whichever kind is active. Non-digits are dropped
    /// and the value is truncated to the kind's fixed length as typed.
    pub fn set_documento(&mut self, value: &str) {
        match self.tipo {
            TipoPessoa::Fisica => self.cpf = digits(value, 11),
            TipoPessoa::Juridica => self.cnpj = digits(value, 14),
        }
        self.errors.documento = None;
    }

    pub fn documento_digits(&self) -> &str {
        match self.tipo {
            TipoPessoa::Fisica => &self.cpf,
            TipoPessoa::Juridica => &self.cnpj,
        }
    }

    pub fn set_cep(&mut self, value: &str) {
        self.cep = digits(value, 8);
        self.errors.cep = None;
    }

    pub fn set_endereco_completo(&mut self, value: &str) {
        self.endereco_completo = value.to_string();
        self.errors.endereco_completo = None;
    }

    /// Switch person type: the now-inapplicable document is dropped and all
    /// current errors are reset.
    pub fn set_tipo(&mut self, tipo: TipoPessoa) {
        if self.tipo == tipo {
            return;
        }
        self.tipo = tipo;
        match tipo {
            TipoPessoa::Fisica => self.cnpj.clear(),
            TipoPessoa::Juridica => self.cpf.clear(),
        }
        self.errors = ClienteFormErrors::default();
    }

    pub fn validate(&self) -> ClienteFormErrors {
        let mut errors = ClienteFormErrors::default();
        if self.nome_ou_razao.trim().is_empty() {
            errors.nome_ou_razao = Some("Nome/Razão Social é obrigatório.".to_string());
        }
        if self.cep.len() != 8 {
            errors.cep = Some("CEP deve ter 8 dígitos.".to_string());
        }
        match self.tipo {
            TipoPessoa::Fisica if self.cpf.len() != 11 => {
                errors.documento = Some("CPF deve ter 11 dígitos.".to_string());
            }
            TipoPessoa::Juridica if self.cnpj.len() != 14 => {
                errors.documento = Some("CNPJ deve ter 14 dígitos.".to_string());
            }
            _ => {}
        }
        if self.endereco_completo.trim().is_empty() {
            errors.endereco_completo = Some("Endereço completo é obrigatório.".to_string());
        }
        errors
    }

    /// Validate and build the API payload. The document variant follows the
    /// active person type, so the inapplicable one cannot leak through.
    pub fn payload(&self) -> Result<ClientePayload, ClienteFormErrors> {
        let errors = self.validate();
        if !errors.is_clean() {
            return Err(errors);
        }
        let documento = match self.tipo {
            TipoPessoa::Fisica => Documento::Cpf(self.cpf.clone()),
            TipoPessoa::Juridica => Documento::Cnpj(self.cnpj.clone()),
        };
        Ok(ClientePayload {
            nome_ou_razao: self.nome_ou_razao.trim().to_string(),
            documento,
            cep: self.cep.clone(),
            endereco_completo: self.endereco_completo.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_juridica() -> ClienteForm {
        let mut form = ClienteForm::new();
        form.set_nome_ou_razao("Construtora Alfa");
        form.set_documento("12.345.678/0001-99");
        form.set_cep("01310-100");
        form.set_endereco_completo("Av. Paulista, 1000");
        form
    }

    #[test]
    fn short_cep_is_a_field_error_and_blocks_the_payload() {
        let mut form = filled_juridica();
        form.set_cep("1234");

        let errors = form.validate();
        assert!(errors.cep.is_some());
        assert!(errors.documento.is_none());
        assert!(form.payload().is_err());
    }

    #[test]
    fn setters_strip_mask_characters_as_typed() {
        let form = filled_juridica();
        assert_eq!(form.cnpj, "12345678000199");
        assert_eq!(form.cep, "01310100");
    }

    #[test]
    fn document_input_is_truncated_to_the_fixed_length() {
        let mut form = ClienteForm::new();
        form.set_tipo(TipoPessoa::Fisica);
        form.set_documento("123456789019999");
        assert_eq!(form.cpf, "12345678901");
    }

    #[test]
    fn payload_carries_the_document_matching_the_active_type() {
        let form = filled_juridica();
        let payload = form.payload().unwrap();
        assert_eq!(
            payload.documento,
            Documento::Cnpj("12345678000199".to_string())
        );
    }

    #[test]
    fn toggling_person_type_clears_the_inapplicable_document_and_errors() {
        let mut form = ClienteForm::new();
        form.set_documento("12345678000199");
        form.errors = form.validate();
        assert!(!form.errors.is_clean());

        form.set_tipo(TipoPessoa::Fisica);
        assert!(form.cnpj.is_empty());
        assert!(form.errors.is_clean());
    }

    #[test]
    fn edit_prefills_from_the_existing_client() {
        let cliente = Cliente {
            id: 7,
            nome_ou_razao: "Maria Souza".to_string(),
            documento: Documento::Cpf("12345678901".to_string()),
            cep: "01310100".to_string(),
            endereco_completo: "Rua das Flores, 12".to_string(),
        };
        let form = ClienteForm::edit(&cliente);
        assert!(form.is_editing());
        assert_eq!(form.tipo, TipoPessoa::Fisica);
        assert_eq!(form.cpf, "12345678901");
        assert!(form.cnpj.is_empty());
        assert!(form.payload().is_ok());
    }
}
