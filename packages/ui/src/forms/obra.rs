//! Obra form: construction (CNO required) or renovation (description
//! required), tied to an existing client, with up to ten photo attachments.

use api::{FotoUpload, ObraDetalhe, ObraPayload, TipoObra, MAX_FOTOS};

#[derive(Debug, Clone, PartialEq)]
pub struct ObraForm {
    pub cliente_id: Option<i64>,
    pub nome_obra: String,
    pub tipo: TipoObra,
    pub cno: String,
    pub descricao: String,
    pub endereco_completo: String,
    /// ISO date string (YYYY-MM-DD), as produced by a date input.
    pub data_inicio: String,
    pub previsao_entrega: String,
    pub fotos: Vec<FotoUpload>,
    pub errors: ObraFormErrors,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObraFormErrors {
    pub cliente_id: Option<String>,
    pub nome_obra: Option<String>,
    /// Error on the active conditional field (CNO or description).
    pub detalhe: Option<String>,
    pub endereco_completo: Option<String>,
    pub data_inicio: Option<String>,
    pub previsao_entrega: Option<String>,
    pub fotos: Option<String>,
}

impl ObraFormErrors {
    pub fn is_clean(&self) -> bool {
        self.cliente_id.is_none()
            && self.nome_obra.is_none()
            && self.detalhe.is_none()
            && self.endereco_completo.is_none()
            && self.data_inicio.is_none()
            && self.previsao_entrega.is_none()
            && self.fotos.is_none()
    }
}

impl Default for ObraForm {
    fn default() -> Self {
        Self {
            cliente_id: None,
            nome_obra: String::new(),
            tipo: TipoObra::Construcao,
            cno: String::new(),
            descricao: String::new(),
            endereco_completo: String::new(),
            data_inicio: String::new(),
            previsao_entrega: String::new(),
            fotos: Vec::new(),
            errors: ObraFormErrors::default(),
        }
    }
}

impl ObraForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cliente_id(&mut self, id: Option<i64>) {
        self.cliente_id = id;
        self.errors.cliente_id = None;
    }

    pub fn set_nome_obra(&mut self, value: &str) {
        self.nome_obra = value.to_string();
        self.errors.nome_obra = None;
    }

    pub fn set_cno(&mut self, value: &str) {
        self.cno = value.to_string();
        self.errors.detalhe = None;
    }

    pub fn set_descricao(&mut self, value: &str) {
        self.descricao = value.to_string();
        self.errors.detalhe = None;
    }

    pub fn set_endereco_completo(&mut self, value: &str) {
        self.endereco_completo = value.to_string();
        self.errors.endereco_completo = None;
    }

    pub fn set_data_inicio(&mut self, value: &str) {
        self.data_inicio = value.to_string();
        self.errors.data_inicio = None;
    }

    pub fn set_previsao_entrega(&mut self, value: &str) {
        self.previsao_entrega = value.to_string();
        self.errors.previsao_entrega = None;
    }

    /// Switch obra type, dropping the now-inapplicable conditional field and
    /// every current error.
    pub fn set_tipo(&mut self, tipo: TipoObra) {
        if self.tipo == tipo {
            return;
        }
        self.tipo = tipo;
        self.cno.clear();
        self.descricao.clear();
        self.errors = ObraFormErrors::default();
    }

    /// Attach one selected photo; selections past the cap are rejected with
    /// a field error instead of being silently dropped.
    pub fn add_foto(&mut self, foto: FotoUpload) {
        if self.fotos.len() >= MAX_FOTOS {
            self.errors.fotos = Some(format!("Máximo de {MAX_FOTOS} fotos por obra."));
            return;
        }
        self.fotos.push(foto);
        self.errors.fotos = None;
    }

    pub fn clear_fotos(&mut self) {
        self.fotos.clear();
        self.errors.fotos = None;
    }

    pub fn validate(&self) -> ObraFormErrors {
        let mut errors = ObraFormErrors::default();
        if self.cliente_id.is_none() {
            errors.cliente_id = Some("Selecione o cliente responsável.".to_string());
        }
        if self.nome_obra.trim().is_empty() {
            errors.nome_obra = Some("Nome da obra é obrigatório.".to_string());
        }
        match self.tipo {
            TipoObra::Construcao => {
                if self.cno.trim().len() < 5 {
                    errors.detalhe =
                        Some("CNO é obrigatório para construção (mínimo 5 caracteres).".to_string());
                }
            }
            TipoObra::Reforma => {
                if self.descricao.trim().len() < 10 {
                    errors.detalhe = Some(
                        "Descrição detalhada é obrigatória para reforma (mínimo 10 caracteres)."
                            .to_string(),
                    );
                }
            }
        }
        if self.endereco_completo.trim().is_empty() {
            errors.endereco_completo = Some("Endereço completo é obrigatório.".to_string());
        }
        if self.data_inicio.is_empty() {
            errors.data_inicio = Some("Data de início é obrigatória.".to_string());
        }
        if self.previsao_entrega.is_empty() {
            errors.previsao_entrega = Some("Previsão de entrega é obrigatória.".to_string());
        }
        errors
    }

    pub fn payload(&self) -> Result<ObraPayload, ObraFormErrors> {
        let errors = self.validate();
        // A missing cliente is already a field error, so the returned errors
        // struct is never empty.
        let cliente_id = match self.cliente_id {
            Some(id) if errors.is_clean() => id,
            _ => return Err(errors),
        };
        let detalhe = match self.tipo {
            TipoObra::Construcao => ObraDetalhe::Construcao {
                cno: self.cno.trim().to_string(),
            },
            TipoObra::Reforma => ObraDetalhe::Reforma {
                descricao: self.descricao.trim().to_string(),
            },
        };
        Ok(ObraPayload {
            nome_obra: self.nome_obra.trim().to_string(),
            detalhe,
            cliente_id,
            endereco_completo: self.endereco_completo.trim().to_string(),
            data_inicio: self.data_inicio.clone(),
            previsao_entrega: self.previsao_entrega.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(tipo: TipoObra) -> ObraForm {
        let mut form = ObraForm::new();
        form.set_tipo(tipo);
        form.set_cliente_id(Some(3));
        form.set_nome_obra("Edifício Central");
        form.set_endereco_completo("Rua A, 1");
        form.set_data_inicio("2026-01-10");
        form.set_previsao_entrega("2027-06-30");
        form
    }

    #[test]
    fn construcao_without_cno_is_rejected_locally() {
        let form = filled(TipoObra::Construcao);
        let errors = form.validate();
        assert!(errors.detalhe.is_some());
        assert!(form.payload().is_err());
    }

    #[test]
    fn switching_to_reforma_with_a_long_description_submits() {
        let mut form = filled(TipoObra::Construcao);
        assert!(form.payload().is_err());

        form.set_tipo(TipoObra::Reforma);
        form.set_descricao("Troca da fachada"); // 16 chars, past the minimum

        let payload = form.payload().unwrap();
        assert_eq!(
            payload.detalhe,
            ObraDetalhe::Reforma {
                descricao: "Troca da fachada".to_string()
            }
        );
    }

    #[test]
    fn short_reforma_description_is_rejected() {
        let mut form = filled(TipoObra::Reforma);
        form.set_descricao("curta");
        assert!(form.validate().detalhe.is_some());
    }

    #[test]
    fn missing_cliente_is_a_field_error() {
        let mut form = filled(TipoObra::Construcao);
        form.set_cno("12345");
        form.set_cliente_id(None);
        assert!(form.validate().cliente_id.is_some());
    }

    #[test]
    fn payload_error_for_missing_cliente_carries_the_field_error() {
        let mut form = filled(TipoObra::Construcao);
        form.set_cno("12345");
        form.set_cliente_id(None);

        let errors = form.payload().unwrap_err();
        assert!(errors.cliente_id.is_some());
        assert!(!errors.is_clean());
    }

    #[test]
    fn toggling_tipo_clears_conditional_fields_and_errors() {
        let mut form = filled(TipoObra::Construcao);
        form.set_cno("12345");
        form.errors = form.validate();

        form.set_tipo(TipoObra::Reforma);
        assert!(form.cno.is_empty());
        assert!(form.errors.is_clean());
    }

    #[test]
    fn photo_attachments_are_capped() {
        let mut form = filled(TipoObra::Construcao);
        let foto = FotoUpload {
            file_name: "a.jpg".to_string(),
            mime: "image/jpeg".to_string(),
            bytes: vec![1, 2, 3],
        };
        for _ in 0..MAX_FOTOS {
            form.add_foto(foto.clone());
        }
        assert_eq!(form.fotos.len(), MAX_FOTOS);
        assert!(form.errors.fotos.is_none());

        form.add_foto(foto);
        assert_eq!(form.fotos.len(), MAX_FOTOS);
        assert!(form.errors.fotos.is_some());
    }
}
