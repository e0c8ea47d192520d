//! # Obra — a construction or renovation engagement tied to one client
//!
//! Like [`Cliente`](crate::Cliente), the backend keeps one flat row with a
//! `tipoObra` discriminator and nullable `cno`/`descricao` columns. The
//! per-type required field is expressed here as [`ObraDetalhe`]: a
//! construction always carries its CNO registry code, a renovation always
//! carries its description.
//!
//! Creation goes over multipart (text fields plus up to [`MAX_FOTOS`] photo
//! parts under the `fotos` key); listing comes back as JSON.

use serde::{Deserialize, Serialize};

/// Hard cap on photo attachments per obra, enforced client-side before the
/// request is built and server-side by the upload middleware.
pub const MAX_FOTOS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoObra {
    #[serde(rename = "CONSTRUCAO")]
    Construcao,
    #[serde(rename = "REFORMA")]
    Reforma,
}

/// The per-type payload: CNO for constructions, description for renovations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObraDetalhe {
    Construcao { cno: String },
    Reforma { descricao: String },
}

impl ObraDetalhe {
    pub fn tipo(&self) -> TipoObra {
        match self {
            ObraDetalhe::Construcao { .. } => TipoObra::Construcao,
            ObraDetalhe::Reforma { .. } => TipoObra::Reforma,
        }
    }
}

/// Photo attachment as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Foto {
    pub id: i64,
    pub url: String,
    pub obra_id: i64,
}

/// An obra as returned by `GET /obras`. Read-only after creation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "ObraDto")]
pub struct Obra {
    pub id: i64,
    pub nome_obra: String,
    pub detalhe: ObraDetalhe,
    pub cliente_id: i64,
    pub endereco_completo: String,
    /// ISO date string (YYYY-MM-DD).
    pub data_inicio: String,
    pub previsao_entrega: String,
    pub fotos: Vec<Foto>,
    /// Name of the owning client, when the backend joins it in.
    pub cliente_nome: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObraDto {
    id: i64,
    nome_obra: String,
    tipo_obra: TipoObra,
    #[serde(default)]
    cno: Option<String>,
    #[serde(default)]
    descricao: Option<String>,
    cliente_id: i64,
    endereco_completo: String,
    data_inicio: String,
    previsao_entrega: String,
    #[serde(default)]
    fotos: Vec<Foto>,
    #[serde(default)]
    cliente: Option<ClienteRef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClienteRef {
    nome_ou_razao: String,
}

impl TryFrom<ObraDto> for Obra {
    type Error = String;

    fn try_from(dto: ObraDto) -> Result<Self, Self::Error> {
        let detalhe = match (dto.tipo_obra, dto.cno, dto.descricao) {
            (TipoObra::Construcao, Some(cno), _) => ObraDetalhe::Construcao { cno },
            (TipoObra::Reforma, _, Some(descricao)) => ObraDetalhe::Reforma { descricao },
            (TipoObra::Construcao, None, _) => {
                return Err("obra CONSTRUCAO is missing its cno".to_string())
            }
            (TipoObra::Reforma, _, None) => {
                return Err("obra REFORMA is missing its descricao".to_string())
            }
        };
        Ok(Obra {
            id: dto.id,
            nome_obra: dto.nome_obra,
            detalhe,
            cliente_id: dto.cliente_id,
            endereco_completo: dto.endereco_completo,
            data_inicio: dto.data_inicio,
            previsao_entrega: dto.previsao_entrega,
            fotos: dto.fotos,
            cliente_nome: dto.cliente.map(|c| c.nome_ou_razao),
        })
    }
}

/// Text fields of a new obra. Photos travel separately as multipart parts.
#[derive(Debug, Clone, PartialEq)]
pub struct ObraPayload {
    pub nome_obra: String,
    pub detalhe: ObraDetalhe,
    pub cliente_id: i64,
    pub endereco_completo: String,
    pub data_inicio: String,
    pub previsao_entrega: String,
}

impl ObraPayload {
    /// Multipart text fields in the backend's naming. The inapplicable
    /// conditional column is simply absent, never an empty string.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("nomeObra", self.nome_obra.clone()),
            ("tipoObra", tipo_obra_label(self.detalhe.tipo()).to_string()),
            ("clienteId", self.cliente_id.to_string()),
            ("enderecoCompleto", self.endereco_completo.clone()),
            ("dataInicio", self.data_inicio.clone()),
            ("previsaoEntrega", self.previsao_entrega.clone()),
        ];
        match &self.detalhe {
            ObraDetalhe::Construcao { cno } => fields.push(("cno", cno.clone())),
            ObraDetalhe::Reforma { descricao } => fields.push(("descricao", descricao.clone())),
        }
        fields
    }
}

fn tipo_obra_label(tipo: TipoObra) -> &'static str {
    match tipo {
        TipoObra::Construcao => "CONSTRUCAO",
        TipoObra::Reforma => "REFORMA",
    }
}

/// A photo selected in the browser, ready to become a multipart part.
#[derive(Debug, Clone, PartialEq)]
pub struct FotoUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construcao_fields_carry_cno_and_no_descricao() {
        let payload = ObraPayload {
            nome_obra: "Edifício Central".to_string(),
            detalhe: ObraDetalhe::Construcao {
                cno: "123456789012".to_string(),
            },
            cliente_id: 3,
            endereco_completo: "Rua A, 1".to_string(),
            data_inicio: "2026-01-10".to_string(),
            previsao_entrega: "2027-06-30".to_string(),
        };
        let fields = payload.form_fields();
        assert!(fields.contains(&("tipoObra", "CONSTRUCAO".to_string())));
        assert!(fields.contains(&("cno", "123456789012".to_string())));
        assert!(!fields.iter().any(|(k, _)| *k == "descricao"));
    }

    #[test]
    fn reforma_fields_carry_descricao_and_no_cno() {
        let payload = ObraPayload {
            nome_obra: "Reforma da fachada".to_string(),
            detalhe: ObraDetalhe::Reforma {
                descricao: "Troca completa do revestimento".to_string(),
            },
            cliente_id: 3,
            endereco_completo: "Rua B, 2".to_string(),
            data_inicio: "2026-02-01".to_string(),
            previsao_entrega: "2026-08-01".to_string(),
        };
        let fields = payload.form_fields();
        assert!(fields.contains(&("tipoObra", "REFORMA".to_string())));
        assert!(fields
            .contains(&("descricao", "Troca completa do revestimento".to_string())));
        assert!(!fields.iter().any(|(k, _)| *k == "cno"));
    }

    #[test]
    fn obra_listing_decodes_the_joined_cliente_name() {
        let json = serde_json::json!({
            "id": 1,
            "nomeObra": "Edifício Central",
            "tipoObra": "CONSTRUCAO",
            "cno": "123456789012",
            "descricao": null,
            "clienteId": 3,
            "enderecoCompleto": "Rua A, 1",
            "dataInicio": "2026-01-10",
            "previsaoEntrega": "2027-06-30",
            "fotos": [{"id": 9, "url": "/uploads/9.jpg", "obraId": 1}],
            "cliente": {"nomeOuRazao": "Construtora Alfa"}
        });
        let obra: Obra = serde_json::from_value(json).unwrap();
        assert_eq!(
            obra.detalhe,
            ObraDetalhe::Construcao { cno: "123456789012".to_string() }
        );
        assert_eq!(obra.cliente_nome.as_deref(), Some("Construtora Alfa"));
        assert_eq!(obra.fotos.len(), 1);
    }

    #[test]
    fn reforma_without_descricao_is_rejected() {
        let json = serde_json::json!({
            "id": 1,
            "nomeObra": "Reforma",
            "tipoObra": "REFORMA",
            "clienteId": 3,
            "enderecoCompleto": "Rua A, 1",
            "dataInicio": "2026-01-10",
            "previsaoEntrega": "2026-06-30"
        });
        assert!(serde_json::from_value::<Obra>(json).is_err());
    }
}
