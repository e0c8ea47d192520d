//! # Cliente — billable customer, individual or organization
//!
//! The backend stores clients as one flat row with nullable `cpf`/`cnpj`
//! columns and a `tipoPessoa` discriminator. Here the document is a sum type,
//! [`Documento`], so "exactly one of cpf/cnpj is populated, consistent with
//! the person type" holds by construction; the flat shape only exists at the
//! serde boundary ([`ClienteDto`]), and deserialization rejects rows where the
//! discriminator and the populated column disagree.

use serde::{Deserialize, Serialize};

/// Wire discriminator for the two client kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoPessoa {
    #[serde(rename = "FISICA")]
    Fisica,
    #[serde(rename = "JURIDICA")]
    Juridica,
}

/// Tax document: an 11-digit CPF for individuals or a 14-digit CNPJ for
/// organizations. Digits only; display masks live in the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Documento {
    Cpf(String),
    Cnpj(String),
}

impl Documento {
    pub fn tipo(&self) -> TipoPessoa {
        match self {
            Documento::Cpf(_) => TipoPessoa::Fisica,
            Documento::Cnpj(_) => TipoPessoa::Juridica,
        }
    }

    pub fn digits(&self) -> &str {
        match self {
            Documento::Cpf(d) | Documento::Cnpj(d) => d,
        }
    }
}

/// A client as returned by `GET /clientes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ClienteDto", into = "ClienteDto")]
pub struct Cliente {
    pub id: i64,
    pub nome_ou_razao: String,
    pub documento: Documento,
    pub cep: String,
    pub endereco_completo: String,
}

/// Create/update body for `POST /clientes` and `PUT /clientes/:id`. Identity
/// is assigned server-side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "ClientePayloadDto")]
pub struct ClientePayload {
    pub nome_ou_razao: String,
    pub documento: Documento,
    pub cep: String,
    pub endereco_completo: String,
}

/// The backend's flat row shape. `cpf` and `cnpj` are mutually exclusive and
/// must match `tipo_pessoa`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClienteDto {
    id: i64,
    tipo_pessoa: TipoPessoa,
    nome_ou_razao: String,
    #[serde(default)]
    cpf: Option<String>,
    #[serde(default)]
    cnpj: Option<String>,
    cep: String,
    endereco_completo: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientePayloadDto {
    tipo_pessoa: TipoPessoa,
    nome_ou_razao: String,
    cpf: Option<String>,
    cnpj: Option<String>,
    cep: String,
    endereco_completo: String,
}

fn documento_from_row(
    tipo: TipoPessoa,
    cpf: Option<String>,
    cnpj: Option<String>,
) -> Result<Documento, String> {
    match (tipo, cpf, cnpj) {
        (TipoPessoa::Fisica, Some(cpf), None) => Ok(Documento::Cpf(cpf)),
        (TipoPessoa::Juridica, None, Some(cnpj)) => Ok(Documento::Cnpj(cnpj)),
        (TipoPessoa::Fisica, _, _) => {
            Err("cliente FISICA must carry a cpf and no cnpj".to_string())
        }
        (TipoPessoa::Juridica, _, _) => {
            Err("cliente JURIDICA must carry a cnpj and no cpf".to_string())
        }
    }
}

fn documento_to_columns(documento: &Documento) -> (Option<String>, Option<String>) {
    match documento {
        Documento::Cpf(d) => (Some(d.clone()), None),
        Documento::Cnpj(d) => (None, Some(d.clone())),
    }
}

impl TryFrom<ClienteDto> for Cliente {
    type Error = String;

    fn try_from(dto: ClienteDto) -> Result<Self, Self::Error> {
        let documento = documento_from_row(dto.tipo_pessoa, dto.cpf, dto.cnpj)?;
        Ok(Cliente {
            id: dto.id,
            nome_ou_razao: dto.nome_ou_razao,
            documento,
            cep: dto.cep,
            endereco_completo: dto.endereco_completo,
        })
    }
}

impl From<Cliente> for ClienteDto {
    fn from(cliente: Cliente) -> Self {
        let tipo_pessoa = cliente.documento.tipo();
        let (cpf, cnpj) = documento_to_columns(&cliente.documento);
        ClienteDto {
            id: cliente.id,
            tipo_pessoa,
            nome_ou_razao: cliente.nome_ou_razao,
            cpf,
            cnpj,
            cep: cliente.cep,
            endereco_completo: cliente.endereco_completo,
        }
    }
}

impl From<ClientePayload> for ClientePayloadDto {
    fn from(payload: ClientePayload) -> Self {
        let tipo_pessoa = payload.documento.tipo();
        let (cpf, cnpj) = documento_to_columns(&payload.documento);
        ClientePayloadDto {
            tipo_pessoa,
            nome_ou_razao: payload.nome_ou_razao,
            cpf,
            cnpj,
            cep: payload.cep,
            endereco_completo: payload.endereco_completo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(documento: Documento) -> ClientePayload {
        ClientePayload {
            nome_ou_razao: "Construtora Alfa".to_string(),
            documento,
            cep: "01310100".to_string(),
            endereco_completo: "Av. Paulista, 1000".to_string(),
        }
    }

    #[test]
    fn payload_populates_exactly_one_document_column() {
        let json =
            serde_json::to_value(payload(Documento::Cnpj("12345678000199".to_string()))).unwrap();
        assert_eq!(json["tipoPessoa"], "JURIDICA");
        assert_eq!(json["cnpj"], "12345678000199");
        assert!(json["cpf"].is_null());

        let json = serde_json::to_value(payload(Documento::Cpf("12345678901".to_string()))).unwrap();
        assert_eq!(json["tipoPessoa"], "FISICA");
        assert_eq!(json["cpf"], "12345678901");
        assert!(json["cnpj"].is_null());
    }

    #[test]
    fn cliente_round_trips_through_the_wire_shape() {
        let json = serde_json::json!({
            "id": 7,
            "tipoPessoa": "FISICA",
            "nomeOuRazao": "Maria Souza",
            "cpf": "12345678901",
            "cnpj": null,
            "cep": "01310100",
            "enderecoCompleto": "Rua das Flores, 12"
        });
        let cliente: Cliente = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(cliente.documento, Documento::Cpf("12345678901".to_string()));

        let back = serde_json::to_value(cliente).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn mismatched_discriminator_is_rejected() {
        let json = serde_json::json!({
            "id": 7,
            "tipoPessoa": "FISICA",
            "nomeOuRazao": "Maria Souza",
            "cpf": null,
            "cnpj": "12345678000199",
            "cep": "01310100",
            "enderecoCompleto": "Rua das Flores, 12"
        });
        assert!(serde_json::from_value::<Cliente>(json).is_err());
    }
}
