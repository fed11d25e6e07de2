//! Backend API
//!
//! HTTP bindings to the inventory backend, organized by domain.
//! Components talk to the gateway traits; `ApiClient` is the gloo-net
//! implementation used in the browser.

mod insumo;
mod receita;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use gloo_net::http::Response;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::models::{Insumo, InsumoRequest, ReceitaAck, ReceitaRequest};

/// The only status a create call accepts as success
const STATUS_CREATED: u16 = 201;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single backend call
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Read request answered with a non-2xx status
    #[error("Erro {status}: Falha ao buscar a lista de {resource}.")]
    Fetch { status: u16, resource: &'static str },

    /// Create request answered with anything but 201
    #[error("Erro ao cadastrar {resource}: {message}")]
    Rejected { resource: &'static str, message: String },

    /// Connectivity or body read failure
    #[error("Falha de rede: {0}")]
    Network(#[from] gloo_net::Error),

    /// Success response whose body is not the expected JSON
    #[error("Resposta inválida do servidor: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Item endpoints
#[async_trait(?Send)]
pub trait InsumoGateway: Send + Sync {
    /// Fetch every item, bypassing caches
    async fn list_insumos(&self) -> ApiResult<Vec<Insumo>>;

    /// Register a new item; returns it with its assigned id
    async fn create_insumo(&self, request: &InsumoRequest) -> ApiResult<Insumo>;
}

/// Recipe endpoints
#[async_trait(?Send)]
pub trait ReceitaGateway: Send + Sync {
    /// Register a recipe with its full ingredient list
    async fn create_receita(&self, request: &ReceitaRequest) -> ApiResult<ReceitaAck>;
}

/// gloo-net client for the backend
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn from_config(config: ApiConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

/// Error body the backend sends on rejection
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Message to show for a rejected create: the body's `message` field when the
/// body is JSON carrying one, the HTTP status text otherwise.
fn rejection_message(body: &str, status_text: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| status_text.to_string())
}

/// Accept only 201; anything else becomes `ApiError::Rejected` with the
/// message taken from `body`.
fn created_or_rejected(status: u16, status_text: &str, body: &str, resource: &'static str) -> ApiResult<()> {
    if status == STATUS_CREATED {
        return Ok(());
    }
    let message = rejection_message(body, status_text);
    tracing::warn!(status, resource, "create rejected: {}", message);
    Err(ApiError::Rejected { resource, message })
}

/// Any 2xx passes; everything else becomes `ApiError::Fetch`.
fn check_list_status(status: u16, resource: &'static str) -> ApiResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Fetch { status, resource })
    }
}

/// Read the body of a create response, failing unless the status is 201.
async fn expect_created(response: Response, resource: &'static str) -> ApiResult<String> {
    let body = response.text().await.unwrap_or_default();
    created_or_rejected(response.status(), &response.status_text(), &body, resource)?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_from_body() {
        let message = rejection_message(r#"{"message":"Insumo já cadastrado"}"#, "Conflict");
        assert_eq!(message, "Insumo já cadastrado");
    }

    #[test]
    fn test_rejection_message_falls_back_to_status_text() {
        assert_eq!(rejection_message("<html>502</html>", "Bad Gateway"), "Bad Gateway");
        assert_eq!(rejection_message("", "Internal Server Error"), "Internal Server Error");
        assert_eq!(rejection_message(r#"{"error":"x"}"#, "Bad Request"), "Bad Request");
    }

    #[test]
    fn test_create_accepts_only_201() {
        assert!(created_or_rejected(201, "Created", r#"{"id":1}"#, "insumo").is_ok());

        let body = r#"{"message":"Estoque inválido"}"#;
        for (status, status_text) in [(200, "OK"), (204, "No Content"), (400, "Bad Request")] {
            match created_or_rejected(status, status_text, body, "insumo") {
                Err(ApiError::Rejected { resource, message }) => {
                    assert_eq!(resource, "insumo");
                    assert_eq!(message, "Estoque inválido");
                }
                other => panic!("status {} should be rejected, got {:?}", status, other),
            }
        }
    }

    #[test]
    fn test_create_rejection_without_json_uses_status_text() {
        match created_or_rejected(500, "Internal Server Error", "boom", "receita") {
            Err(ApiError::Rejected { message, .. }) => assert_eq!(message, "Internal Server Error"),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_list_status() {
        assert!(check_list_status(200, "insumos").is_ok());
        assert!(check_list_status(204, "insumos").is_ok());

        for status in [304, 404, 500] {
            match check_list_status(status, "insumos") {
                Err(ApiError::Fetch { status: got, resource }) => {
                    assert_eq!(got, status);
                    assert_eq!(resource, "insumos");
                }
                other => panic!("status {} should fail, got {:?}", status, other),
            }
        }
    }

    #[test]
    fn test_error_display() {
        let fetch = ApiError::Fetch { status: 503, resource: "insumos" };
        assert_eq!(fetch.to_string(), "Erro 503: Falha ao buscar a lista de insumos.");

        let rejected = ApiError::Rejected {
            resource: "receita",
            message: "Insumo 9 não encontrado".to_string(),
        };
        assert_eq!(rejected.to_string(), "Erro ao cadastrar receita: Insumo 9 não encontrado");
    }
}
