//! In-memory gateway that records every call.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{ApiError, ApiResult, InsumoGateway, ReceitaGateway};
use crate::models::{Insumo, InsumoRequest, ReceitaAck, ReceitaRequest};

#[derive(Default)]
pub struct MockGateway {
    catalog: Vec<Insumo>,
    list_status: Option<u16>,
    reject_with: Option<String>,
    pub list_calls: Mutex<usize>,
    pub insumo_posts: Mutex<Vec<InsumoRequest>>,
    pub receita_posts: Mutex<Vec<ReceitaRequest>>,
}

impl MockGateway {
    pub fn with_catalog(catalog: Vec<Insumo>) -> Self {
        Self { catalog, ..Self::default() }
    }

    /// Make list calls fail with the given status
    pub fn failing_list(status: u16) -> Self {
        Self { list_status: Some(status), ..Self::default() }
    }

    /// Make create calls fail with the given backend message
    pub fn rejecting(message: &str) -> Self {
        Self { reject_with: Some(message.to_string()), ..Self::default() }
    }

    pub fn insumo_posts(&self) -> Vec<InsumoRequest> {
        self.insumo_posts.lock().unwrap().clone()
    }

    pub fn receita_posts(&self) -> Vec<ReceitaRequest> {
        self.receita_posts.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    fn rejection(&self, resource: &'static str) -> Option<ApiError> {
        self.reject_with
            .clone()
            .map(|message| ApiError::Rejected { resource, message })
    }
}

pub fn insumo(id: u32, nome: &str, unidade: &str, estoque: f64) -> Insumo {
    Insumo {
        id,
        nome: nome.to_string(),
        unidade_medida: unidade.to_string(),
        estoque_atual: estoque,
    }
}

#[async_trait(?Send)]
impl InsumoGateway for MockGateway {
    async fn list_insumos(&self) -> ApiResult<Vec<Insumo>> {
        *self.list_calls.lock().unwrap() += 1;
        match self.list_status {
            Some(status) => Err(ApiError::Fetch { status, resource: "insumos" }),
            None => Ok(self.catalog.clone()),
        }
    }

    async fn create_insumo(&self, request: &InsumoRequest) -> ApiResult<Insumo> {
        let mut posts = self.insumo_posts.lock().unwrap();
        posts.push(request.clone());
        if let Some(err) = self.rejection("insumo") {
            return Err(err);
        }
        Ok(Insumo {
            id: (self.catalog.len() + posts.len()) as u32,
            nome: request.nome.clone(),
            unidade_medida: request.unidade_medida.clone(),
            estoque_atual: request.estoque_atual,
        })
    }
}

#[async_trait(?Send)]
impl ReceitaGateway for MockGateway {
    async fn create_receita(&self, request: &ReceitaRequest) -> ApiResult<ReceitaAck> {
        self.receita_posts.lock().unwrap().push(request.clone());
        match self.rejection("receita") {
            Some(err) => Err(err),
            None => Ok(serde_json::json!({ "nome": request.nome })),
        }
    }
}
