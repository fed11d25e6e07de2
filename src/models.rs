//! Frontend Models
//!
//! Data structures matching the backend JSON contract.

use serde::{Deserialize, Serialize};

/// Stocked raw-material item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insumo {
    pub id: u32,
    pub nome: String,
    pub unidade_medida: String,
    pub estoque_atual: f64,
}

/// Payload for `POST /api/v1/insumos`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsumoRequest {
    pub nome: String,
    pub unidade_medida: String,
    pub estoque_atual: f64,
}

/// One recipe line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredienteRequest {
    pub insumo_id: u32,
    pub quantidade_necessaria: f64,
}

/// Payload for `POST /api/v1/receitas`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceitaRequest {
    pub nome: String,
    pub modo_preparo: String,
    pub ingredientes: Vec<IngredienteRequest>,
}

/// Recipe-create response. The UI never reads it.
pub type ReceitaAck = serde_json::Value;
