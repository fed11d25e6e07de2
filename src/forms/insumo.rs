//! Item registration form state

use super::parse_positive;
use crate::api::ApiResult;
use crate::feedback::Feedback;
use crate::models::{Insumo, InsumoRequest};

const MSG_INVALID: &str = "Preencha todos os campos corretamente.";
const MSG_CREATED: &str = "Insumo cadastrado com sucesso!";

/// Field values as typed
#[derive(Debug, Clone, PartialEq)]
pub struct InsumoDraft {
    pub nome: String,
    pub unidade_medida: String,
    pub estoque_atual: String,
}

impl Default for InsumoDraft {
    fn default() -> Self {
        Self {
            nome: String::new(),
            unidade_medida: String::new(),
            estoque_atual: "0".to_string(),
        }
    }
}

impl InsumoDraft {
    /// Request for a draft with non-empty name and unit and positive stock
    pub fn to_request(&self) -> Option<InsumoRequest> {
        if self.nome.is_empty() || self.unidade_medida.is_empty() {
            return None;
        }
        Some(InsumoRequest {
            nome: self.nome.clone(),
            unidade_medida: self.unidade_medida.clone(),
            estoque_atual: parse_positive(&self.estoque_atual)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsumoFormState {
    pub draft: InsumoDraft,
    pub busy: bool,
    pub feedback: Feedback,
}

impl InsumoFormState {
    /// Start a submit. Returns the request to send, or None when the draft
    /// is invalid (feedback set, busy already cleared).
    pub fn begin_submit(&mut self) -> Option<InsumoRequest> {
        self.feedback = Feedback::None;
        self.busy = true;

        let request = self.draft.to_request();
        if request.is_none() {
            self.feedback = Feedback::error(MSG_INVALID);
            self.busy = false;
        }
        request
    }

    /// Apply the backend answer. Returns true when the item was created and
    /// the listing should refresh.
    pub fn finish_submit(&mut self, result: ApiResult<Insumo>) -> bool {
        self.busy = false;
        match result {
            Ok(insumo) => {
                tracing::info!(id = insumo.id, "Insumo cadastrado: {}", insumo.nome);
                self.feedback = Feedback::success(MSG_CREATED);
                self.draft = InsumoDraft::default();
                true
            }
            Err(err) => {
                tracing::error!("Erro ao cadastrar: {}", err);
                self.feedback = Feedback::error(format!("Falha no cadastro: {}", err));
                false
            }
        }
    }
}
