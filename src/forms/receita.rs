//! Recipe registration form state

use super::parse_positive;
use crate::api::ApiResult;
use crate::feedback::Feedback;
use crate::models::{IngredienteRequest, Insumo, ReceitaAck, ReceitaRequest};

const MSG_INVALID: &str = "Preencha o nome, modo de preparo e pelo menos um ingrediente válido.";
const MSG_CREATED: &str = "Receita cadastrada com sucesso!";
const MSG_LAST_LINE: &str = "É necessário pelo menos um ingrediente.";
const MSG_CATALOG_FAILED: &str = "Não foi possível carregar os insumos para seleção.";
const UNIT_PLACEHOLDER: &str = "Unidade";

/// One ingredient row as edited. `insumo_id == 0` means nothing selected.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredienteDraft {
    /// Stable row key for rendering; not sent to the backend
    pub line_id: usize,
    pub insumo_id: u32,
    pub quantidade: String,
}

impl IngredienteDraft {
    fn empty(line_id: usize) -> Self {
        Self {
            line_id,
            insumo_id: 0,
            quantidade: "0".to_string(),
        }
    }

    /// Request line for a row with a selected item and positive quantity
    pub fn to_request(&self) -> Option<IngredienteRequest> {
        if self.insumo_id == 0 {
            return None;
        }
        Some(IngredienteRequest {
            insumo_id: self.insumo_id,
            quantidade_necessaria: parse_positive(&self.quantidade)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReceitaFormState {
    pub nome: String,
    pub modo_preparo: String,
    pub ingredientes: Vec<IngredienteDraft>,
    /// Known items, for the selection control and unit display
    pub catalogo: Vec<Insumo>,
    pub busy: bool,
    pub feedback: Feedback,
    next_line_id: usize,
}

impl Default for ReceitaFormState {
    fn default() -> Self {
        Self {
            nome: String::new(),
            modo_preparo: String::new(),
            ingredientes: vec![IngredienteDraft::empty(0)],
            catalogo: Vec::new(),
            busy: false,
            feedback: Feedback::None,
            next_line_id: 1,
        }
    }
}

impl ReceitaFormState {
    /// Apply the one-time catalog fetch. Failure leaves the form usable.
    pub fn finish_catalog_load(&mut self, result: ApiResult<Vec<Insumo>>) {
        match result {
            Ok(insumos) => self.catalogo = insumos,
            Err(err) => {
                tracing::warn!("Não foi possível carregar a lista de insumos: {}", err);
                self.feedback = Feedback::error(MSG_CATALOG_FAILED);
            }
        }
    }

    pub fn add_line(&mut self) {
        self.ingredientes.push(IngredienteDraft::empty(self.next_line_id));
        self.next_line_id += 1;
    }

    /// Remove the row at `index`. The last remaining row is never removed.
    pub fn remove_line(&mut self, index: usize) -> bool {
        if self.ingredientes.len() <= 1 {
            self.feedback = Feedback::error(MSG_LAST_LINE);
            return false;
        }
        if index >= self.ingredientes.len() {
            return false;
        }
        self.ingredientes.remove(index);
        true
    }

    /// Current position of a row
    pub fn index_of(&self, line_id: usize) -> Option<usize> {
        self.ingredientes.iter().position(|line| line.line_id == line_id)
    }

    /// Set the selected item from the select control's value
    pub fn set_line_insumo(&mut self, index: usize, raw: &str) {
        if let Some(line) = self.ingredientes.get_mut(index) {
            line.insumo_id = raw.trim().parse().unwrap_or(0);
        }
    }

    pub fn set_line_quantidade(&mut self, index: usize, raw: String) {
        if let Some(line) = self.ingredientes.get_mut(index) {
            line.quantidade = raw;
        }
    }

    /// Unit of measure of the item selected on a row
    pub fn unit_for(&self, index: usize) -> &str {
        self.ingredientes
            .get(index)
            .and_then(|line| self.catalogo.iter().find(|i| i.id == line.insumo_id))
            .map(|insumo| insumo.unidade_medida.as_str())
            .unwrap_or(UNIT_PLACEHOLDER)
    }

    /// Rows that will be sent, in order
    pub fn valid_ingredientes(&self) -> Vec<IngredienteRequest> {
        self.ingredientes
            .iter()
            .filter_map(IngredienteDraft::to_request)
            .collect()
    }

    /// Start a submit. Returns the filtered request, or None when name,
    /// method or every ingredient row is invalid.
    pub fn begin_submit(&mut self) -> Option<ReceitaRequest> {
        self.feedback = Feedback::None;
        self.busy = true;

        let ingredientes = self.valid_ingredientes();
        if self.nome.is_empty() || self.modo_preparo.is_empty() || ingredientes.is_empty() {
            self.feedback = Feedback::error(MSG_INVALID);
            self.busy = false;
            return None;
        }

        Some(ReceitaRequest {
            nome: self.nome.clone(),
            modo_preparo: self.modo_preparo.clone(),
            ingredientes,
        })
    }

    /// Apply the backend answer. Returns true when the recipe was created.
    pub fn finish_submit(&mut self, result: ApiResult<ReceitaAck>) -> bool {
        self.busy = false;
        match result {
            Ok(_) => {
                self.nome.clear();
                self.modo_preparo.clear();
                self.ingredientes = vec![IngredienteDraft::empty(self.next_line_id)];
                self.next_line_id += 1;
                self.feedback = Feedback::success(MSG_CREATED);
                true
            }
            Err(err) => {
                tracing::error!("Erro ao cadastrar receita: {}", err);
                self.feedback = Feedback::error(format!("Falha no cadastro: {}", err));
                false
            }
        }
    }
}
