//! Item listing state

use crate::api::ApiResult;
use crate::models::Insumo;

const MSG_LOADING: &str = "Carregando...";
const MSG_EMPTY: &str = "Nenhum insumo cadastrado.";
const MSG_BACKEND_UNREACHABLE: &str =
    "Não foi possível conectar ao backend. Verifique se o servidor está rodando em localhost:8080.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsumoTableState {
    pub insumos: Vec<Insumo>,
    pub loading: bool,
    pub error: Option<String>,
}

impl InsumoTableState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Placeholder row text when there are no rows to show. None after a
    /// failed load: the error explains the empty table.
    pub fn placeholder(&self) -> Option<&'static str> {
        if !self.insumos.is_empty() || self.error.is_some() {
            return None;
        }
        Some(if self.loading { MSG_LOADING } else { MSG_EMPTY })
    }

    /// Apply a list fetch. A failure drops any previous rows.
    pub fn finish_load(&mut self, result: ApiResult<Vec<Insumo>>) {
        self.loading = false;
        match result {
            Ok(insumos) => self.insumos = insumos,
            Err(err) => {
                tracing::warn!("Falha ao carregar insumos: {}", err);
                self.insumos.clear();
                self.error = Some(MSG_BACKEND_UNREACHABLE.to_string());
            }
        }
    }
}
