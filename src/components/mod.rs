//! UI Components
//!
//! Leptos components for the stock page.

mod feedback_banner;
mod insumo_form;
mod insumo_table;
mod receita_form;

pub use feedback_banner::FeedbackBanner;
pub use insumo_form::InsumoForm;
pub use insumo_table::InsumoTable;
pub use receita_form::ReceitaForm;
