//! Component State
//!
//! Framework-free state for each screen. A submit is split into
//! `begin_submit` (validate, mark busy, produce the request) and
//! `finish_submit` (apply the backend result), with the network call
//! awaited by the component in between.

mod insumo;
mod receita;
mod table;

pub use insumo::{InsumoDraft, InsumoFormState};
pub use receita::ReceitaFormState;
pub use table::InsumoTableState;

/// Parse a decimal typed by the user. Accepts `,` as separator.
fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Strictly positive decimal, or None
fn parse_positive(raw: &str) -> Option<f64> {
    parse_decimal(raw).filter(|value| *value > 0.0)
}
