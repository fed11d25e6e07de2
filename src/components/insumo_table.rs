//! Insumo Table Component
//!
//! Current stock table. Hands its reload function to the page so other
//! components can ask for a refresh after a mutation.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, RefreshFn};
use crate::forms::InsumoTableState;

#[component]
pub fn InsumoTable(
    /// Receives this table's reload function once, on mount
    #[prop(into)]
    on_register: Callback<RefreshFn>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let table = RwSignal::new(InsumoTableState::default());

    let reload: RefreshFn = Arc::new(move || {
        table.update(InsumoTableState::begin_load);
        let gateway = ctx.insumos.clone();
        spawn_local(async move {
            let result = gateway.list_insumos().await;
            table.update(|state| state.finish_load(result));
        });
    });

    on_register.run(reload.clone());

    // Load on mount
    {
        let reload = reload.clone();
        Effect::new(move |_| reload());
    }

    let rows = move || {
        table.with(|state| {
            if let Some(text) = state.placeholder() {
                return view! {
                    <tr><td colspan="4" class="empty-row">{text}</td></tr>
                }
                .into_any();
            }
            state
                .insumos
                .iter()
                .map(|insumo| {
                    view! {
                        <tr>
                            <td>{insumo.id}</td>
                            <td>{insumo.nome.clone()}</td>
                            <td>{insumo.unidade_medida.clone()}</td>
                            <td class="numeric">{format!("{:.2}", insumo.estoque_atual)}</td>
                        </tr>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <section class="card">
            <div class="card-header">
                <h2>"Estoque Atual"</h2>
                <button
                    type="button"
                    class="btn-secondary"
                    prop:disabled=move || table.with(|s| s.loading)
                    on:click=move |_| reload()
                >
                    {move || if table.with(|s| s.loading) { "Atualizando..." } else { "Atualizar" }}
                </button>
            </div>

            {move || table.with(|s| s.error.clone()).map(|error| view! {
                <div class="feedback feedback-error" role="alert">{error}</div>
            })}

            <table class="stock-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Nome"</th>
                        <th>"Unidade"</th>
                        <th>"Estoque"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
