//! Insumo Form Component
//!
//! Registers a new item and tells the page when one was created.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FeedbackBanner;
use crate::context::AppContext;
use crate::forms::InsumoFormState;

#[component]
pub fn InsumoForm(
    /// Fired once per successfully created item
    #[prop(into)]
    on_created: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let form = RwSignal::new(InsumoFormState::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(InsumoFormState::begin_submit).flatten() else {
            return;
        };

        let gateway = ctx.insumos.clone();
        spawn_local(async move {
            let result = gateway.create_insumo(&request).await;
            let created = form
                .try_update(|state| state.finish_submit(result))
                .unwrap_or(false);
            if created {
                on_created.run(());
            }
        });
    };

    view! {
        <section class="card">
            <h2>"1. Cadastro de Novo Insumo"</h2>

            <FeedbackBanner feedback=Signal::derive(move || form.with(|s| s.feedback.clone())) />

            <form class="stack" on:submit=submit>
                <label for="insumo-nome">"Nome do Insumo"</label>
                <input
                    type="text"
                    id="insumo-nome"
                    name="nome"
                    required
                    prop:value=move || form.with(|s| s.draft.nome.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|s| s.draft.nome = value);
                    }
                />

                <label for="insumo-unidade">"Unidade de Medida (Ex: Kg, L, Un)"</label>
                <input
                    type="text"
                    id="insumo-unidade"
                    name="unidadeMedida"
                    required
                    prop:value=move || form.with(|s| s.draft.unidade_medida.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|s| s.draft.unidade_medida = value);
                    }
                />

                <label for="insumo-estoque">"Estoque Inicial"</label>
                <input
                    type="number"
                    id="insumo-estoque"
                    name="estoqueAtual"
                    min="0.01"
                    step="0.01"
                    required
                    prop:value=move || form.with(|s| s.draft.estoque_atual.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|s| s.draft.estoque_atual = value);
                    }
                />

                <button
                    type="submit"
                    class="btn-primary"
                    prop:disabled=move || form.with(|s| s.busy)
                >
                    {move || if form.with(|s| s.busy) { "Cadastrando..." } else { "Cadastrar Insumo" }}
                </button>
            </form>
        </section>
    }
}
