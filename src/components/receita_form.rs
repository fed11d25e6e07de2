//! Receita Form Component
//!
//! Registers a recipe with a dynamic list of ingredient rows. Loads the item
//! catalog once on mount for the selection control and unit labels.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FeedbackBanner;
use crate::context::AppContext;
use crate::forms::ReceitaFormState;

/// One ingredient row, addressed by its stable line id
#[component]
fn IngredienteRow(form: RwSignal<ReceitaFormState>, line_id: usize) -> impl IntoView {
    let index = move || form.with(|s| s.index_of(line_id));

    let selected = move || {
        form.with(|s| {
            s.index_of(line_id)
                .map(|i| s.ingredientes[i].insumo_id)
                .unwrap_or(0)
        })
    };

    let options = move || {
        let current = selected();
        form.with(|s| {
            s.catalogo
                .iter()
                .map(|insumo| {
                    view! {
                        <option value={insumo.id.to_string()} selected={insumo.id == current}>
                            {format!("{} ({})", insumo.nome, insumo.unidade_medida)}
                        </option>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="ingredient-row">
            <div class="ingredient-item">
                <label>"Insumo"</label>
                <select
                    required
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        if let Some(i) = index() {
                            form.update(|s| s.set_line_insumo(i, &value));
                        }
                    }
                >
                    <option value="0" disabled selected=move || selected() == 0>
                        "Selecione o Insumo"
                    </option>
                    {options}
                </select>
            </div>

            <div class="ingredient-quantity">
                <label>
                    {move || form.with(|s| {
                        let unit = s.index_of(line_id).map(|i| s.unit_for(i)).unwrap_or("Unidade");
                        format!("Quantidade ({})", unit)
                    })}
                </label>
                <input
                    type="number"
                    min="0.01"
                    step="0.01"
                    required
                    prop:value=move || form.with(|s| {
                        s.index_of(line_id)
                            .map(|i| s.ingredientes[i].quantidade.clone())
                            .unwrap_or_default()
                    })
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        if let Some(i) = index() {
                            form.update(|s| s.set_line_quantidade(i, value));
                        }
                    }
                />
            </div>

            <button
                type="button"
                class="btn-remove"
                prop:disabled=move || form.with(|s| s.ingredientes.len() == 1)
                on:click=move |_| {
                    if let Some(i) = index() {
                        form.update(|s| {
                            s.remove_line(i);
                        });
                    }
                }
            >
                "X"
            </button>
        </div>
    }
}

#[component]
pub fn ReceitaForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let form = RwSignal::new(ReceitaFormState::default());

    // Load catalog once on mount
    {
        let gateway = ctx.insumos.clone();
        Effect::new(move |_| {
            let gateway = gateway.clone();
            spawn_local(async move {
                let result = gateway.list_insumos().await;
                form.update(|s| s.finish_catalog_load(result));
            });
        });
    }

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(ReceitaFormState::begin_submit).flatten() else {
            return;
        };

        let gateway = ctx.receitas.clone();
        spawn_local(async move {
            let result = gateway.create_receita(&request).await;
            form.update(|s| {
                s.finish_submit(result);
            });
        });
    };

    view! {
        <section class="card">
            <h2>"2. Cadastro de Nova Receita"</h2>

            <FeedbackBanner feedback=Signal::derive(move || form.with(|s| s.feedback.clone())) />

            <form class="stack" on:submit=submit>
                <label for="receita-nome">"Nome da Receita"</label>
                <input
                    type="text"
                    id="receita-nome"
                    required
                    placeholder="Ex: Bolo de Chocolate"
                    prop:value=move || form.with(|s| s.nome.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|s| s.nome = value);
                    }
                />

                <label for="receita-modo">"Modo de Preparo (Resumo)"</label>
                <textarea
                    id="receita-modo"
                    required
                    rows="3"
                    placeholder="Misture os secos, adicione os molhados, asse..."
                    prop:value=move || form.with(|s| s.modo_preparo.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|s| s.modo_preparo = value);
                    }
                ></textarea>

                <h3>"Ingredientes"</h3>
                <For
                    each=move || form.with(|s| s.ingredientes.iter().map(|l| l.line_id).collect::<Vec<_>>())
                    key=|line_id| *line_id
                    children=move |line_id| view! { <IngredienteRow form=form line_id=line_id /> }
                />

                <button
                    type="button"
                    class="btn-secondary"
                    on:click=move |_| form.update(ReceitaFormState::add_line)
                >
                    "+ Adicionar Ingrediente"
                </button>

                <button
                    type="submit"
                    class="btn-primary"
                    prop:disabled=move || form.with(|s| s.busy)
                >
                    {move || if form.with(|s| s.busy) { "Cadastrando Receita..." } else { "Cadastrar Receita" }}
                </button>
            </form>
        </section>
    }
}
