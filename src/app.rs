//! Estoque Frontend App
//!
//! Stock table on top, item and recipe forms below. The page owns the
//! refresh slot: the table registers its reload there and the item form
//! fires it after a successful create.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::{InsumoForm, InsumoTable, ReceitaForm};
use crate::config::ApiConfig;
use crate::context::{AppContext, RefreshFn, RefreshSlot};

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new(ApiClient::from_config(ApiConfig::default())));

    let refresh = RefreshSlot::default();

    let register_refresh = {
        let refresh = refresh.clone();
        Callback::new(move |target: RefreshFn| {
            if refresh.register(target) {
                tracing::debug!("Refresh target replaced");
            }
        })
    };

    let notify_created = Callback::new(move |_: ()| {
        if !refresh.notify() {
            tracing::warn!("Insumo created but no table is registered for refresh");
        }
    });

    view! {
        <main class="page">
            <h1>"Controle de Estoque"</h1>

            <InsumoTable on_register=register_refresh />

            <div class="forms">
                <InsumoForm on_created=notify_created />
                <ReceitaForm />
            </div>
        </main>
    }
}
