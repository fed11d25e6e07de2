//! Item Endpoints

use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::RequestCache;

use super::{check_list_status, expect_created, ApiClient, ApiResult, InsumoGateway};
use crate::config::INSUMOS_PATH;
use crate::models::{Insumo, InsumoRequest};

#[async_trait(?Send)]
impl InsumoGateway for ApiClient {
    async fn list_insumos(&self) -> ApiResult<Vec<Insumo>> {
        let resp = Request::get(&self.url(INSUMOS_PATH))
            .cache(RequestCache::NoStore)
            .send()
            .await?;

        check_list_status(resp.status(), "insumos")?;

        let insumos: Vec<Insumo> = resp.json().await?;
        tracing::debug!("Loaded {} insumos", insumos.len());
        Ok(insumos)
    }

    async fn create_insumo(&self, request: &InsumoRequest) -> ApiResult<Insumo> {
        let resp = Request::post(&self.url(INSUMOS_PATH))
            .json(request)?
            .send()
            .await?;

        let body = expect_created(resp, "insumo").await?;
        Ok(serde_json::from_str(&body)?)
    }
}
