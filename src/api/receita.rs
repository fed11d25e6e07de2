//! Recipe Endpoints

use async_trait::async_trait;
use gloo_net::http::Request;

use super::{expect_created, ApiClient, ApiResult, ReceitaGateway};
use crate::config::RECEITAS_PATH;
use crate::models::{ReceitaAck, ReceitaRequest};

#[async_trait(?Send)]
impl ReceitaGateway for ApiClient {
    async fn create_receita(&self, request: &ReceitaRequest) -> ApiResult<ReceitaAck> {
        let resp = Request::post(&self.url(RECEITAS_PATH))
            .json(request)?
            .send()
            .await?;

        let body = expect_created(resp, "receita").await?;
        Ok(parse_ack(&body))
    }
}

/// Keep whatever the backend answered; an empty body becomes `null`.
fn parse_ack(body: &str) -> ReceitaAck {
    if body.trim().is_empty() {
        return ReceitaAck::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| ReceitaAck::String(body.to_string()))
}
