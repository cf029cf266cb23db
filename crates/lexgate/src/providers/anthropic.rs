use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::base::ModelGateway;
use super::configs::AnthropicProviderConfig;
use super::utils::{build_client, upstream_error_message};
use crate::errors::{GatewayError, GatewayResult};
use crate::models::request::ChatRequest;

pub const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Enables PDF document blocks in user content
pub const ANTHROPIC_BETA: &str = "pdfs-2024-09-25";

pub struct AnthropicProvider {
    client: Client,
    config: AnthropicProviderConfig,
}

impl AnthropicProvider {
    pub fn new(config: AnthropicProviderConfig) -> Result<Self> {
        let client = build_client(config.timeout_secs)?;
        Ok(Self { client, config })
    }

    fn payload(&self, request: &ChatRequest) -> Value {
        json!({
            "model": request.model.clone().unwrap_or_else(|| json!(self.config.model)),
            "max_tokens": request
                .max_tokens
                .clone()
                .unwrap_or_else(|| json!(self.config.max_tokens)),
            "system": request.system,
            "messages": request.messages,
        })
    }
}

#[async_trait]
impl ModelGateway for AnthropicProvider {
    async fn forward(&self, request: &ChatRequest) -> GatewayResult<Value> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(GatewayError::MissingApiKey("primary provider"))?;

        let url = format!("{}/v1/messages", self.config.host.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("anthropic-beta", ANTHROPIC_BETA)
            .json(&self.payload(request))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let data = serde_json::from_str::<Value>(&body);

        if !status.is_success() {
            let message = upstream_error_message(data.as_ref().ok());
            tracing::error!(status = status.as_u16(), %message, "primary provider returned an error");
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        data.map_err(|e| GatewayError::InvalidResponse(format!("primary provider sent non-JSON body: {}", e)))
    }
}
