use serde_json::Value;
use std::sync::Arc;

use crate::enricher::ContextEnricher;
use crate::errors::GatewayResult;
use crate::models::request::ChatRequest;
use crate::providers::base::ModelGateway;

/// Enrich the system prompt, then forward the conversation.
///
/// The search call always completes before the primary call starts, since the
/// primary call needs the finished prompt.
pub struct ChatPipeline {
    enricher: ContextEnricher,
    gateway: Arc<dyn ModelGateway>,
}

impl ChatPipeline {
    pub fn new(enricher: ContextEnricher, gateway: Arc<dyn ModelGateway>) -> Self {
        Self { enricher, gateway }
    }

    pub async fn handle(&self, request: ChatRequest) -> GatewayResult<Value> {
        let query = request.last_user_text();
        let system = self
            .enricher
            .enrich(query.as_deref(), &request.system)
            .await;
        tracing::debug!(
            original = request.system.len(),
            enriched = system.len(),
            "system prompt prepared"
        );

        let request = request.with_system(system);
        self.gateway.forward(&request).await
    }
}
