use async_trait::async_trait;
use serde_json::Value;

use crate::errors::GatewayResult;
use crate::models::request::ChatRequest;

/// A search-capable model used only to fetch current context.
///
/// Implementations never fail: any problem is logged and reported as an empty
/// string, which callers treat as "no context available".
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str, system: &str) -> String;
}

/// The conversational model the end user is talking to
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Forward the conversation and return the provider's payload unchanged
    async fn forward(&self, request: &ChatRequest) -> GatewayResult<Value>;
}
