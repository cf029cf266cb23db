use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::sync::Mutex;

use crate::errors::{GatewayError, GatewayResult};
use crate::models::request::ChatRequest;
use crate::providers::base::{ModelGateway, SearchProvider};

/// A search provider that returns a fixed context and records its calls
pub struct MockSearch {
    context: String,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockSearch {
    pub fn new<S: Into<String>>(context: S) -> Self {
        Self {
            context: context.into(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Simulates a failed search
    pub fn empty() -> Self {
        Self::new("")
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for MockSearch {
    async fn search(&self, query: &str, system: &str) -> String {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), system.to_string()));
        self.context.clone()
    }
}

/// A gateway that answers with a canned payload or upstream error
pub struct MockGateway {
    response: Result<Value, (u16, String)>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockGateway {
    pub fn ok(payload: Value) -> Self {
        Self {
            response: Ok(payload),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing<S: Into<String>>(status: u16, message: S) -> Self {
        Self {
            response: Err((status, message.into())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelGateway for MockGateway {
    async fn forward(&self, request: &ChatRequest) -> GatewayResult<Value> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.response {
            Ok(payload) => Ok(payload.clone()),
            Err((status, message)) => Err(GatewayError::Upstream {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
