use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    body,
    extract::{Request, State},
    http::Method,
    routing::any,
    Json, Router,
};
use lexgate::models::request::ChatRequest;
use serde_json::Value;

/// Large enough for base64-encoded PDF attachments
const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

// Every method reaches the handler so non-POST requests get the JSON 405
async fn handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<Value>, ApiError> {
    if request.method() != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    let bytes = body::to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| ApiError::Internal(format!("failed to read request body: {}", e)))?;
    let chat_request = ChatRequest::from_slice(&bytes)?;

    tracing::info!(
        messages = chat_request.messages.as_array().map_or(0, Vec::len),
        model = chat_request
            .model
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .unwrap_or("default"),
        "chat request received"
    );

    let payload = state.pipeline.handle(chat_request).await?;
    Ok(Json(payload))
}

// Configure routes for this module
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", any(handler))
        .with_state(state)
}
