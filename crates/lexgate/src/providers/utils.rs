use anyhow::Result;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const FALLBACK_ERROR_MESSAGE: &str = "API error";

pub fn build_client(timeout_secs: u64) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(client)
}

/// Pull `error.message` out of a provider error body
pub fn upstream_error_message(body: Option<&Value>) -> String {
    body.and_then(|b| b.pointer("/error/message"))
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .unwrap_or(FALLBACK_ERROR_MESSAGE)
        .to_string()
}

/// Text of the first choice of an OpenAI-style chat completion
pub fn first_choice_text(body: &Value) -> Option<&str> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
}
