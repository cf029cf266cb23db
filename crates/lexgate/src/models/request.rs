use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::message::Message;
use crate::errors::RequestError;

/// Body of an inbound chat request.
///
/// Only the system prompt is interpreted. `messages`, `model` and `max_tokens` are
/// relayed to the primary provider exactly as received, so shape problems are
/// reported by the provider rather than by this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub messages: Value,
    pub system: String,
    pub model: Option<Value>,
    pub max_tokens: Option<Value>,
}

impl ChatRequest {
    pub fn new<S: Into<String>>(system: S, messages: Vec<Message>) -> Self {
        Self {
            messages: json!(messages),
            system: system.into(),
            model: None,
            max_tokens: None,
        }
    }

    /// Parse a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, RequestError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(value)
    }

    /// A field counts as missing when it is absent or falsy (`null`, `false`, `0`,
    /// `""`). An empty `messages` list is missing as well.
    pub fn from_value(value: Value) -> Result<Self, RequestError> {
        let Value::Object(mut fields) = value else {
            return Err(RequestError::MissingFields);
        };

        let messages = take_present(&mut fields, "messages");
        let system = take_present(&mut fields, "system");
        let (Some(messages), Some(system)) = (messages, system) else {
            return Err(RequestError::MissingFields);
        };

        let system = match system {
            Value::String(text) => text,
            other => other.to_string(),
        };

        Ok(Self {
            messages,
            system,
            // Falsy overrides count as unspecified so the gateway defaults apply
            model: take_present(&mut fields, "model"),
            max_tokens: take_present(&mut fields, "max_tokens"),
        })
    }

    /// Text of the most recent user message.
    ///
    /// Absent when there is no user message, or when the last one cannot be read
    /// as a message with text content.
    pub fn last_user_text(&self) -> Option<String> {
        let raw = self
            .messages
            .as_array()?
            .iter()
            .rev()
            .find(|message| message.get("role").and_then(Value::as_str) == Some("user"))?;

        let message = Message::deserialize(raw).ok()?;
        message.content.first_text().map(str::to_string)
    }

    pub fn with_system<S: Into<String>>(mut self, system: S) -> Self {
        self.system = system.into();
        self
    }
}

fn take_present(fields: &mut Map<String, Value>, key: &str) -> Option<Value> {
    fields.remove(key).filter(is_present)
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}
