use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(rename = "type")]
    pub kind: TextKind,
    pub text: String,
    /// Fields such as `cache_control` that ride along with the text
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// A single block of structured message content
pub enum ContentBlock {
    Text(TextBlock),
    /// Documents, images and anything else, relayed untouched
    Other(Value),
}

impl ContentBlock {
    pub fn text<S: Into<String>>(text: S) -> Self {
        ContentBlock::Text(TextBlock {
            kind: TextKind::Text,
            text: text.into(),
            extra: Map::new(),
        })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(block) => Some(&block.text),
            ContentBlock::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

impl MessageContent {
    /// The plain string, or the first text block of a block sequence
    pub fn first_text(&self) -> Option<&str> {
        match self {
            MessageContent::Text(text) => Some(text),
            MessageContent::Blocks(blocks) => blocks.iter().find_map(ContentBlock::as_text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: MessageContent,
}

impl Message {
    pub fn new<S: Into<String>>(role: S, content: MessageContent) -> Self {
        Message {
            role: role.into(),
            content,
        }
    }

    pub fn user() -> MessageBuilder {
        MessageBuilder { role: "user" }
    }

    pub fn assistant() -> MessageBuilder {
        MessageBuilder { role: "assistant" }
    }

    pub fn is_user(&self) -> bool {
        self.role == "user"
    }
}

/// Shorthand for building messages in code and tests
pub struct MessageBuilder {
    role: &'static str,
}

impl MessageBuilder {
    pub fn with_text<S: Into<String>>(self, text: S) -> Message {
        Message::new(self.role, MessageContent::Text(text.into()))
    }

    pub fn with_blocks(self, blocks: Vec<ContentBlock>) -> Message {
        Message::new(self.role, MessageContent::Blocks(blocks))
    }
}
