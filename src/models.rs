use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    /// Speaker label used in the transcript.
    pub fn label(&self) -> &'static str {
        match self {
            MessageRole::User => "You",
            MessageRole::Assistant => "Assistant",
        }
    }
}

/// One turn of the conversation. Never mutated once appended to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// Snapshot of the conversation: the ordered log plus the busy flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationState {
    pub messages: Vec<Message>,
    pub pending: bool,
}

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Raw response body of `POST /api/chat`. The service fills in one of the two
/// fields; anything else it sends along is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponseBody {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What the chat service answered with on a 2xx response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    Response(String),
    Error(String),
}

impl ChatReply {
    /// Text shown as the assistant message. Application-level errors are
    /// displayed exactly like a normal reply.
    pub fn into_content(self) -> String {
        match self {
            ChatReply::Response(text) | ChatReply::Error(text) => text,
        }
    }
}

impl ChatResponseBody {
    /// `response` wins when the service sends both fields; `None` when it
    /// sends neither.
    pub fn into_reply(self) -> Option<ChatReply> {
        match self {
            ChatResponseBody { response: Some(text), .. } => Some(ChatReply::Response(text)),
            ChatResponseBody { error: Some(text), .. } => Some(ChatReply::Error(text)),
            _ => None,
        }
    }
}
