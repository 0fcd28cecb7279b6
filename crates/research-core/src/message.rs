use serde::{Deserialize, Serialize};

/// A role-tagged chat message as exchanged with the agent.
///
/// Roles are opaque strings owned by the agent's own schema; the service
/// only ever mints `human` (inbound turns) and `ai` (attributed replies).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(rename = "type")]
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn human(content: impl Into<String>) -> Self {
        Self::new("human", content)
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self::new("ai", content)
    }
}

/// A message entry as found inside a state snapshot.
///
/// Agents persist either structured `{type, content}` objects or bare
/// strings; bare strings are attributed to the agent.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SnapshotMessage {
    Structured(ChatMessage),
    Text(String),
}

impl SnapshotMessage {
    pub fn into_chat(self) -> ChatMessage {
        match self {
            SnapshotMessage::Structured(message) => message,
            SnapshotMessage::Text(content) => ChatMessage::ai(content),
        }
    }
}
