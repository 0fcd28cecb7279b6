use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::message::{ChatMessage, SnapshotMessage};

/// The persisted state of a thread: an untyped bag of values keyed by the
/// agent's internal schema.
///
/// The service treats the bag as pass-through and only peeks at two
/// well-known keys, `messages` and `final_report`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateSnapshot(pub Map<String, Value>);

impl StateSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The final report text, if the agent has produced one. Empty and
    /// non-string values count as absent.
    pub fn final_report(&self) -> Option<&str> {
        self.0
            .get("final_report")
            .and_then(Value::as_str)
            .filter(|report| !report.is_empty())
    }

    /// The thread's conversation so far, tolerating both structured message
    /// objects and bare strings. Entries of any other shape are skipped.
    pub fn messages(&self) -> Vec<ChatMessage> {
        let Some(entries) = self.0.get("messages").and_then(Value::as_array) else {
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(|entry| {
                serde_json::from_value::<SnapshotMessage>(entry.clone())
                    .ok()
                    .map(SnapshotMessage::into_chat)
            })
            .collect()
    }

    /// Appends a message to the `messages` array, creating it when missing.
    pub fn push_message(&mut self, message: ChatMessage) {
        let entry = self
            .0
            .entry("messages".to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(messages) = entry {
            messages.push(serde_json::json!({
                "type": message.role,
                "content": message.content,
            }));
        }
    }

    pub fn set_final_report(&mut self, report: impl Into<String>) {
        self.0
            .insert("final_report".to_string(), Value::String(report.into()));
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}
