use std::sync::Arc;

use async_trait::async_trait;

use crate::checkpoint::DynCheckpointer;
use crate::message::ChatMessage;
use crate::snapshot::StateSnapshot;

/// One inbound conversational turn.
#[derive(Debug, Clone, Default)]
pub struct AgentInput {
    pub messages: Vec<ChatMessage>,
}

impl AgentInput {
    pub fn from_message(message: ChatMessage) -> Self {
        Self {
            messages: vec![message],
        }
    }
}

/// Routing context for a run. The thread id selects which conversation the
/// agent loads and persists.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub thread_id: String,
}

impl RunConfig {
    pub fn for_thread(thread_id: impl Into<String>) -> Self {
        Self {
            thread_id: thread_id.into(),
        }
    }
}

/// The compiled research agent graph. Implementations own their planning,
/// tool use, and report generation; the HTTP layer only shapes payloads.
#[async_trait]
pub trait ResearchAgent: Send + Sync {
    /// Runs one conversational turn against the thread named in `config`,
    /// returning the thread's state values after the turn.
    async fn invoke(&self, input: AgentInput, config: &RunConfig) -> anyhow::Result<StateSnapshot>;

    /// The last persisted snapshot for the thread, `None` when the thread
    /// has never been seen.
    async fn state(&self, config: &RunConfig) -> anyhow::Result<Option<StateSnapshot>>;
}

pub type DynAgent = Arc<dyn ResearchAgent>;

/// Deterministic agent for tests and offline runs.
///
/// Mirrors the conversational contract of the real researcher: the first
/// human turn on a thread earns a clarifying scope question, any later turn
/// earns an acknowledgement plus a final report built from the thread's
/// opening request.
pub struct StubAgent {
    checkpointer: DynCheckpointer,
}

impl StubAgent {
    pub fn new(checkpointer: DynCheckpointer) -> Self {
        Self { checkpointer }
    }
}

#[async_trait]
impl ResearchAgent for StubAgent {
    async fn invoke(&self, input: AgentInput, config: &RunConfig) -> anyhow::Result<StateSnapshot> {
        let mut state = self
            .checkpointer
            .get(&config.thread_id)
            .await?
            .unwrap_or_default();

        let prior_human_turns = state
            .messages()
            .iter()
            .filter(|message| message.role == "human")
            .count();

        for message in input.messages {
            state.push_message(message);
        }

        if prior_human_turns == 0 {
            state.push_message(ChatMessage::ai(
                "Before I start: what scope and depth should this research cover?",
            ));
        } else {
            let topic = state
                .messages()
                .into_iter()
                .find(|message| message.role == "human")
                .map(|message| message.content)
                .unwrap_or_default();
            state.push_message(ChatMessage::ai("Research complete; report attached."));
            state.set_final_report(format!("# Research Report\n\nTopic: {topic}\n"));
        }

        self.checkpointer
            .put(&config.thread_id, state.clone())
            .await?;

        Ok(state)
    }

    async fn state(&self, config: &RunConfig) -> anyhow::Result<Option<StateSnapshot>> {
        self.checkpointer.get(&config.thread_id).await
    }
}
