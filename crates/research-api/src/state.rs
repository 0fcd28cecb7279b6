use std::sync::Arc;

use research_core::{DynAgent, InMemoryCheckpointer, StubAgent};

use crate::config::AppConfig;

/// Shared handler state: the agent behind its trait seam.
#[derive(Clone)]
pub struct AppState {
    agent: DynAgent,
}

impl AppState {
    /// Offline default: a stub agent over an in-memory checkpoint store.
    /// Deployments with a real compiled agent go through [`Self::with_agent`].
    pub fn try_new(_config: &AppConfig) -> anyhow::Result<Self> {
        let checkpointer = Arc::new(InMemoryCheckpointer::new());
        Ok(Self::with_agent(Arc::new(StubAgent::new(checkpointer))))
    }

    pub fn with_agent(agent: DynAgent) -> Self {
        Self { agent }
    }

    pub fn agent(&self) -> DynAgent {
        self.agent.clone()
    }
}
