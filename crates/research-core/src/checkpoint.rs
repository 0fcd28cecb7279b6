use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::snapshot::StateSnapshot;

/// Pluggable storage for per-thread state snapshots. Last write wins.
#[async_trait]
pub trait Checkpointer: Send + Sync {
    async fn put(&self, thread_id: &str, snapshot: StateSnapshot) -> anyhow::Result<()>;

    async fn get(&self, thread_id: &str) -> anyhow::Result<Option<StateSnapshot>>;
}

pub type DynCheckpointer = Arc<dyn Checkpointer>;

/// In-memory checkpoint store keyed by thread id.
#[derive(Default)]
pub struct InMemoryCheckpointer {
    store: DashMap<String, StateSnapshot>,
}

impl InMemoryCheckpointer {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Checkpointer for InMemoryCheckpointer {
    async fn put(&self, thread_id: &str, snapshot: StateSnapshot) -> anyhow::Result<()> {
        self.store.insert(thread_id.to_string(), snapshot);
        Ok(())
    }

    async fn get(&self, thread_id: &str) -> anyhow::Result<Option<StateSnapshot>> {
        Ok(self.store.get(thread_id).map(|entry| entry.value().clone()))
    }
}
