//! Agent and checkpoint seams for the deep-research HTTP service.
//!
//! The HTTP layer is glue: it resolves thread ids and shapes JSON. Everything
//! that actually reasons lives behind the [`ResearchAgent`] trait, and thread
//! state lives behind [`Checkpointer`]. A deterministic [`StubAgent`] covers
//! tests and offline runs.

mod agent;
mod checkpoint;
mod message;
mod snapshot;

pub use agent::{AgentInput, DynAgent, ResearchAgent, RunConfig, StubAgent};
pub use checkpoint::{Checkpointer, DynCheckpointer, InMemoryCheckpointer};
pub use message::{ChatMessage, SnapshotMessage};
pub use snapshot::StateSnapshot;
