//! HTTP endpoint for the conversational deep-research agent.
//!
//! Three concerns live here and nothing more: thread identity, JSON payload
//! shaping, and state-snapshot lookup. The agent itself sits behind
//! `research_core::ResearchAgent`.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;
