use axum::{Json, extract::State};
use research_core::{AgentInput, ChatMessage, RunConfig};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::error::{ApiResult, AppError};
use crate::state::AppState;

/// One conversational turn. Without a `thread_id` a new thread is started;
/// with one, the agent continues where that thread left off.
#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
    pub user_id: String,
    #[serde(default)]
    pub thread_id: Option<String>,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ResearchResponse {
    pub thread_id: String,
    pub response_messages: Vec<ChatMessage>,
    pub is_final: bool,
}

pub async fn research(
    State(state): State<AppState>,
    Json(request): Json<ResearchRequest>,
) -> ApiResult<Json<ResearchResponse>> {
    let thread_id = request
        .thread_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let config = RunConfig::for_thread(thread_id.clone());

    let input = AgentInput::from_message(ChatMessage::human(request.content));

    let snapshot = state
        .agent()
        .invoke(input, &config)
        .await
        .map_err(|err| {
            error!(thread_id = %thread_id, user_id = %request.user_id, error = %err, "research turn failed");
            AppError::internal(err)
        })?;

    let is_final = snapshot.final_report().is_some();
    let response_messages = snapshot.messages();

    info!(
        thread_id = %thread_id,
        user_id = %request.user_id,
        messages = response_messages.len(),
        is_final,
        "research turn completed"
    );

    Ok(Json(ResearchResponse {
        thread_id,
        response_messages,
        is_final,
    }))
}
