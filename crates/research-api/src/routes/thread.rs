use axum::{Json, extract::State};
use research_core::RunConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{ApiResult, AppError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ThreadStateRequest {
    pub thread_id: String,
}

#[derive(Debug, Serialize)]
pub struct ThreadStateResponse {
    pub thread_id: String,
    pub state: Value,
}

/// Debugging/monitoring lookup of a thread's last persisted snapshot.
/// Absence and retrieval errors are indistinguishable to the caller.
pub async fn checkpointer_thread(
    State(state): State<AppState>,
    Json(request): Json<ThreadStateRequest>,
) -> ApiResult<Json<ThreadStateResponse>> {
    let config = RunConfig::for_thread(request.thread_id.clone());

    let snapshot = match state.agent().state(&config).await {
        Ok(Some(snapshot)) if !snapshot.is_empty() => snapshot,
        Ok(_) => {
            return Err(AppError::not_found("Thread not found or state is empty."));
        }
        Err(err) => {
            warn!(thread_id = %request.thread_id, error = %err, "state lookup failed");
            return Err(AppError::not_found(
                "Thread not found or error retrieving state.",
            ));
        }
    };

    Ok(Json(ThreadStateResponse {
        thread_id: request.thread_id,
        state: snapshot.into_value(),
    }))
}
