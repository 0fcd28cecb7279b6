mod health;
mod research;
mod thread;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home))
        .route("/health", get(health::health))
        .route("/research", post(research::research))
        .route("/checkpointer_thread", post(thread::checkpointer_thread))
        .with_state(state)
}
