use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use research_api::config::AppConfig;
use research_api::routes::build_router;
use research_api::state::AppState;
use research_core::{AgentInput, ResearchAgent, RunConfig, StateSnapshot};
use serde_json::json;

fn offline_server() -> TestServer {
    let state = AppState::try_new(&AppConfig::default()).expect("state initialization failed");
    TestServer::new(build_router(state)).unwrap()
}

/// Agent whose every call fails, for exercising the error paths.
struct FailingAgent;

#[async_trait]
impl ResearchAgent for FailingAgent {
    async fn invoke(
        &self,
        _input: AgentInput,
        _config: &RunConfig,
    ) -> anyhow::Result<StateSnapshot> {
        anyhow::bail!("model backend unreachable")
    }

    async fn state(&self, _config: &RunConfig) -> anyhow::Result<Option<StateSnapshot>> {
        anyhow::bail!("checkpoint backend unreachable")
    }
}

fn failing_server() -> TestServer {
    let state = AppState::with_agent(Arc::new(FailingAgent));
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn home_and_health_are_static() {
    let server = offline_server();

    let response = server.get("/").await;
    assert_eq!(response.status_code(), 200);
    let body = response.json::<serde_json::Value>();
    assert!(body["messages"].as_str().unwrap().contains("Deep Research"));

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<serde_json::Value>()["status"], "ok");
}

#[tokio::test]
async fn new_conversation_generates_thread_id() {
    let server = offline_server();

    let response = server
        .post("/research")
        .json(&json!({ "user_id": "u-1", "content": "survey rust web frameworks" }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body = response.json::<serde_json::Value>();
    let thread_id = body["thread_id"].as_str().expect("thread id missing");
    assert!(!thread_id.is_empty());
    assert_eq!(body["is_final"], false);

    let messages = body["response_messages"]
        .as_array()
        .expect("messages missing");
    assert!(!messages.is_empty());
    for message in messages {
        assert!(message["type"].is_string());
        assert!(message["content"].is_string());
    }
}

#[tokio::test]
async fn distinct_requests_get_distinct_threads() {
    let server = offline_server();

    let first = server
        .post("/research")
        .json(&json!({ "user_id": "u-1", "content": "topic one" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/research")
        .json(&json!({ "user_id": "u-1", "content": "topic two" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["thread_id"], second["thread_id"]);
}

#[tokio::test]
async fn thread_reuse_yields_continuity_and_final_report() {
    let server = offline_server();

    let opening = server
        .post("/research")
        .json(&json!({ "user_id": "u-1", "content": "survey rust web frameworks" }))
        .await;
    assert_eq!(opening.status_code(), 200);
    let opening = opening.json::<serde_json::Value>();
    assert_eq!(opening["is_final"], false);
    let thread_id = opening["thread_id"].as_str().unwrap().to_string();

    let followup = server
        .post("/research")
        .json(&json!({
            "user_id": "u-1",
            "thread_id": thread_id,
            "content": "focus on axum and actix",
        }))
        .await;
    assert_eq!(followup.status_code(), 200);
    let followup = followup.json::<serde_json::Value>();

    assert_eq!(followup["thread_id"].as_str().unwrap(), thread_id);
    assert_eq!(followup["is_final"], true);

    // The agent saw the opening turn: both human messages are in the thread.
    let contents: Vec<&str> = followup["response_messages"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|message| message["content"].as_str())
        .collect();
    assert!(contents.iter().any(|c| c.contains("survey rust web frameworks")));
    assert!(contents.iter().any(|c| c.contains("focus on axum and actix")));
}

#[tokio::test]
async fn client_supplied_thread_id_is_honored() {
    let server = offline_server();

    let response = server
        .post("/research")
        .json(&json!({
            "user_id": "u-1",
            "thread_id": "my-thread",
            "content": "hello",
        }))
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<serde_json::Value>()["thread_id"], "my-thread");
}

#[tokio::test]
async fn state_lookup_returns_last_snapshot() {
    let server = offline_server();

    let opening = server
        .post("/research")
        .json(&json!({ "user_id": "u-1", "content": "survey rust web frameworks" }))
        .await
        .json::<serde_json::Value>();
    let thread_id = opening["thread_id"].as_str().unwrap().to_string();

    let response = server
        .post("/checkpointer_thread")
        .json(&json!({ "thread_id": thread_id }))
        .await;
    assert_eq!(response.status_code(), 200);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["thread_id"].as_str().unwrap(), thread_id);
    let messages = body["state"]["messages"].as_array().expect("state missing");
    assert_eq!(messages.len(), 2);
}

#[tokio::test]
async fn missing_thread_yields_404() {
    let server = offline_server();

    let response = server
        .post("/checkpointer_thread")
        .json(&json!({ "thread_id": "never-seen" }))
        .await;
    assert_eq!(response.status_code(), 404);
    assert!(response.json::<serde_json::Value>()["error"].is_string());
}

#[tokio::test]
async fn malformed_bodies_never_reach_the_agent() {
    // A failing agent would turn any forwarded call into a 500.
    let server = failing_server();

    let response = server.post("/research").json(&json!({})).await;
    assert_eq!(response.status_code(), 422);

    let response = server
        .post("/research")
        .json(&json!({ "user_id": "u-1" }))
        .await;
    assert_eq!(response.status_code(), 422);

    let response = server.post("/checkpointer_thread").json(&json!({})).await;
    assert_eq!(response.status_code(), 422);
}

#[tokio::test]
async fn agent_failures_collapse_to_coarse_codes() {
    let server = failing_server();

    let response = server
        .post("/research")
        .json(&json!({ "user_id": "u-1", "content": "anything" }))
        .await;
    assert_eq!(response.status_code(), 500);
    assert!(response.json::<serde_json::Value>()["error"].is_string());

    let response = server
        .post("/checkpointer_thread")
        .json(&json!({ "thread_id": "t-1" }))
        .await;
    assert_eq!(response.status_code(), 404);
}
