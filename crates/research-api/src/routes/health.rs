use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HomeResponse {
    messages: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        messages: "Welcome to the Deep Research endpoint.",
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
