use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/live", get(live))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
    start_time: String,
    subjects: usize,
    learners: usize,
}

#[derive(Serialize)]
struct LivenessResponse {
    status: &'static str,
    uptime: u64,
    version: &'static str,
}

async fn root(State(state): State<AppState>) -> Json<HealthResponse> {
    let started: DateTime<Utc> = state.started_at_system().into();
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
        start_time: started.to_rfc3339(),
        subjects: state.reference().hierarchy.subjects().count(),
        learners: state.sessions().learner_count(),
    })
}

async fn live(State(state): State<AppState>) -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "healthy",
        uptime: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
