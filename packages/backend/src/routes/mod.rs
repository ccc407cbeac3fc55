mod export;
mod health;
mod learners;
mod path;
mod qa;
mod quiz;
mod subjects;

use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::Router;

use crate::response::AppError;
use crate::state::AppState;

const MAX_LEARNER_ID_LEN: usize = 64;

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health::router())
        .route("/api/subjects", get(subjects::list))
        .route("/api/subjects/:subject/quiz", get(quiz::questions))
        .route("/api/subjects/:subject/qa", get(qa::ask))
        .route(
            "/api/learners/:learner/preferences",
            put(learners::set_preferences),
        )
        .route(
            "/api/learners/:learner/interactions",
            post(learners::record_interaction),
        )
        .route("/api/learners/:learner/style", get(learners::style))
        .route(
            "/api/learners/:learner/subjects/:subject/quiz",
            post(quiz::submit),
        )
        .route(
            "/api/learners/:learner/subjects/:subject/analysis",
            get(path::analysis),
        )
        .route(
            "/api/learners/:learner/subjects/:subject/path",
            get(path::learning_path),
        )
        .route(
            "/api/learners/:learner/subjects/:subject/alternative",
            get(path::alternative),
        )
        .route(
            "/api/learners/:learner/subjects/:subject/export",
            get(export::export),
        )
        .fallback(fallback_handler)
        .with_state(state)
}

async fn fallback_handler() -> Response {
    AppError::not_found("route not found").into_response()
}

/// Learner ids are opaque but must be short and printable
fn validate_learner(learner: &str) -> Result<(), AppError> {
    let valid = !learner.is_empty()
        && learner.len() <= MAX_LEARNER_ID_LEN
        && learner
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@'));
    if valid {
        Ok(())
    } else {
        Err(AppError::validation(format!("invalid learner id: {learner:?}")))
    }
}

fn require_subject(state: &AppState, subject: &str) -> Result<(), AppError> {
    if state.reference().has_subject(subject) {
        Ok(())
    } else {
        Err(AppError::not_found(format!("unknown subject: {subject}")))
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
