use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

use super::{require_subject, validate_learner};
use crate::response::AppError;
use crate::services::export::{content_disposition, ExportDocument};
use crate::services::recommendation;
use crate::state::AppState;

pub async fn export(
    State(state): State<AppState>,
    Path((learner, subject)): Path<(String, String)>,
) -> Result<Response, AppError> {
    validate_learner(&learner)?;
    require_subject(&state, &subject)?;

    let snapshot = state.sessions().subject_snapshot(&learner, &subject);
    let learning_style = recommendation::learning_style(&snapshot);
    let analysis = recommendation::performance(&snapshot);
    let style = learning_style.to_string();
    let path = state.with_rng(|rng| {
        recommendation::learning_path(state.reference(), &subject, &snapshot, &style, rng)
    });

    let disposition = content_disposition(&learner);
    let document = ExportDocument {
        learner,
        subject,
        exported_at: Utc::now(),
        preferences: snapshot.preferences,
        quiz_history: snapshot.history,
        interactions: snapshot.interactions,
        learning_style,
        strengths: analysis.strengths,
        weaknesses: analysis.weaknesses,
        path,
    };

    Ok(([(header::CONTENT_DISPOSITION, disposition)], Json(document)).into_response())
}
