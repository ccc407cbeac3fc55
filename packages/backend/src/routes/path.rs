use axum::extract::{Path, Query, State};
use axum::Json;
use pathwise_algo::{PathItem, PerformanceAnalysis};
use serde::{Deserialize, Serialize};

use super::{require_subject, validate_learner};
use crate::response::{ok, AppError, SuccessResponse};
use crate::services::recommendation;
use crate::state::AppState;

fn check(state: &AppState, learner: &str, subject: &str) -> Result<(), AppError> {
    validate_learner(learner)?;
    require_subject(state, subject)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    subject: String,
    quizzes_taken: usize,
    #[serde(flatten)]
    analysis: PerformanceAnalysis,
}

pub async fn analysis(
    State(state): State<AppState>,
    Path((learner, subject)): Path<(String, String)>,
) -> Result<Json<SuccessResponse<AnalysisResponse>>, AppError> {
    check(&state, &learner, &subject)?;
    let snapshot = state.sessions().subject_snapshot(&learner, &subject);
    Ok(ok(AnalysisResponse {
        quizzes_taken: snapshot.history.len(),
        analysis: recommendation::performance(&snapshot),
        subject,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PathQuery {
    style: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResponse {
    subject: String,
    learning_style: String,
    /// Set when the hierarchy offers nothing to recommend
    exhausted: bool,
    path: Vec<PathItem>,
}

pub async fn learning_path(
    State(state): State<AppState>,
    Path((learner, subject)): Path<(String, String)>,
    Query(query): Query<PathQuery>,
) -> Result<Json<SuccessResponse<PathResponse>>, AppError> {
    check(&state, &learner, &subject)?;
    let snapshot = state.sessions().subject_snapshot(&learner, &subject);

    // An explicit style overrides the inferred one, even an unrecognized string.
    let learning_style = query
        .style
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| recommendation::learning_style(&snapshot).to_string());

    let path = state.with_rng(|rng| {
        recommendation::learning_path(state.reference(), &subject, &snapshot, &learning_style, rng)
    });
    Ok(ok(PathResponse {
        subject,
        learning_style,
        exhausted: path.is_empty(),
        path,
    }))
}

#[derive(Debug, Deserialize)]
pub struct AlternativeQuery {
    #[serde(default)]
    rejected: String,
}

#[derive(Serialize)]
pub struct AlternativeResponse {
    rejected: String,
    alternative: Option<String>,
}

pub async fn alternative(
    State(state): State<AppState>,
    Path((learner, subject)): Path<(String, String)>,
    Query(query): Query<AlternativeQuery>,
) -> Result<Json<SuccessResponse<AlternativeResponse>>, AppError> {
    check(&state, &learner, &subject)?;
    if query.rejected.trim().is_empty() {
        return Err(AppError::validation("query parameter `rejected` is required"));
    }

    let snapshot = state.sessions().subject_snapshot(&learner, &subject);
    let alternative = state.with_rng(|rng| {
        recommendation::alternative(state.reference(), &subject, &query.rejected, &snapshot, rng)
    });
    Ok(ok(AlternativeResponse {
        rejected: query.rejected,
        alternative,
    }))
}

