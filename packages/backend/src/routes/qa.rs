use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use super::require_subject;
use crate::response::{ok, AppError, SuccessResponse};
use crate::services::qa::{find_answer, QaAnswer, QA_FILE_MISSING};
use crate::services::quiz_bank::QuizBankError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskQuery {
    #[serde(default)]
    q: String,
}

pub async fn ask(
    State(state): State<AppState>,
    Path(subject): Path<String>,
    Query(query): Query<AskQuery>,
) -> Result<Json<SuccessResponse<QaAnswer>>, AppError> {
    require_subject(&state, &subject)?;
    if query.q.trim().is_empty() {
        return Err(AppError::validation("query parameter `q` is required"));
    }

    let entries = match state.quiz_bank().load_qa(&subject).await {
        Ok(entries) => entries,
        Err(QuizBankError::NotFound { .. }) => return Ok(ok(QaAnswer::not_found(QA_FILE_MISSING))),
        Err(err) => return Err(err.into()),
    };

    let answer = find_answer(&entries, &query.q, state.qa_match_cutoff());
    tracing::debug!(subject = %subject, found = answer.found, "qa lookup");
    Ok(ok(answer))
}
