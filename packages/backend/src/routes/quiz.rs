use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::Json;
use pathwise_algo::{EventDetails, EventKind, InteractionEvent};
use serde::{Deserialize, Serialize};

use super::{now_millis, require_subject, validate_learner};
use crate::response::{ok, AppError, SuccessResponse};
use crate::services::quiz_bank::{grade, GradedQuiz};
use crate::state::AppState;

/// A quiz question as served to learners, without its answer
#[derive(Serialize)]
pub struct QuestionView {
    index: usize,
    question: String,
    options: Vec<String>,
    concept: String,
}

pub async fn questions(
    State(state): State<AppState>,
    Path(subject): Path<String>,
) -> Result<Json<SuccessResponse<Vec<QuestionView>>>, AppError> {
    require_subject(&state, &subject)?;
    let quiz = state.quiz_bank().load_quiz(&subject).await?;
    let views: Vec<QuestionView> = quiz
        .into_iter()
        .enumerate()
        .map(|(index, q)| QuestionView {
            index,
            question: q.question,
            options: q.options,
            concept: q.concept,
        })
        .collect();
    Ok(ok(views))
}

#[derive(Debug, Deserialize)]
pub struct SubmitBody {
    /// Question index -> chosen option text
    #[serde(default)]
    answers: BTreeMap<usize, String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    #[serde(flatten)]
    graded: GradedQuiz,
    quizzes_taken: usize,
}

pub async fn submit(
    State(state): State<AppState>,
    Path((learner, subject)): Path<(String, String)>,
    Json(body): Json<SubmitBody>,
) -> Result<Json<SuccessResponse<SubmitResponse>>, AppError> {
    validate_learner(&learner)?;
    require_subject(&state, &subject)?;

    let quiz = state.quiz_bank().load_quiz(&subject).await?;
    if quiz.is_empty() {
        return Err(AppError::not_found(format!("quiz for {subject} has no questions")));
    }

    let graded = grade(&quiz, &body.answers);
    let event = InteractionEvent::new(now_millis(), EventKind::QuizSubmitted).with_details(
        EventDetails {
            subject: Some(subject.clone()),
            score: Some(graded.score),
            ..EventDetails::default()
        },
    );
    let quizzes_taken =
        state
            .sessions()
            .record_quiz(&learner, &subject, graded.record.clone(), event);

    tracing::info!(
        learner = %learner,
        subject = %subject,
        score = graded.score,
        total = graded.total,
        quizzes_taken,
        "quiz graded"
    );
    Ok(ok(SubmitResponse {
        graded,
        quizzes_taken,
    }))
}
