use axum::extract::{Path, State};
use axum::Json;
use pathwise_algo::{
    infer, EventDetails, EventKind, InteractionEvent, InteractionTally, LearningStyleLabel,
    Modality, Preferences, MAX_PREFERENCE, MIN_PREFERENCE,
};
use serde::{Deserialize, Serialize};

use super::{now_millis, validate_learner};
use crate::response::{ok, AppError, SuccessResponse};
use crate::services::resource_kind::infer_modality;
use crate::state::AppState;

/// Questionnaire answers; out-of-range scores are clamped to 1..=5
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesBody {
    visual: i64,
    auditory: i64,
    #[serde(alias = "reading_writing")]
    reading_writing: i64,
    kinesthetic: i64,
}

fn clamp_score(score: i64) -> u8 {
    score.clamp(i64::from(MIN_PREFERENCE), i64::from(MAX_PREFERENCE)) as u8
}

pub async fn set_preferences(
    State(state): State<AppState>,
    Path(learner): Path<String>,
    Json(body): Json<PreferencesBody>,
) -> Result<Json<SuccessResponse<Preferences>>, AppError> {
    validate_learner(&learner)?;
    let preferences = Preferences::new(
        clamp_score(body.visual),
        clamp_score(body.auditory),
        clamp_score(body.reading_writing),
        clamp_score(body.kinesthetic),
    );
    Ok(ok(state.sessions().set_preferences(&learner, preferences)))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionBody {
    kind: String,
    timestamp_ms: Option<i64>,
    concept: Option<String>,
    resource: Option<String>,
    modality: Option<String>,
    subject: Option<String>,
    score: Option<u32>,
    feedback: Option<String>,
}

impl InteractionBody {
    fn into_event(self) -> Result<InteractionEvent, AppError> {
        let kind = EventKind::parse(&self.kind)
            .ok_or_else(|| AppError::validation(format!("unknown interaction kind: {}", self.kind)))?;

        let modality = match self.modality.as_deref() {
            Some(raw) => Some(
                Modality::parse(raw)
                    .ok_or_else(|| AppError::validation(format!("unknown modality: {raw}")))?,
            ),
            None if kind == EventKind::ResourceViewed => {
                self.resource.as_deref().and_then(infer_modality)
            }
            None => None,
        };

        let details = EventDetails {
            concept: self.concept,
            resource: self.resource,
            modality,
            subject: self.subject,
            score: self.score,
            feedback: self.feedback,
        };
        let event = InteractionEvent::new(self.timestamp_ms.unwrap_or_else(now_millis), kind);
        Ok(if details == EventDetails::default() {
            event
        } else {
            event.with_details(details)
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedInteraction {
    event: InteractionEvent,
    total_interactions: usize,
}

pub async fn record_interaction(
    State(state): State<AppState>,
    Path(learner): Path<String>,
    Json(body): Json<InteractionBody>,
) -> Result<Json<SuccessResponse<RecordedInteraction>>, AppError> {
    validate_learner(&learner)?;
    let event = body.into_event()?;
    let total_interactions = state.sessions().record_interaction(&learner, event.clone());
    tracing::debug!(learner = %learner, kind = ?event.kind, total_interactions, "interaction recorded");
    Ok(ok(RecordedInteraction {
        event,
        total_interactions,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleResponse {
    learner: String,
    learning_style: LearningStyleLabel,
    preferences: Option<Preferences>,
    tally: InteractionTally,
}

pub async fn style(
    State(state): State<AppState>,
    Path(learner): Path<String>,
) -> Result<Json<SuccessResponse<StyleResponse>>, AppError> {
    validate_learner(&learner)?;
    let session = state.sessions().snapshot(&learner);
    Ok(ok(StyleResponse {
        learning_style: infer(session.preferences.as_ref(), &session.interactions),
        tally: InteractionTally::from_events(&session.interactions),
        preferences: session.preferences,
        learner,
    }))
}
