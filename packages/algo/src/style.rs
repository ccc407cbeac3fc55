//! Learning Style Inference
//!
//! Combines observed resource usage with the self-reported questionnaire.
//! Rules are evaluated in priority order, first match wins:
//!
//! 1. no events -> `Mixed`
//! 2. auditory views dominate and text-to-speech used more than twice -> `Auditory-Inclined`
//! 3. visual views dominate and visual preference > 3 -> `Visual-Inclined`
//! 4. interactive views dominate and kinesthetic preference > 3 -> `Kinesthetic-Inclined`
//! 5. questionnaire answered and its top score > 4 -> `Primarily <channel>`
//! 6. otherwise -> `Mixed`

use serde::{Deserialize, Serialize};

use crate::sanitize::sanitize_preferences;
use crate::types::{EventKind, InteractionEvent, LearningStyleLabel, Modality, Preferences};

/// TTS invocations required before auditory dominance counts
const TTS_USAGE_THRESHOLD: u32 = 2;

/// Preference score a dominant view count must be backed by
const VIEW_PREFERENCE_THRESHOLD: u8 = 3;

/// Top questionnaire score needed for a `Primarily ...` label
const PRIMARY_PREFERENCE_THRESHOLD: u8 = 4;

/// Counts extracted from an interaction log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionTally {
    pub displayed: u32,
    pub answered: u32,
    pub tts_usage: u32,
    pub visual_views: u32,
    pub auditory_views: u32,
    pub interactive_views: u32,
}

impl InteractionTally {
    pub fn from_events(events: &[InteractionEvent]) -> Self {
        let mut tally = Self::default();
        for event in events {
            match event.kind {
                EventKind::Displayed => tally.displayed += 1,
                EventKind::Answered => tally.answered += 1,
                EventKind::TtsUsed => tally.tts_usage += 1,
                EventKind::ResourceViewed => match event.viewed_modality() {
                    Some(Modality::Visual) => tally.visual_views += 1,
                    Some(Modality::Auditory) => tally.auditory_views += 1,
                    Some(Modality::Interactive) => tally.interactive_views += 1,
                    Some(Modality::ReadingWriting) | None => {}
                },
                EventKind::QuizSubmitted | EventKind::PathFeedback | EventKind::PathDifficulty => {}
            }
        }
        tally
    }

    fn auditory_dominates(&self) -> bool {
        self.auditory_views > self.visual_views && self.auditory_views > self.interactive_views
    }

    fn visual_dominates(&self) -> bool {
        self.visual_views > self.auditory_views && self.visual_views > self.interactive_views
    }

    fn interactive_dominates(&self) -> bool {
        self.interactive_views > self.auditory_views && self.interactive_views > self.visual_views
    }
}

/// Infer a learning-style label. Pure function of its inputs.
pub fn infer(preferences: Option<&Preferences>, events: &[InteractionEvent]) -> LearningStyleLabel {
    if events.is_empty() {
        return LearningStyleLabel::Mixed;
    }

    let tally = InteractionTally::from_events(events);
    let reported = preferences.copied().map(sanitize_preferences);
    let effective = reported.unwrap_or_default();

    if tally.auditory_dominates() && tally.tts_usage > TTS_USAGE_THRESHOLD {
        return LearningStyleLabel::AuditoryInclined;
    }
    if tally.visual_dominates() && effective.visual > VIEW_PREFERENCE_THRESHOLD {
        return LearningStyleLabel::VisualInclined;
    }
    if tally.interactive_dominates() && effective.kinesthetic > VIEW_PREFERENCE_THRESHOLD {
        return LearningStyleLabel::KinestheticInclined;
    }

    if let Some(prefs) = reported {
        let (channel, score) = prefs.top_channel();
        if score > PRIMARY_PREFERENCE_THRESHOLD {
            return LearningStyleLabel::Primarily(channel);
        }
    }

    LearningStyleLabel::Mixed
}
