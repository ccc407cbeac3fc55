//! Data Sanitization
//!
//! Input clean-up applied before the recommendation rules run.
//!
//! Functions:
//! - Preference score clamping

use crate::types::{Preferences, MAX_PREFERENCE, MIN_PREFERENCE};

/// 将单个偏好分数限制在 1..=5
pub fn clamp_preference(score: u8) -> u8 {
    score.clamp(MIN_PREFERENCE, MAX_PREFERENCE)
}

/// Clamp every score of a preference vector into the questionnaire range
pub fn sanitize_preferences(prefs: Preferences) -> Preferences {
    Preferences {
        visual: clamp_preference(prefs.visual),
        auditory: clamp_preference(prefs.auditory),
        reading_writing: clamp_preference(prefs.reading_writing),
        kinesthetic: clamp_preference(prefs.kinesthetic),
    }
}
