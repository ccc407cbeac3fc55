//! In-memory learner sessions.
//!
//! Each learner gets its own mutex so appends for one learner are applied
//! one at a time while different learners never contend. Recommendation
//! code only ever sees cloned snapshots.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use pathwise_algo::sanitize::sanitize_preferences;
use pathwise_algo::{InteractionEvent, Preferences, QuizRecord};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerSession {
    pub preferences: Option<Preferences>,
    pub interactions: Vec<InteractionEvent>,
    /// Quiz history per subject, oldest first
    pub histories: BTreeMap<String, Vec<QuizRecord>>,
}

impl LearnerSession {
    pub fn history(&self, subject: &str) -> &[QuizRecord] {
        self.histories.get(subject).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Read-only copy of what the recommendation core needs for one subject
#[derive(Debug, Clone, Default)]
pub struct SubjectSnapshot {
    pub preferences: Option<Preferences>,
    pub interactions: Vec<InteractionEvent>,
    pub history: Vec<QuizRecord>,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    learners: RwLock<HashMap<String, Arc<Mutex<LearnerSession>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&self, learner: &str) -> Arc<Mutex<LearnerSession>> {
        if let Some(existing) = self.learners.read().get(learner) {
            return Arc::clone(existing);
        }
        let mut learners = self.learners.write();
        Arc::clone(learners.entry(learner.to_string()).or_default())
    }

    fn existing(&self, learner: &str) -> Option<Arc<Mutex<LearnerSession>>> {
        self.learners.read().get(learner).cloned()
    }

    pub fn learner_count(&self) -> usize {
        self.learners.read().len()
    }

    pub fn set_preferences(&self, learner: &str, preferences: Preferences) -> Preferences {
        let preferences = sanitize_preferences(preferences);
        self.handle(learner).lock().preferences = Some(preferences);
        tracing::debug!(learner, ?preferences, "preferences updated");
        preferences
    }

    /// Append an event; returns the new log length
    pub fn record_interaction(&self, learner: &str, event: InteractionEvent) -> usize {
        let handle = self.handle(learner);
        let mut session = handle.lock();
        session.interactions.push(event);
        session.interactions.len()
    }

    /// Append a graded quiz and its `quiz_submitted` event atomically;
    /// returns the subject's history length
    pub fn record_quiz(
        &self,
        learner: &str,
        subject: &str,
        record: QuizRecord,
        event: InteractionEvent,
    ) -> usize {
        let handle = self.handle(learner);
        let mut session = handle.lock();
        let history = session.histories.entry(subject.to_string()).or_default();
        history.push(record);
        let len = history.len();
        session.interactions.push(event);
        len
    }

    /// Full copy of a learner's state; unknown learners get an empty session
    pub fn snapshot(&self, learner: &str) -> LearnerSession {
        self.existing(learner)
            .map(|handle| handle.lock().clone())
            .unwrap_or_default()
    }

    pub fn subject_snapshot(&self, learner: &str, subject: &str) -> SubjectSnapshot {
        let Some(handle) = self.existing(learner) else {
            return SubjectSnapshot::default();
        };
        let session = handle.lock();
        SubjectSnapshot {
            preferences: session.preferences,
            interactions: session.interactions.clone(),
            history: session.history(subject).to_vec(),
        }
    }
}
