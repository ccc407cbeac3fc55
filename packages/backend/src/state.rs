use std::sync::Arc;
use std::time::{Instant, SystemTime};

use parking_lot::Mutex;
use pathwise_algo::{rng, PathRng};

use crate::config::Config;
use crate::services::quiz_bank::QuizBank;
use crate::services::reference::ReferenceData;
use crate::services::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    reference: Arc<ReferenceData>,
    quiz_bank: Arc<QuizBank>,
    sessions: Arc<SessionStore>,
    rng: Arc<Mutex<PathRng>>,
    qa_match_cutoff: f64,
}

impl AppState {
    pub fn new(config: &Config, reference: ReferenceData) -> Self {
        let rng = match config.recommender_seed {
            Some(seed) => {
                tracing::info!(seed, "recommender running with a fixed seed");
                rng::seeded(seed)
            }
            None => rng::from_entropy(),
        };

        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            reference: Arc::new(reference),
            quiz_bank: Arc::new(QuizBank::new(config.quiz_dir.clone())),
            sessions: Arc::new(SessionStore::new()),
            rng: Arc::new(Mutex::new(rng)),
            qa_match_cutoff: config.qa_match_cutoff,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn quiz_bank(&self) -> &QuizBank {
        &self.quiz_bank
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn qa_match_cutoff(&self) -> f64 {
        self.qa_match_cutoff
    }

    /// Run `f` with exclusive access to the shared generator
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut PathRng) -> T) -> T {
        let mut rng = self.rng.lock();
        f(&mut rng)
    }
}
