//! Performance Analyzer
//!
//! Aggregates per-concept correctness over a quiz history and classifies
//! concepts as strengths or weaknesses.
//!
//! Thresholds:
//! - weakness: incorrect / total > 0.5
//! - strength: correct / total >= 0.8
//!
//! Since correct + incorrect == total, no concept can satisfy both.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::QuizRecord;

/// Correctness tally of one concept across a history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptPerformance {
    pub concept: String,
    pub correct: u32,
    pub incorrect: u32,
    pub total: u32,
}

impl ConceptPerformance {
    fn new(concept: &str) -> Self {
        Self {
            concept: concept.to_string(),
            ..Self::default()
        }
    }

    pub fn is_weakness(&self) -> bool {
        self.total > 0 && 2 * u64::from(self.incorrect) > u64::from(self.total)
    }

    pub fn is_strength(&self) -> bool {
        self.total > 0 && 5 * u64::from(self.correct) >= 4 * u64::from(self.total)
    }
}

/// Strengths and weaknesses of one learner in one subject
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    /// Sorted by correct ratio, best first
    pub strengths: Vec<String>,
    /// Sorted by incorrect ratio, worst first
    pub weaknesses: Vec<String>,
    /// Tallies in first-seen order
    pub concepts: Vec<ConceptPerformance>,
}

/// Tally correctness per concept.
///
/// Records missing either the concept list or the correctness map are
/// skipped; answer indices beyond the concept list are dropped.
pub fn tally(history: &[QuizRecord]) -> Vec<ConceptPerformance> {
    let mut order: Vec<ConceptPerformance> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in history {
        let (Some(concepts), Some(correct_answers)) =
            (&record.concepts_tested, &record.correct_answers)
        else {
            continue;
        };

        for (&question_idx, &correct) in correct_answers {
            let Some(concept) = concepts.get(question_idx) else {
                continue;
            };

            let slot = *index.entry(concept.clone()).or_insert_with(|| {
                order.push(ConceptPerformance::new(concept));
                order.len() - 1
            });
            let perf = &mut order[slot];
            perf.total += 1;
            if correct {
                perf.correct += 1;
            } else {
                perf.incorrect += 1;
            }
        }
    }

    order
}

/// Classify the concepts of a history into strengths and weaknesses
pub fn analyze(history: &[QuizRecord]) -> PerformanceAnalysis {
    let concepts = tally(history);

    let mut weak: Vec<&ConceptPerformance> = concepts.iter().filter(|p| p.is_weakness()).collect();
    weak.sort_by(|a, b| compare_ratio(b.incorrect, b.total, a.incorrect, a.total));

    let mut strong: Vec<&ConceptPerformance> = concepts.iter().filter(|p| p.is_strength()).collect();
    strong.sort_by(|a, b| compare_ratio(b.correct, b.total, a.correct, a.total));

    PerformanceAnalysis {
        strengths: strong.into_iter().map(|p| p.concept.clone()).collect(),
        weaknesses: weak.into_iter().map(|p| p.concept.clone()).collect(),
        concepts,
    }
}

/// Compare `a_num / a_den` with `b_num / b_den` exactly (denominators > 0)
fn compare_ratio(a_num: u32, a_den: u32, b_num: u32, b_den: u32) -> Ordering {
    (u64::from(a_num) * u64::from(b_den)).cmp(&(u64::from(b_num) * u64::from(a_den)))
}
