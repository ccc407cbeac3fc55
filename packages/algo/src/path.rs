//! Learning Path Builder
//!
//! Composes analysis, recommendation and resource resolution into a short
//! ordered path:
//!
//! - no history: the first foundational concepts, in declared order
//! - otherwise: up to two weaknesses, then one new concept, then strengths
//!
//! A path never exceeds [`MAX_PATH_LEN`] items and never repeats a concept.

use std::collections::HashSet;

use rand::Rng;

use crate::catalog::ResourceCatalog;
use crate::hierarchy::ConceptHierarchy;
use crate::performance::{analyze, PerformanceAnalysis};
use crate::recommender::{tested_concepts, ConceptRecommender};
use crate::types::{PathItem, PathItemKind, QuizRecord, MAX_PATH_LEN, MAX_WEAKNESSES_IN_PATH};

pub struct PathBuilder<'a> {
    hierarchy: &'a ConceptHierarchy,
    catalog: &'a ResourceCatalog,
}

impl<'a> PathBuilder<'a> {
    pub fn new(hierarchy: &'a ConceptHierarchy, catalog: &'a ResourceCatalog) -> Self {
        Self { hierarchy, catalog }
    }

    /// Build a path for `subject`, attaching resources suited to `style`
    pub fn build<R: Rng + ?Sized>(
        &self,
        subject: &str,
        history: &[QuizRecord],
        style: &str,
        rng: &mut R,
    ) -> Vec<PathItem> {
        if history.is_empty() {
            return self
                .hierarchy
                .foundational(subject)
                .iter()
                .take(MAX_PATH_LEN)
                .map(|concept| self.item(concept, PathItemKind::Foundational, style, rng))
                .collect();
        }

        let analysis = analyze(history);
        self.build_from_analysis(subject, history, &analysis, style, rng)
    }

    fn build_from_analysis<R: Rng + ?Sized>(
        &self,
        subject: &str,
        history: &[QuizRecord],
        analysis: &PerformanceAnalysis,
        style: &str,
        rng: &mut R,
    ) -> Vec<PathItem> {
        let mut path = PathAccumulator::default();

        for weak in analysis.weaknesses.iter().take(MAX_WEAKNESSES_IN_PATH) {
            path.push(weak, PathItemKind::Weakness);
        }

        let next = ConceptRecommender::new(self.hierarchy).next_concepts(
            subject,
            &analysis.strengths,
            &analysis.weaknesses,
            || tested_concepts(history),
            rng,
        );
        for concept in &next {
            if path.is_full() {
                break;
            }
            path.push(concept, PathItemKind::New);
        }

        for strong in &analysis.strengths {
            if path.is_full() {
                break;
            }
            path.push(strong, PathItemKind::Strength);
        }

        path.entries
            .into_iter()
            .take(MAX_PATH_LEN)
            .map(|(concept, kind)| self.item(&concept, kind, style, rng))
            .collect()
    }

    fn item<R: Rng + ?Sized>(&self, concept: &str, kind: PathItemKind, style: &str, rng: &mut R) -> PathItem {
        PathItem {
            concept: concept.to_string(),
            kind,
            resources: self.catalog.resources_for(concept, style, rng),
        }
    }
}

/// Ordered concept list that ignores repeats
#[derive(Default)]
struct PathAccumulator {
    entries: Vec<(String, PathItemKind)>,
    seen: HashSet<String>,
}

impl PathAccumulator {
    fn push(&mut self, concept: &str, kind: PathItemKind) {
        if self.seen.insert(concept.to_string()) {
            self.entries.push((concept.to_string(), kind));
        }
    }

    fn is_full(&self) -> bool {
        self.entries.len() >= MAX_PATH_LEN
    }
}
