//! Concept Recommender
//!
//! Walks the concept hierarchy to suggest what to study next, or what to
//! study instead of a rejected suggestion. Choices among qualifying
//! candidates are uniform random draws from the supplied generator, so
//! callers should only rely on membership in the candidate set.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::hierarchy::ConceptHierarchy;
use crate::performance::analyze;
use crate::types::QuizRecord;

/// Concepts appearing in any record of a history
pub fn tested_concepts(history: &[QuizRecord]) -> HashSet<String> {
    history
        .iter()
        .flat_map(|record| record.tested_concepts().iter().cloned())
        .collect()
}

/// Hierarchy-driven concept suggestions for one subject at a time
#[derive(Debug, Clone, Copy)]
pub struct ConceptRecommender<'a> {
    hierarchy: &'a ConceptHierarchy,
}

impl<'a> ConceptRecommender<'a> {
    pub fn new(hierarchy: &'a ConceptHierarchy) -> Self {
        Self { hierarchy }
    }

    /// Suggest at most one concept to learn next.
    ///
    /// Stages, first hit wins:
    /// 1. for each strength in order, an unclassified concept of a level
    ///    following one that holds the strength
    /// 2. if any weaknesses exist, an unclassified foundational concept
    /// 3. any concept of the subject never tested (`seen` is only called here)
    pub fn next_concepts<R, F>(
        &self,
        subject: &str,
        strengths: &[String],
        weaknesses: &[String],
        seen: F,
        rng: &mut R,
    ) -> Vec<String>
    where
        R: Rng + ?Sized,
        F: FnOnce() -> HashSet<String>,
    {
        let classified = |c: &str| {
            strengths.iter().any(|s| s == c) || weaknesses.iter().any(|w| w == c)
        };

        for strong in strengths {
            for next_level in self.hierarchy.next_levels_after(subject, strong) {
                let candidates: Vec<&str> = next_level
                    .concepts
                    .iter()
                    .map(String::as_str)
                    .filter(|c| !classified(c))
                    .collect();
                if let Some(choice) = candidates.choose(rng) {
                    return vec![choice.to_string()];
                }
            }
        }

        if !weaknesses.is_empty() {
            let candidates: Vec<&str> = self
                .hierarchy
                .foundational(subject)
                .iter()
                .map(String::as_str)
                .filter(|c| !classified(c))
                .collect();
            if let Some(choice) = candidates.choose(rng) {
                return vec![choice.to_string()];
            }
        }

        let seen = seen();
        let unseen: Vec<&str> = self
            .hierarchy
            .all_concepts(subject)
            .into_iter()
            .filter(|c| !seen.contains(*c))
            .collect();

        unseen
            .choose(rng)
            .map(|c| vec![c.to_string()])
            .unwrap_or_default()
    }

    /// Suggest a replacement for a concept the learner rejected.
    ///
    /// Tries a sibling from any level holding `rejected`, then (when the learner has weaknesses) a
    /// foundational concept, then any never-tested concept. Strengths and
    /// weaknesses are derived from `history`. `None` when nothing is left.
    pub fn alternative_concept<R: Rng + ?Sized>(
        &self,
        subject: &str,
        rejected: &str,
        history: &[QuizRecord],
        rng: &mut R,
    ) -> Option<String> {
        let analysis = analyze(history);
        let excluded = |c: &str| {
            c == rejected
                || analysis.strengths.iter().any(|s| s == c)
                || analysis.weaknesses.iter().any(|w| w == c)
        };

        for level in self.hierarchy.levels_of(subject, rejected) {
            let siblings: Vec<&str> = level
                .concepts
                .iter()
                .map(String::as_str)
                .filter(|c| !excluded(c))
                .collect();
            if let Some(choice) = siblings.choose(rng) {
                return Some(choice.to_string());
            }
        }

        if !analysis.weaknesses.is_empty() {
            let foundational: Vec<&str> = self
                .hierarchy
                .foundational(subject)
                .iter()
                .map(String::as_str)
                .filter(|c| !excluded(c))
                .collect();
            if let Some(choice) = foundational.choose(rng) {
                return Some(choice.to_string());
            }
        }

        let tested = tested_concepts(history);
        let unseen: Vec<&str> = self
            .hierarchy
            .all_concepts(subject)
            .into_iter()
            .filter(|c| *c != rejected && !tested.contains(*c))
            .collect();

        unseen.choose(rng).map(|c| c.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use std::collections::BTreeMap;

    fn physics() -> ConceptHierarchy {
        ConceptHierarchy::new()
            .with_level(
                "Physics",
                "foundational",
                ["Kinematics", "Laws of Motion", "Work and Energy"],
            )
            .with_level("Physics", "intermediate", ["Gravitation", "Optics"])
            .with_level("Physics", "advanced", ["Electromagnetism", "Quantum Mechanics"])
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn record(concepts: &[&str], correct: &[bool]) -> QuizRecord {
        QuizRecord::from_graded(
            concepts.iter().map(|c| (format!("About {c}"), c.to_string())),
            correct,
            BTreeMap::new(),
        )
    }

    #[test]
    fn test_strength_unlocks_next_level() {
        let h = physics();
        let rec = ConceptRecommender::new(&h);
        for seed in 0..20 {
            let mut rng = seeded(seed);
            let next = rec.next_concepts(
                "Physics",
                &strings(&["Kinematics"]),
                &[],
                HashSet::new,
                &mut rng,
            );
            assert_eq!(next.len(), 1);
            assert!(["Gravitation", "Optics"].contains(&next[0].as_str()));
        }
    }

    #[test]
    fn test_first_qualifying_strength_wins() {
        let h = physics();
        let rec = ConceptRecommender::new(&h);
        let mut rng = seeded(5);
        // Quantum Mechanics has no next level; Gravitation leads to advanced.
        let next = rec.next_concepts(
            "Physics",
            &strings(&["Quantum Mechanics", "Gravitation"]),
            &[],
            HashSet::new,
            &mut rng,
        );
        assert_eq!(next, vec!["Electromagnetism"]);
    }

    #[test]
    fn test_next_level_excludes_classified() {
        let h = physics();
        let rec = ConceptRecommender::new(&h);
        let mut rng = seeded(9);
        let next = rec.next_concepts(
            "Physics",
            &strings(&["Kinematics", "Optics", "Quantum Mechanics"]),
            &strings(&["Gravitation"]),
            HashSet::new,
            &mut rng,
        );
        assert_eq!(next, vec!["Electromagnetism"]);
    }

    #[test]
    fn test_strength_listed_twice_checks_every_next_level() {
        // Vectors sits in two levels; the level after its first one is used up.
        let h = ConceptHierarchy::new()
            .with_level("Physics", "foundational", ["Vectors", "Units"])
            .with_level("Physics", "intermediate", ["Optics", "Vectors"])
            .with_level("Physics", "advanced", ["Relativity"]);
        let rec = ConceptRecommender::new(&h);
        for seed in 0..10 {
            let mut rng = seeded(seed);
            let next = rec.next_concepts(
                "Physics",
                &strings(&["Vectors"]),
                &strings(&["Optics"]),
                HashSet::new,
                &mut rng,
            );
            assert_eq!(next, vec!["Relativity"]);
        }
    }

    #[test]
    fn test_weakness_falls_back_to_foundational() {
        let h = physics();
        let rec = ConceptRecommender::new(&h);
        let mut rng = seeded(3);
        let next = rec.next_concepts(
            "Physics",
            &[],
            &strings(&["Kinematics"]),
            HashSet::new,
            &mut rng,
        );
        assert_eq!(next.len(), 1);
        assert!(["Laws of Motion", "Work and Energy"].contains(&next[0].as_str()));
    }

    #[test]
    fn test_unseen_fallback_consults_supplier() {
        let h = physics();
        let rec = ConceptRecommender::new(&h);
        let mut rng = seeded(11);
        let seen: HashSet<String> = h
            .all_concepts("Physics")
            .into_iter()
            .filter(|c| *c != "Optics")
            .map(str::to_string)
            .collect();
        let next = rec.next_concepts("Physics", &[], &[], || seen, &mut rng);
        assert_eq!(next, vec!["Optics"]);
    }

    #[test]
    fn test_supplier_not_called_when_earlier_stage_hits() {
        let h = physics();
        let rec = ConceptRecommender::new(&h);
        let mut rng = seeded(1);
        let next = rec.next_concepts(
            "Physics",
            &strings(&["Kinematics"]),
            &[],
            || panic!("seen concepts should not be needed"),
            &mut rng,
        );
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn test_exhausted_returns_empty() {
        let h = physics();
        let rec = ConceptRecommender::new(&h);
        let mut rng = seeded(2);
        let all: HashSet<String> = h.all_concepts("Physics").into_iter().map(str::to_string).collect();
        assert!(rec.next_concepts("Physics", &[], &[], || all, &mut rng).is_empty());
        assert!(rec
            .next_concepts("Alchemy", &strings(&["Lead"]), &[], HashSet::new, &mut rng)
            .is_empty());
    }

    #[test]
    fn test_alternative_prefers_same_level() {
        let h = physics();
        let rec = ConceptRecommender::new(&h);
        let history = vec![record(&["Kinematics"], &[true])];
        for seed in 0..10 {
            let mut rng = seeded(seed);
            let alt = rec.alternative_concept("Physics", "Laws of Motion", &history, &mut rng);
            assert_eq!(alt.as_deref(), Some("Work and Energy"));
        }
    }

    #[test]
    fn test_alternative_searches_every_level_holding_rejected() {
        let h = ConceptHierarchy::new()
            .with_level("Physics", "foundational", ["Vectors", "Units"])
            .with_level("Physics", "intermediate", ["Optics", "Vectors"])
            .with_level("Physics", "advanced", ["Relativity", "Plasma"]);
        let rec = ConceptRecommender::new(&h);
        let history = vec![record(&["Units"], &[true])];
        for seed in 0..20 {
            let mut rng = seeded(seed);
            let alt = rec.alternative_concept("Physics", "Vectors", &history, &mut rng);
            assert_eq!(alt.as_deref(), Some("Optics"));
        }
    }

    #[test]
    fn test_alternative_falls_back_to_foundational_with_weaknesses() {
        let h = physics();
        let rec = ConceptRecommender::new(&h);
        // Optics is weak and Gravitation strong, so the intermediate level is used up.
        let history = vec![
            record(&["Optics"], &[false]),
            record(&["Gravitation"], &[true]),
        ];
        let mut rng = seeded(4);
        let alt = rec.alternative_concept("Physics", "Gravitation", &history, &mut rng);
        let alt = alt.unwrap();
        assert!(h.foundational("Physics").contains(&alt));
    }

    #[test]
    fn test_alternative_falls_back_to_unseen() {
        let h = physics();
        let rec = ConceptRecommender::new(&h);
        let mut rng = seeded(6);
        let alt = rec.alternative_concept("Physics", "Dark Matter", &[], &mut rng).unwrap();
        assert!(h.all_concepts("Physics").contains(&alt.as_str()));
        assert_ne!(alt, "Dark Matter");
    }

    #[test]
    fn test_alternative_none_when_exhausted() {
        let h = ConceptHierarchy::new().with_level("Tiny", "foundational", ["Only"]);
        let rec = ConceptRecommender::new(&h);
        let mut rng = seeded(8);
        assert_eq!(rec.alternative_concept("Tiny", "Only", &[], &mut rng), None);
    }

    #[test]
    fn test_tested_concepts() {
        let history = vec![record(&["Optics", "Gravitation"], &[true, false]), QuizRecord::default()];
        let tested = tested_concepts(&history);
        assert_eq!(tested.len(), 2);
        assert!(tested.contains("Optics"));
    }
}
