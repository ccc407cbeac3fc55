//! Glue between session snapshots and the pure recommendation core.

use pathwise_algo::{
    analyze, infer, ConceptRecommender, LearningStyleLabel, PathBuilder, PathItem,
    PerformanceAnalysis, PathRng,
};

use super::reference::ReferenceData;
use super::session::SubjectSnapshot;

pub fn learning_style(snapshot: &SubjectSnapshot) -> LearningStyleLabel {
    infer(snapshot.preferences.as_ref(), &snapshot.interactions)
}

pub fn performance(snapshot: &SubjectSnapshot) -> PerformanceAnalysis {
    analyze(&snapshot.history)
}

/// Build a path; `style` overrides the inferred label when given
pub fn learning_path(
    reference: &ReferenceData,
    subject: &str,
    snapshot: &SubjectSnapshot,
    style: &str,
    rng: &mut PathRng,
) -> Vec<PathItem> {
    let path = PathBuilder::new(&reference.hierarchy, &reference.resources).build(
        subject,
        &snapshot.history,
        style,
        rng,
    );
    if path.is_empty() {
        tracing::info!(
            subject,
            quizzes = snapshot.history.len(),
            "no concept left to put on the learning path"
        );
    } else {
        tracing::debug!(
            subject,
            style,
            quizzes = snapshot.history.len(),
            items = path.len(),
            "built learning path"
        );
    }
    path
}

pub fn alternative(
    reference: &ReferenceData,
    subject: &str,
    rejected: &str,
    snapshot: &SubjectSnapshot,
    rng: &mut PathRng,
) -> Option<String> {
    let alternative = ConceptRecommender::new(&reference.hierarchy).alternative_concept(
        subject,
        rejected,
        &snapshot.history,
        rng,
    );
    if alternative.is_none() {
        tracing::info!(subject, rejected, "no alternative concept left");
    }
    alternative
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathwise_algo::{rng, EventKind, InteractionEvent, Modality, PathItemKind, Preferences};

    #[test]
    fn test_style_from_snapshot() {
        let snapshot = SubjectSnapshot {
            preferences: Some(Preferences::new(5, 3, 3, 3)),
            interactions: vec![
                InteractionEvent::resource_viewed(1, Modality::Visual),
                InteractionEvent::new(2, EventKind::Answered),
            ],
            history: vec![],
        };
        assert_eq!(learning_style(&snapshot), LearningStyleLabel::VisualInclined);
    }

    #[test]
    fn test_fresh_learner_path_is_foundational() {
        let reference = ReferenceData::builtin();
        let mut rng = rng::seeded(42);
        let path = learning_path(
            &reference,
            "Physics",
            &SubjectSnapshot::default(),
            "Mixed",
            &mut rng,
        );
        let concepts: Vec<&str> = path.iter().map(|i| i.concept.as_str()).collect();
        assert_eq!(concepts, vec!["Kinematics", "Laws of Motion", "Work and Energy"]);
        assert!(path.iter().all(|i| i.kind == PathItemKind::Foundational));
        assert_eq!(path[0].resources.len(), 3);
    }

    #[test]
    fn test_alternative_for_unknown_subject() {
        let reference = ReferenceData::builtin();
        let mut rng = rng::seeded(1);
        assert_eq!(
            alternative(&reference, "Alchemy", "Lead", &SubjectSnapshot::default(), &mut rng),
            None
        );
    }
}
