//! Guess the modality of a resource from its display name.
//!
//! Only used when a client reports a resource view without saying what kind
//! of resource it was.

use pathwise_algo::Modality;

const RULES: &[(Modality, &[&str])] = &[
    (Modality::Visual, &["Diagram", "Graph", "Image"]),
    (Modality::Auditory, &["Lecture", "Explanation", "Audio"]),
    (
        Modality::Interactive,
        &["Simulation", "Lab", "Game", "Tool", "Practice"],
    ),
    (Modality::ReadingWriting, &["Text", "Article", "Book"]),
];

pub fn infer_modality(resource: &str) -> Option<Modality> {
    RULES
        .iter()
        .find(|(_, needles)| needles.iter().any(|n| resource.contains(n)))
        .map(|(modality, _)| *modality)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_modality() {
        assert_eq!(infer_modality("Kinematics Diagrams"), Some(Modality::Visual));
        assert_eq!(infer_modality("Cell Biology Lecture"), Some(Modality::Auditory));
        assert_eq!(infer_modality("Force and Motion Lab"), Some(Modality::Interactive));
        assert_eq!(infer_modality("Optics Article"), Some(Modality::ReadingWriting));
        assert_eq!(infer_modality("Build an Atom"), None);
    }

    #[test]
    fn test_first_rule_wins() {
        // "Graphing Tool" mentions both a visual and an interactive keyword.
        assert_eq!(infer_modality("Graphing Tool"), Some(Modality::Visual));
    }
}
