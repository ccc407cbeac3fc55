//! Resource Catalog
//!
//! Static mapping concept -> modality -> resource identifiers, and the
//! style-aware resource sampling used for every path item.

use std::collections::{BTreeMap, HashMap};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{Modality, MAX_RESOURCES_PER_ITEM};

/// Read-only resource lists per concept and modality
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceCatalog {
    concepts: HashMap<String, BTreeMap<Modality, Vec<String>>>,
}

impl ResourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resources<S: Into<String>>(
        mut self,
        concept: &str,
        modality: Modality,
        resources: impl IntoIterator<Item = S>,
    ) -> Self {
        self.concepts
            .entry(concept.to_string())
            .or_default()
            .entry(modality)
            .or_default()
            .extend(resources.into_iter().map(Into::into));
        self
    }

    pub fn resources(&self, concept: &str, modality: Modality) -> &[String] {
        self.concepts
            .get(concept)
            .and_then(|by_modality| by_modality.get(&modality))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every resource of a concept across all modalities
    pub fn all_resources(&self, concept: &str) -> Vec<&str> {
        self.concepts
            .get(concept)
            .map(|by_modality| {
                by_modality
                    .values()
                    .flat_map(|list| list.iter().map(String::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Pick up to three resources for `concept` that suit `style`.
    ///
    /// `style` is matched by substring against the label text (e.g.
    /// `"Primarily Hands-on"` selects interactive resources). When nothing
    /// matches, the whole concept entry is the candidate pool. Concepts
    /// absent from the catalog yield nothing.
    pub fn resources_for<R: Rng + ?Sized>(&self, concept: &str, style: &str, rng: &mut R) -> Vec<String> {
        let mut candidates: Vec<&str> = modalities_for_style(style)
            .into_iter()
            .flat_map(|m| self.resources(concept, m).iter().map(String::as_str))
            .collect();

        if candidates.is_empty() {
            candidates = self.all_resources(concept);
        }

        candidates
            .choose_multiple(rng, MAX_RESOURCES_PER_ITEM)
            .map(|r| r.to_string())
            .collect()
    }
}

/// Modalities a style label asks for, in catalog order
pub fn modalities_for_style(style: &str) -> Vec<Modality> {
    let mut selected = Vec::new();
    if style.contains("Visual") {
        selected.push(Modality::Visual);
    }
    if style.contains("Auditory") {
        selected.push(Modality::Auditory);
    }
    if style.contains("Kinesthetic") || style.contains("Hands-on") {
        selected.push(Modality::Interactive);
    }
    if style.contains("Read") || style.contains("Writing") {
        selected.push(Modality::ReadingWriting);
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;

    fn catalog() -> ResourceCatalog {
        ResourceCatalog::new()
            .with_resources("Kinematics", Modality::Visual, ["Kinematics Diagrams", "Motion Graphs"])
            .with_resources("Kinematics", Modality::Auditory, ["Kinematics Audio Lecture"])
            .with_resources("Kinematics", Modality::Interactive, ["Kinematics Simulation"])
            .with_resources(
                "Optics",
                Modality::Visual,
                ["Ray Diagrams", "Lens Images", "Prism Photos", "Mirror Sketches"],
            )
    }

    #[test]
    fn test_modalities_for_style() {
        assert_eq!(modalities_for_style("Visual-Inclined"), vec![Modality::Visual]);
        assert_eq!(modalities_for_style("Primarily Hands-on"), vec![Modality::Interactive]);
        assert_eq!(
            modalities_for_style("Primarily Reading/Writing"),
            vec![Modality::ReadingWriting]
        );
        assert!(modalities_for_style("Mixed").is_empty());
    }

    #[test]
    fn test_visual_style_gets_visual_resources() {
        let mut rng = seeded(7);
        let res = catalog().resources_for("Kinematics", "Visual-Inclined", &mut rng);
        assert_eq!(res.len(), 2);
        assert!(res.contains(&"Kinematics Diagrams".to_string()));
        assert!(res.contains(&"Motion Graphs".to_string()));
    }

    #[test]
    fn test_mixed_style_falls_back_to_all_resources() {
        let mut rng = seeded(7);
        let catalog = catalog();
        let res = catalog.resources_for("Kinematics", "Mixed", &mut rng);
        assert_eq!(res.len(), 3);
        let all = catalog.all_resources("Kinematics");
        assert!(res.iter().all(|r| all.contains(&r.as_str())));
    }

    #[test]
    fn test_unmatched_modality_falls_back() {
        let mut rng = seeded(1);
        let res = catalog().resources_for("Kinematics", "Primarily Reading/Writing", &mut rng);
        assert_eq!(res.len(), 3);
    }

    #[test]
    fn test_reading_writing_style_selects_only_text_resources() {
        let catalog = ResourceCatalog::new()
            .with_resources("Optics", Modality::Visual, ["Ray Diagrams", "Lens Images"])
            .with_resources("Optics", Modality::ReadingWriting, ["Optics Article", "Light Textbook"]);
        for seed in 0..10 {
            let mut rng = seeded(seed);
            let mut res = catalog.resources_for("Optics", "Primarily Reading/Writing", &mut rng);
            res.sort();
            assert_eq!(res, vec!["Light Textbook", "Optics Article"]);
        }
    }

    #[test]
    fn test_sample_is_capped_and_distinct() {
        let catalog = catalog();
        for seed in 0..20 {
            let mut rng = seeded(seed);
            let res = catalog.resources_for("Optics", "Visual-Inclined", &mut rng);
            assert_eq!(res.len(), 3);
            let mut dedup = res.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(dedup.len(), 3);
        }
    }

    #[test]
    fn test_unknown_concept_has_no_resources() {
        let mut rng = seeded(3);
        assert!(catalog().resources_for("Genetics", "Visual-Inclined", &mut rng).is_empty());
    }

    #[test]
    fn test_json_uses_modality_keys() {
        let json = r#"{"Genetics": {"visual": ["Punnett Squares"], "interactive": ["DNA Replication Game"]}}"#;
        let catalog: ResourceCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.resources("Genetics", Modality::Visual), ["Punnett Squares".to_string()]);
    }
}
