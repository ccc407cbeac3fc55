//! Concept Hierarchy
//!
//! Static reference data: subject -> ordered levels -> ordered concepts.
//! Levels are kept as a list so that "next level" follows declaration
//! order (foundational < intermediate < advanced).

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::types::FOUNDATIONAL_LEVEL;

/// One difficulty tier of a subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub concepts: Vec<String>,
}

impl Level {
    pub fn new<S: Into<String>>(name: impl Into<String>, concepts: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            concepts: concepts.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, concept: &str) -> bool {
        self.concepts.iter().any(|c| c == concept)
    }
}

/// Read-only concept hierarchy for every subject
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConceptHierarchy {
    subjects: BTreeMap<String, Vec<Level>>,
}

impl ConceptHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a level to a subject, creating the subject if needed
    pub fn with_level<S: Into<String>>(
        mut self,
        subject: &str,
        level: &str,
        concepts: impl IntoIterator<Item = S>,
    ) -> Self {
        self.subjects
            .entry(subject.to_string())
            .or_default()
            .push(Level::new(level, concepts));
        self
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    /// Levels of a subject in declared order; empty for unknown subjects
    pub fn levels(&self, subject: &str) -> &[Level] {
        self.subjects.get(subject).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn level(&self, subject: &str, name: &str) -> Option<&Level> {
        self.levels(subject).iter().find(|l| l.name == name)
    }

    /// Every level holding `concept`, in declared order.
    ///
    /// A concept may be listed under more than one level.
    pub fn levels_of<'a>(
        &'a self,
        subject: &str,
        concept: &'a str,
    ) -> impl Iterator<Item = &'a Level> + 'a {
        self.levels(subject)
            .iter()
            .filter(move |l| l.contains(concept))
    }

    /// Levels declared right after each level holding `concept`
    pub fn next_levels_after<'a>(
        &'a self,
        subject: &str,
        concept: &'a str,
    ) -> impl Iterator<Item = &'a Level> + 'a {
        let levels = self.levels(subject);
        levels
            .iter()
            .enumerate()
            .filter(move |(_, l)| l.contains(concept))
            .filter_map(move |(idx, _)| levels.get(idx + 1))
    }

    /// Concepts of the foundational level; empty when the subject lacks one
    pub fn foundational(&self, subject: &str) -> &[String] {
        self.level(subject, FOUNDATIONAL_LEVEL)
            .map(|l| l.concepts.as_slice())
            .unwrap_or(&[])
    }

    /// Every concept of a subject in declared order, without duplicates
    pub fn all_concepts(&self, subject: &str) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.levels(subject)
            .iter()
            .flat_map(|l| l.concepts.iter())
            .map(String::as_str)
            .filter(|c| seen.insert(*c))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}
