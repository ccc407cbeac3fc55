//! Common Types and Constants
//!
//! Shared data structures used across the recommendation modules.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ==================== Constants ====================

/// Maximum number of items in a learning path
pub const MAX_PATH_LEN: usize = 3;

/// Maximum number of weaknesses placed at the head of a path
pub const MAX_WEAKNESSES_IN_PATH: usize = 2;

/// Maximum number of resources attached to a path item
pub const MAX_RESOURCES_PER_ITEM: usize = 3;

/// Name of the entry level in every subject hierarchy
pub const FOUNDATIONAL_LEVEL: &str = "foundational";

/// Concept assigned to quiz questions that do not name one
pub const DEFAULT_CONCEPT: &str = "General";

/// Lowest self-reported preference score
pub const MIN_PREFERENCE: u8 = 1;

/// Highest self-reported preference score
pub const MAX_PREFERENCE: u8 = 5;

/// Score assumed when a learner never answered the questionnaire
pub const NEUTRAL_PREFERENCE: u8 = 3;

// ==================== Modalities ====================

/// Channel a learning resource is delivered through.
///
/// Used as the key of the resource catalog and as the detail of
/// `resource_viewed` interaction events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Visual,
    Auditory,
    Interactive,
    ReadingWriting,
}

impl Modality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Visual => "visual",
            Modality::Auditory => "auditory",
            Modality::Interactive => "interactive",
            Modality::ReadingWriting => "reading_writing",
        }
    }

    /// Lenient parse; unknown values yield `None` so they count for nothing.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visual" => Some(Modality::Visual),
            "auditory" => Some(Modality::Auditory),
            "interactive" | "kinesthetic" => Some(Modality::Interactive),
            "reading_writing" | "read_write" | "reading" => Some(Modality::ReadingWriting),
            _ => None,
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported learning channel of the preference questionnaire.
///
/// Declaration order doubles as the tie-break order when ranking scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleChannel {
    Visual,
    Auditory,
    ReadingWriting,
    Kinesthetic,
}

impl StyleChannel {
    pub const ALL: [StyleChannel; 4] = [
        StyleChannel::Visual,
        StyleChannel::Auditory,
        StyleChannel::ReadingWriting,
        StyleChannel::Kinesthetic,
    ];

    /// Name shown to learners in a `Primarily ...` label
    pub fn display_name(&self) -> &'static str {
        match self {
            StyleChannel::Visual => "Visual",
            StyleChannel::Auditory => "Auditory",
            StyleChannel::ReadingWriting => "Reading/Writing",
            StyleChannel::Kinesthetic => "Hands-on",
        }
    }
}

// ==================== Preferences ====================

/// Self-reported preference vector, one score in 1..=5 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub visual: u8,
    pub auditory: u8,
    #[serde(alias = "reading_writing")]
    pub reading_writing: u8,
    pub kinesthetic: u8,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            visual: NEUTRAL_PREFERENCE,
            auditory: NEUTRAL_PREFERENCE,
            reading_writing: NEUTRAL_PREFERENCE,
            kinesthetic: NEUTRAL_PREFERENCE,
        }
    }
}

impl Preferences {
    pub fn new(visual: u8, auditory: u8, reading_writing: u8, kinesthetic: u8) -> Self {
        Self {
            visual,
            auditory,
            reading_writing,
            kinesthetic,
        }
    }

    pub fn score(&self, channel: StyleChannel) -> u8 {
        match channel {
            StyleChannel::Visual => self.visual,
            StyleChannel::Auditory => self.auditory,
            StyleChannel::ReadingWriting => self.reading_writing,
            StyleChannel::Kinesthetic => self.kinesthetic,
        }
    }

    /// Channel with the highest score; ties go to the earliest declared channel.
    pub fn top_channel(&self) -> (StyleChannel, u8) {
        let mut best = (StyleChannel::Visual, self.visual);
        for channel in StyleChannel::ALL.iter().skip(1) {
            let score = self.score(*channel);
            if score > best.1 {
                best = (*channel, score);
            }
        }
        best
    }
}

// ==================== Interaction Events ====================

/// Kind of a logged learner interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Displayed,
    Answered,
    TtsUsed,
    ResourceViewed,
    QuizSubmitted,
    PathFeedback,
    PathDifficulty,
}

impl EventKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "displayed" | "question_displayed" => Some(EventKind::Displayed),
            "answered" | "question_answered" => Some(EventKind::Answered),
            "tts_used" | "text_to_speech_used" => Some(EventKind::TtsUsed),
            "resource_viewed" => Some(EventKind::ResourceViewed),
            "quiz_submitted" => Some(EventKind::QuizSubmitted),
            "path_feedback" => Some(EventKind::PathFeedback),
            "path_difficulty" => Some(EventKind::PathDifficulty),
            _ => None,
        }
    }
}

/// Optional payload of an interaction event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modality: Option<Modality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// One entry of a learner's append-only interaction log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionEvent {
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: i64,
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<EventDetails>,
}

impl InteractionEvent {
    pub fn new(timestamp_ms: i64, kind: EventKind) -> Self {
        Self {
            timestamp_ms,
            kind,
            details: None,
        }
    }

    pub fn with_details(mut self, details: EventDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn resource_viewed(timestamp_ms: i64, modality: Modality) -> Self {
        Self::new(timestamp_ms, EventKind::ResourceViewed).with_details(EventDetails {
            modality: Some(modality),
            ..EventDetails::default()
        })
    }

    /// Modality of a viewed resource, if the event carries one
    pub fn viewed_modality(&self) -> Option<Modality> {
        if self.kind != EventKind::ResourceViewed {
            return None;
        }
        self.details.as_ref().and_then(|d| d.modality)
    }
}

// ==================== Quiz History ====================

/// A graded quiz attempt.
///
/// `concepts_tested[i]` names the concept behind `questions[i]`. Both the
/// concept list and the correctness map are optional so that partially
/// recorded attempts can still be carried in a history; the analyzer skips
/// them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRecord {
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concepts_tested: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answers: Option<BTreeMap<usize, bool>>,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub user_answers: BTreeMap<usize, String>,
}

impl QuizRecord {
    /// Build a record from parallel `(question, concept)` pairs and a
    /// correctness flag per question index.
    pub fn from_graded<I>(items: I, correct: &[bool], user_answers: BTreeMap<usize, String>) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let (questions, concepts): (Vec<String>, Vec<String>) = items.into_iter().unzip();
        let correct_answers: BTreeMap<usize, bool> = correct
            .iter()
            .take(questions.len())
            .copied()
            .enumerate()
            .collect();
        let score = correct_answers.values().filter(|c| **c).count() as u32;

        Self {
            questions,
            concepts_tested: Some(concepts),
            correct_answers: Some(correct_answers),
            score,
            user_answers,
        }
    }

    pub fn tested_concepts(&self) -> &[String] {
        self.concepts_tested.as_deref().unwrap_or(&[])
    }
}

// ==================== Learning Style ====================

/// Inferred learning-style label.
///
/// Serialized as its display string, e.g. `"Visual-Inclined"` or
/// `"Primarily Reading/Writing"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LearningStyleLabel {
    #[default]
    Mixed,
    AuditoryInclined,
    VisualInclined,
    KinestheticInclined,
    Primarily(StyleChannel),
}

impl fmt::Display for LearningStyleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearningStyleLabel::Mixed => f.write_str("Mixed"),
            LearningStyleLabel::AuditoryInclined => f.write_str("Auditory-Inclined"),
            LearningStyleLabel::VisualInclined => f.write_str("Visual-Inclined"),
            LearningStyleLabel::KinestheticInclined => f.write_str("Kinesthetic-Inclined"),
            LearningStyleLabel::Primarily(channel) => {
                write!(f, "Primarily {}", channel.display_name())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyleLabel(pub String);

impl fmt::Display for UnknownStyleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown learning style label: {}", self.0)
    }
}

impl std::error::Error for UnknownStyleLabel {}

impl FromStr for LearningStyleLabel {
    type Err = UnknownStyleLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Mixed" => Ok(LearningStyleLabel::Mixed),
            "Auditory-Inclined" => Ok(LearningStyleLabel::AuditoryInclined),
            "Visual-Inclined" => Ok(LearningStyleLabel::VisualInclined),
            "Kinesthetic-Inclined" => Ok(LearningStyleLabel::KinestheticInclined),
            other => other
                .strip_prefix("Primarily ")
                .and_then(|name| {
                    StyleChannel::ALL
                        .into_iter()
                        .find(|c| c.display_name() == name)
                })
                .map(LearningStyleLabel::Primarily)
                .ok_or_else(|| UnknownStyleLabel(other.to_string())),
        }
    }
}

impl Serialize for LearningStyleLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LearningStyleLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ==================== Learning Path ====================

/// Why a concept was placed on a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathItemKind {
    Weakness,
    New,
    Strength,
    Foundational,
}

/// One recommended concept with its attached resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathItem {
    pub concept: String,
    #[serde(rename = "type")]
    pub kind: PathItemKind,
    pub resources: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_default_is_neutral() {
        let prefs = Preferences::default();
        assert_eq!(prefs, Preferences::new(3, 3, 3, 3));
    }

    #[test]
    fn test_top_channel_prefers_declaration_order_on_ties() {
        let prefs = Preferences::new(4, 5, 5, 5);
        assert_eq!(prefs.top_channel(), (StyleChannel::Auditory, 5));

        let prefs = Preferences::new(2, 2, 2, 2);
        assert_eq!(prefs.top_channel(), (StyleChannel::Visual, 2));
    }

    #[test]
    fn test_style_label_display_round_trip() {
        let labels = [
            LearningStyleLabel::Mixed,
            LearningStyleLabel::AuditoryInclined,
            LearningStyleLabel::VisualInclined,
            LearningStyleLabel::KinestheticInclined,
            LearningStyleLabel::Primarily(StyleChannel::ReadingWriting),
            LearningStyleLabel::Primarily(StyleChannel::Kinesthetic),
        ];
        for label in labels {
            let parsed: LearningStyleLabel = label.to_string().parse().unwrap();
            assert_eq!(parsed, label);
        }
        assert_eq!(
            LearningStyleLabel::Primarily(StyleChannel::Kinesthetic).to_string(),
            "Primarily Hands-on"
        );
    }

    #[test]
    fn test_style_label_rejects_unknown() {
        assert!("Primarily Smell".parse::<LearningStyleLabel>().is_err());
        assert!("".parse::<LearningStyleLabel>().is_err());
    }

    #[test]
    fn test_style_label_serializes_as_string() {
        let json = serde_json::to_string(&LearningStyleLabel::VisualInclined).unwrap();
        assert_eq!(json, "\"Visual-Inclined\"");
    }

    #[test]
    fn test_modality_parse_is_lenient() {
        assert_eq!(Modality::parse(" Visual "), Some(Modality::Visual));
        assert_eq!(Modality::parse("reading_writing"), Some(Modality::ReadingWriting));
        assert_eq!(Modality::parse("smell"), None);
    }

    #[test]
    fn test_event_kind_parse_accepts_long_names() {
        assert_eq!(EventKind::parse("text_to_speech_used"), Some(EventKind::TtsUsed));
        assert_eq!(EventKind::parse("Resource_Viewed"), Some(EventKind::ResourceViewed));
        assert_eq!(EventKind::parse("clicked"), None);
    }

    #[test]
    fn test_quiz_record_from_graded_keeps_arrays_parallel() {
        let record = QuizRecord::from_graded(
            vec![
                ("What is velocity?".to_string(), "Kinematics".to_string()),
                ("State Newton's first law".to_string(), "Laws of Motion".to_string()),
            ],
            &[true, false, true],
            BTreeMap::new(),
        );
        assert_eq!(record.questions.len(), record.tested_concepts().len());
        assert_eq!(record.score, 1);
        let correct = record.correct_answers.unwrap();
        assert_eq!(correct.len(), 2);
        assert_eq!(correct.get(&1), Some(&false));
    }

    #[test]
    fn test_quiz_record_deserializes_string_indices() {
        let json = r#"{
            "questions": ["q1", "q2"],
            "conceptsTested": ["Optics", "Optics"],
            "correctAnswers": {"0": true, "1": false},
            "score": 1
        }"#;
        let record: QuizRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.correct_answers.unwrap().get(&0), Some(&true));
    }

    #[test]
    fn test_path_item_serializes_kind_as_type() {
        let item = PathItem {
            concept: "Optics".to_string(),
            kind: PathItemKind::New,
            resources: vec![],
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "new");
    }
}
