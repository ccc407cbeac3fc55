//! Portable per-subject export of a learner's data.

use chrono::{DateTime, Utc};
use pathwise_algo::{InteractionEvent, LearningStyleLabel, PathItem, Preferences, QuizRecord};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub learner: String,
    pub subject: String,
    pub exported_at: DateTime<Utc>,
    pub preferences: Option<Preferences>,
    pub quiz_history: Vec<QuizRecord>,
    pub interactions: Vec<InteractionEvent>,
    pub learning_style: LearningStyleLabel,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub path: Vec<PathItem>,
}

/// Attachment file name; anything outside `[A-Za-z0-9_-]` becomes `_`
pub fn export_filename(learner: &str) -> String {
    let safe: String = learner
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{safe}_pathwise_data.json")
}

pub fn content_disposition(learner: &str) -> String {
    format!("attachment; filename=\"{}\"", export_filename(learner))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("ada"), "ada_pathwise_data.json");
        assert_eq!(export_filename("a\"b/c"), "a_b_c_pathwise_data.json");
        assert_eq!(
            content_disposition("ada"),
            "attachment; filename=\"ada_pathwise_data.json\""
        );
    }

    #[test]
    fn test_document_field_names() {
        let doc = ExportDocument {
            learner: "ada".to_string(),
            subject: "Physics".to_string(),
            exported_at: Utc::now(),
            preferences: None,
            quiz_history: vec![],
            interactions: vec![],
            learning_style: LearningStyleLabel::Mixed,
            strengths: vec![],
            weaknesses: vec![],
            path: vec![],
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["learningStyle"], "Mixed");
        assert!(json.get("quizHistory").is_some());
        assert!(json.get("exportedAt").is_some());
    }
}
