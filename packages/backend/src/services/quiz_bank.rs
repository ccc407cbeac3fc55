use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use pathwise_algo::{QuizRecord, DEFAULT_CONCEPT};
use serde::{Deserialize, Serialize};

const QA_FILE: &str = "questions.json";

#[derive(Debug, thiserror::Error)]
pub enum QuizBankError {
    #[error("no quiz available for {subject}")]
    NotFound { subject: String, path: PathBuf },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid quiz file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn default_concept() -> String {
    DEFAULT_CONCEPT.to_string()
}

/// One multiple-choice question of a quiz file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Text of the correct option
    pub answer: String,
    #[serde(default = "default_concept")]
    pub concept: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuizFile {
    #[serde(default)]
    questions: Vec<QuizQuestion>,
}

/// Known question and answer pair for free-text lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaEntry {
    pub question: String,
    pub answer: String,
}

/// File-backed quiz and Q&A source.
///
/// Layout: `<dir>/quiz_<subject lowercased>.json` per subject and a shared
/// `<dir>/questions.json` keyed by subject.
#[derive(Debug, Clone)]
pub struct QuizBank {
    dir: PathBuf,
}

impl QuizBank {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn quiz_path(&self, subject: &str) -> PathBuf {
        self.dir
            .join(format!("quiz_{}.json", subject.trim().to_lowercase()))
    }

    pub async fn load_quiz(&self, subject: &str) -> Result<Vec<QuizQuestion>, QuizBankError> {
        let path = self.quiz_path(subject);
        if !is_plain_subject(subject) {
            return Err(QuizBankError::NotFound {
                subject: subject.to_string(),
                path,
            });
        }

        let Some(raw) = read_optional(&path).await? else {
            tracing::info!(subject, path = %path.display(), "quiz file not found");
            return Err(QuizBankError::NotFound {
                subject: subject.to_string(),
                path,
            });
        };

        let file: QuizFile =
            serde_json::from_str(&raw).map_err(|source| QuizBankError::Parse { path, source })?;
        tracing::debug!(subject, questions = file.questions.len(), "loaded quiz");
        Ok(file.questions)
    }

    /// Known Q&A pairs for a subject; empty when the subject has none
    pub async fn load_qa(&self, subject: &str) -> Result<Vec<QaEntry>, QuizBankError> {
        let path = self.dir.join(QA_FILE);
        let Some(raw) = read_optional(&path).await? else {
            return Err(QuizBankError::NotFound {
                subject: subject.to_string(),
                path,
            });
        };

        let mut all: HashMap<String, Vec<QaEntry>> =
            serde_json::from_str(&raw).map_err(|source| QuizBankError::Parse { path, source })?;
        Ok(all.remove(subject).unwrap_or_default())
    }
}

async fn read_optional(path: &Path) -> Result<Option<String>, QuizBankError> {
    match tokio::fs::read_to_string(path).await {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(QuizBankError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn is_plain_subject(subject: &str) -> bool {
    !subject.trim().is_empty()
        && subject
            .chars()
            .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_')
}

/// Outcome of one graded question
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub index: usize,
    pub question: String,
    pub correct: bool,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub concept: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradedQuiz {
    pub score: u32,
    pub total: usize,
    pub percentage: u32,
    pub results: Vec<QuestionResult>,
    #[serde(skip)]
    pub record: QuizRecord,
}

/// Grade answers (question index -> chosen option text) against a quiz.
///
/// Unanswered questions count as incorrect.
pub fn grade(questions: &[QuizQuestion], answers: &BTreeMap<usize, String>) -> GradedQuiz {
    let results: Vec<QuestionResult> = questions
        .iter()
        .enumerate()
        .map(|(index, q)| {
            let user_answer = answers.get(&index).cloned();
            QuestionResult {
                index,
                question: q.question.clone(),
                correct: user_answer.as_deref() == Some(q.answer.as_str()),
                user_answer,
                correct_answer: q.answer.clone(),
                concept: q.concept.clone(),
                explanation: q.explanation.clone(),
            }
        })
        .collect();

    let correct: Vec<bool> = results.iter().map(|r| r.correct).collect();
    let record = QuizRecord::from_graded(
        questions
            .iter()
            .map(|q| (q.question.clone(), q.concept.clone())),
        &correct,
        answers
            .iter()
            .filter(|(i, _)| **i < questions.len())
            .map(|(i, a)| (*i, a.clone()))
            .collect(),
    );

    let total = questions.len();
    let percentage = if total == 0 {
        0
    } else {
        (f64::from(record.score) / total as f64 * 100.0).round() as u32
    };

    GradedQuiz {
        score: record.score,
        total,
        percentage,
        results,
        record,
    }
}
