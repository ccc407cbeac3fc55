//! Free-text question lookup against the known Q&A pairs of a subject.

use serde::Serialize;

use super::quiz_bank::QaEntry;

pub const NOT_FOUND_ANSWER: &str =
    "I couldn't find an exact answer, but try rephrasing or asking about a specific topic!";

pub const QA_FILE_MISSING: &str = "Questions file not found. Please upload the questions.json file.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QaAnswer {
    pub found: bool,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

impl QaAnswer {
    pub fn not_found(message: &str) -> Self {
        Self {
            found: false,
            answer: message.to_string(),
            matched_question: None,
            similarity: None,
        }
    }
}

/// Answer of the known question closest to `query`, case-insensitively.
///
/// The best candidate must reach `cutoff` similarity; ties keep the first
/// entry.
pub fn find_answer(entries: &[QaEntry], query: &str, cutoff: f64) -> QaAnswer {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return QaAnswer::not_found(NOT_FOUND_ANSWER);
    }

    let best = entries
        .iter()
        .map(|entry| (entry, similarity(&query, &entry.question.to_lowercase())))
        .fold(None::<(&QaEntry, f64)>, |best, (entry, score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((entry, score)),
        });

    match best {
        Some((entry, score)) if score >= cutoff => QaAnswer {
            found: true,
            answer: entry.answer.clone(),
            matched_question: Some(entry.question.clone()),
            similarity: Some(score),
        },
        _ => QaAnswer::not_found(NOT_FOUND_ANSWER),
    }
}

/// Normalized Levenshtein similarity in [0, 1] over chars
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(&a, &b) as f64 / longest as f64
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<QaEntry> {
        vec![
            QaEntry {
                question: "What is Ohm's law?".to_string(),
                answer: "Ohm's Law states that V = IR.".to_string(),
            },
            QaEntry {
                question: "What is photosynthesis?".to_string(),
                answer: "Plants make food using sunlight, CO2 and water.".to_string(),
            },
        ]
    }

    #[test]
    fn test_levenshtein() {
        let d = |a: &str, b: &str| {
            levenshtein(&a.chars().collect::<Vec<_>>(), &b.chars().collect::<Vec<_>>())
        };
        assert_eq!(d("kitten", "sitting"), 3);
        assert_eq!(d("", "abc"), 3);
        assert_eq!(d("same", "same"), 0);
    }

    #[test]
    fn test_similarity_bounds() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("abc", "abc"), 1.0);
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_close_match_found() {
        let answer = find_answer(&entries(), "what is ohms law", 0.4);
        assert!(answer.found);
        assert_eq!(answer.answer, "Ohm's Law states that V = IR.");
        assert_eq!(answer.matched_question.as_deref(), Some("What is Ohm's law?"));
    }

    #[test]
    fn test_case_insensitive() {
        let answer = find_answer(&entries(), "WHAT IS PHOTOSYNTHESIS?", 0.4);
        assert!(answer.found);
        assert_eq!(answer.similarity, Some(1.0));
    }

    #[test]
    fn test_unrelated_query_not_found() {
        let answer = find_answer(&entries(), "quantum chromodynamics lattice gauge", 0.4);
        assert!(!answer.found);
        assert_eq!(answer.answer, NOT_FOUND_ANSWER);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(!find_answer(&[], "anything", 0.4).found);
        assert!(!find_answer(&entries(), "   ", 0.0).found);
    }
}
