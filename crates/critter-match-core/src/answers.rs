//! Answer sets and their textual encodings.
//!
//! An [`AnswerSet`] maps question ids to raw Likert responses. It may be
//! partial while a quiz is in progress; the scoring engine skips unanswered
//! questions rather than rejecting them. Use [`validate`] when a caller needs
//! to know whether a set is complete and in range.
//!
//! Two encodings are accepted for transport between the quiz and result
//! views:
//!
//! - JSON object, keys are question ids: `{"1":5,"2":3}`
//! - compact digit string in catalog order, `_` or `-` for a skipped
//!   question: `53_4...`

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dimension::{SCALE_MAX, SCALE_MIN};
use crate::error::{AnswerError, AnswerResult};
use crate::questions::{QUESTIONS, QuestionId, question};

/// Mapping from question id to raw response.
///
/// Responses are expected in `1..=5` but are not range-checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<QuestionId, i32>);

impl AnswerSet {
    /// Create an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every catalog question with the same response.
    pub fn filled(response: i32) -> Self {
        QUESTIONS.iter().map(|q| (q.id, response)).collect()
    }

    /// Record a response, returning the previous one for that question.
    pub fn insert(&mut self, id: QuestionId, response: i32) -> Option<i32> {
        self.0.insert(id, response)
    }

    /// Remove a response.
    pub fn remove(&mut self, id: QuestionId) -> Option<i32> {
        self.0.remove(&id)
    }

    /// Response recorded for a question.
    pub fn get(&self, id: QuestionId) -> Option<i32> {
        self.0.get(&id).copied()
    }

    /// Number of recorded responses (including unknown ids).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no responses are recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(id, response)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, i32)> + '_ {
        self.0.iter().map(|(&id, &response)| (id, response))
    }

    /// Decode either encoding, choosing by the first non-whitespace character.
    pub fn parse(text: &str) -> AnswerResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AnswerError::Empty);
        }
        if trimmed.starts_with('{') {
            Self::from_json(trimmed)
        } else {
            Self::from_compact(trimmed)
        }
    }

    /// Decode a JSON object of `"id": response` pairs.
    pub fn from_json(text: &str) -> AnswerResult<Self> {
        if text.trim().is_empty() {
            return Err(AnswerError::Empty);
        }
        Ok(serde_json::from_str(text)?)
    }

    /// Decode a compact digit string.
    ///
    /// Character `i` answers question `i + 1`. `_` and `-` leave a question
    /// unanswered; whitespace is ignored.
    pub fn from_compact(text: &str) -> AnswerResult<Self> {
        let mut answers = Self::new();
        let mut position = 0usize;

        for ch in text.chars().filter(|c| !c.is_whitespace()) {
            position += 1;
            if position > QUESTIONS.len() {
                let len = text.chars().filter(|c| !c.is_whitespace()).count();
                return Err(AnswerError::TooLong {
                    len,
                    max: QUESTIONS.len(),
                });
            }
            match ch {
                '_' | '-' => {}
                '0'..='9' => {
                    let id = QUESTIONS[position - 1].id;
                    answers.insert(id, ch as i32 - '0' as i32);
                }
                found => return Err(AnswerError::InvalidCharacter { position, found }),
            }
        }

        if position == 0 {
            return Err(AnswerError::Empty);
        }
        Ok(answers)
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> AnswerResult<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Encode as a compact digit string over the catalog order.
    ///
    /// Returns `None` when a response cannot be written as a single digit
    /// or an id is not in the catalog.
    pub fn to_compact(&self) -> Option<String> {
        if self.iter().any(|(id, _)| question(id).is_none()) {
            return None;
        }
        QUESTIONS
            .iter()
            .map(|q| match self.get(q.id) {
                None => Some('_'),
                Some(r) => u32::try_from(r).ok().and_then(|d| char::from_digit(d, 10)),
            })
            .collect()
    }
}

impl FromIterator<(QuestionId, i32)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, i32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<QuestionId, i32>> for AnswerSet {
    fn from(map: BTreeMap<QuestionId, i32>) -> Self {
        Self(map)
    }
}

/// Completeness and range report for an answer set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    /// Catalog questions with no answer.
    pub missing_ids: Vec<QuestionId>,
    /// Catalog questions answered outside 1–5.
    pub out_of_range_ids: Vec<QuestionId>,
    /// Answered ids that are not in the catalog (ignored by scoring).
    pub unknown_ids: Vec<QuestionId>,
}

impl ValidationReport {
    /// Every catalog question has an answer.
    pub fn is_complete(&self) -> bool {
        self.missing_ids.is_empty()
    }

    /// Complete, and every answer is on the scale.
    pub fn is_valid(&self) -> bool {
        self.is_complete() && self.out_of_range_ids.is_empty()
    }
}

/// Check an answer set for missing, out-of-range and unknown entries.
#[tracing::instrument(skip_all, fields(answered = answers.len()))]
pub fn validate(answers: &AnswerSet) -> ValidationReport {
    let mut report = ValidationReport::default();

    for q in &QUESTIONS {
        match answers.get(q.id) {
            None => report.missing_ids.push(q.id),
            Some(r) if !(SCALE_MIN..=SCALE_MAX).contains(&r) => report.out_of_range_ids.push(q.id),
            Some(_) => {}
        }
    }
    report.unknown_ids = answers
        .iter()
        .filter(|(id, _)| question(*id).is_none())
        .map(|(id, _)| id)
        .collect();

    tracing::debug!(
        missing = report.missing_ids.len(),
        out_of_range = report.out_of_range_ids.len(),
        unknown = report.unknown_ids.len(),
        "validated answers"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_string_keys() {
        let answers = AnswerSet::from_json(r#"{"1":5,"2":3,"30":1}"#).unwrap();
        assert_eq!(answers.get(1), Some(5));
        assert_eq!(answers.get(2), Some(3));
        assert_eq!(answers.get(30), Some(1));
        assert_eq!(answers.len(), 3);
    }

    #[test]
    fn to_json_writes_string_keys() {
        let answers: AnswerSet = [(2, 4), (11, 1)].into_iter().collect();
        assert_eq!(answers.to_json().unwrap(), r#"{"2":4,"11":1}"#);
    }

    #[test]
    fn json_and_compact_agree() {
        let compact = AnswerSet::from_compact("12345 12345 12345 12345 12345 12345").unwrap();
        let json = AnswerSet::from_json(&compact.to_json().unwrap()).unwrap();
        assert_eq!(compact, json);
        assert_eq!(compact.len(), 30);
        assert_eq!(compact.get(7), Some(2));
    }

    #[test]
    fn compact_skip_markers_leave_gaps() {
        let answers = AnswerSet::from_compact("5_-4").unwrap();
        assert_eq!(answers.get(1), Some(5));
        assert_eq!(answers.get(2), None);
        assert_eq!(answers.get(3), None);
        assert_eq!(answers.get(4), Some(4));
    }

    #[test]
    fn compact_rejects_letters() {
        let err = AnswerSet::from_compact("12x").unwrap_err();
        assert!(matches!(
            err,
            AnswerError::InvalidCharacter {
                position: 3,
                found: 'x'
            }
        ));
    }

    #[test]
    fn compact_rejects_extra_positions() {
        let err = AnswerSet::from_compact(&"3".repeat(31)).unwrap_err();
        assert!(matches!(err, AnswerError::TooLong { len: 31, max: 30 }));
    }

    #[test]
    fn parse_detects_format() {
        assert_eq!(AnswerSet::parse(" {\"4\":2} ").unwrap().get(4), Some(2));
        assert_eq!(AnswerSet::parse("  42").unwrap().get(2), Some(2));
    }

    #[test]
    fn empty_payload_errors() {
        assert!(matches!(AnswerSet::parse("   "), Err(AnswerError::Empty)));
        assert!(matches!(AnswerSet::from_compact(""), Err(AnswerError::Empty)));
    }

    #[test]
    fn malformed_json_errors() {
        assert!(matches!(
            AnswerSet::parse(r#"{"one": 5}"#),
            Err(AnswerError::Json(_))
        ));
        assert!(matches!(
            AnswerSet::parse(r#"{"1": 5"#),
            Err(AnswerError::Json(_))
        ));
    }

    #[test]
    fn to_compact_marks_missing() {
        let mut answers = AnswerSet::filled(4);
        answers.remove(2);
        let compact = answers.to_compact().unwrap();
        assert_eq!(compact.len(), 30);
        assert!(compact.starts_with("4_4"));
    }

    #[test]
    fn to_compact_refuses_unencodable() {
        let mut answers = AnswerSet::filled(3);
        answers.insert(5, 12);
        assert!(answers.to_compact().is_none());

        let mut answers = AnswerSet::filled(3);
        answers.insert(99, 3);
        assert!(answers.to_compact().is_none());
    }

    #[test]
    fn validate_complete_set() {
        let report = validate(&AnswerSet::filled(3));
        assert!(report.is_complete());
        assert!(report.is_valid());
        assert!(report.unknown_ids.is_empty());
    }

    #[test]
    fn validate_reports_each_problem() {
        let mut answers = AnswerSet::filled(2);
        answers.remove(10);
        answers.insert(11, 0);
        answers.insert(12, 6);
        answers.insert(42, 3);

        let report = validate(&answers);
        assert_eq!(report.missing_ids, vec![10]);
        assert_eq!(report.out_of_range_ids, vec![11, 12]);
        assert_eq!(report.unknown_ids, vec![42]);
        assert!(!report.is_complete());
        assert!(!report.is_valid());
    }
}
