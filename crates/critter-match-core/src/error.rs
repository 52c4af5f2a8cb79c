//! Error types for critter-match-core.

use thiserror::Error;

use crate::questions::QuestionId;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when decoding an encoded answer payload.
#[derive(Error, Debug)]
pub enum AnswerError {
    /// The payload was empty or whitespace only.
    #[error("no answers supplied")]
    Empty,

    /// The payload looked like JSON but did not parse as an id → answer map.
    #[error("invalid answer JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A compact payload contained a character that is not a digit or a skip marker.
    #[error("invalid character {found:?} for question {position}")]
    InvalidCharacter {
        /// 1-based question position of the offending character.
        position: usize,
        /// The character found.
        found: char,
    },

    /// A compact payload had more positions than there are questions.
    #[error("compact answers have {len} positions, but there are only {max} questions")]
    TooLong {
        /// Number of positions supplied.
        len: usize,
        /// Number of questions in the catalog.
        max: usize,
    },
}

/// Result type alias using [`AnswerError`].
pub type AnswerResult<T> = Result<T, AnswerError>;

/// Errors returned by the strict scoring entry point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// One or more questions have no answer.
    #[error("{} of {total} questions unanswered: {}", .missing.len(), join_ids(.missing))]
    Incomplete {
        /// Ids of unanswered questions.
        missing: Vec<QuestionId>,
        /// Number of questions in the catalog.
        total: usize,
    },

    /// One or more answers fall outside the 1–5 scale.
    #[error("answers outside 1-5 for questions: {}", join_ids(.ids))]
    OutOfRange {
        /// Ids whose answers are out of range.
        ids: Vec<QuestionId>,
    },
}

/// Result type alias using [`ScoringError`].
pub type ScoringResult<T> = Result<T, ScoringError>;

fn join_ids(ids: &[QuestionId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_lists_missing_ids() {
        let err = ScoringError::Incomplete {
            missing: vec![3, 17],
            total: 30,
        };
        assert_eq!(err.to_string(), "2 of 30 questions unanswered: 3, 17");
    }

    #[test]
    fn invalid_character_names_position() {
        let err = AnswerError::InvalidCharacter {
            position: 4,
            found: 'x',
        };
        assert_eq!(err.to_string(), "invalid character 'x' for question 4");
    }
}
