//! Error types for record ingestion and the solved log.

use std::fmt;

/// Why a batch of raw records was rejected. The whole batch is refused,
/// never partially accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Direction label is neither a movement nor the terminal sentinel.
    UnknownDirection { index: usize, label: String },
    /// `Terminal` appeared somewhere other than the last record.
    MisplacedTerminal { index: usize },
    /// Word is empty or whitespace only.
    EmptyWord { index: usize },
}

impl ValidationError {
    /// Index of the offending record.
    pub fn index(&self) -> usize {
        match self {
            ValidationError::UnknownDirection { index, .. }
            | ValidationError::MisplacedTerminal { index }
            | ValidationError::EmptyWord { index } => *index,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownDirection { index, label } => {
                write!(f, "record {}: unknown direction {:?}", index, label)
            }
            ValidationError::MisplacedTerminal { index } => {
                write!(f, "record {}: terminal direction is only allowed on the last record", index)
            }
            ValidationError::EmptyWord { index } => write!(f, "record {}: empty word", index),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors from appending to a [`SolvedLog`](crate::core::solved_log::SolvedLog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// The log already holds its terminal record.
    AlreadyFinished,
    /// The appended record failed validation.
    Invalid(ValidationError),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::AlreadyFinished => write!(f, "solved log is already finished; restart first"),
            LogError::Invalid(err) => write!(f, "invalid record: {}", err),
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogError::Invalid(err) => Some(err),
            LogError::AlreadyFinished => None,
        }
    }
}

impl From<ValidationError> for LogError {
    fn from(err: ValidationError) -> Self {
        LogError::Invalid(err)
    }
}
