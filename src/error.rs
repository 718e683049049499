//! Error types for scheduling, persistence and review sessions.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned by the scheduling core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulerError {
    #[error("invalid grade {0}: quality must be between 0 and 5")]
    InvalidGrade(i32),

    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("review date out of range: {days} days after {from}")]
    DateOutOfRange { from: NaiveDate, days: u64 },

    #[error("repetition count overflow at {0}")]
    RepetitionOverflow(u32),

    #[error("no flashcard at position {index} (deck has {len})")]
    NoSuchItem { index: usize, len: usize },
}

/// Errors raised while loading or saving a deck file.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("flashcard #{index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: SchedulerError,
    },
}

/// Errors surfaced to the review screen.
#[derive(Error, Debug, PartialEq)]
pub enum SessionError {
    #[error("there are no flashcards to review at this time")]
    NothingDue,

    #[error("please enter a valid grade between 0 and 5 (got '{0}')")]
    GradeEntry(String),

    #[error(transparent)]
    Schedule(#[from] SchedulerError),
}
