//! ReviewItem is a <front, back> pair plus its SM-2 scheduling state.
use crate::error::SchedulerError;
use chrono::NaiveDate;

pub const DEFAULT_INTERVAL: u32 = 1;
pub const DEFAULT_EASINESS_FACTOR: f64 = 2.5;
pub const MIN_EASINESS_FACTOR: f64 = 1.3;

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewItem {
    pub front: String,
    pub back: String,
    /// `None` for a card that was never graded; such a card is always due.
    pub review_date: Option<NaiveDate>,
    /// Days until the next review, never below 1.
    pub interval: u32,
    /// Consecutive successful reviews (grade >= 3).
    pub repetitions: u32,
    pub easiness_factor: f64,
}

impl ReviewItem {
    /// Creates a new, never-reviewed card. Both sides must contain text.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Result<Self, SchedulerError> {
        let front = front.into();
        let back = back.into();

        if front.trim().is_empty() {
            return Err(SchedulerError::InvalidInput(
                "front of a flashcard cannot be empty".to_string(),
            ));
        }
        if back.trim().is_empty() {
            return Err(SchedulerError::InvalidInput(
                "back of a flashcard cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            front,
            back,
            review_date: None,
            interval: DEFAULT_INTERVAL,
            repetitions: 0,
            easiness_factor: DEFAULT_EASINESS_FACTOR,
        })
    }

    pub fn is_new(&self) -> bool {
        self.review_date.is_none()
    }

    /// A card is due when it was never scheduled or its date has arrived.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        match self.review_date {
            None => true,
            Some(date) => date <= today,
        }
    }
}
