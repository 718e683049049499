//! Persisted shape of a ReviewItem.
//!
//! A deck file is a JSON array of these records, one per flashcard, with
//! exactly six fields and no header. Dates are ISO-8601 calendar dates.

use super::ReviewItem;
use super::review_item::MIN_EASINESS_FACTOR;
use crate::error::SchedulerError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub front: String,
    pub back: String,
    pub review_date: Option<String>,
    pub interval: i64,
    pub repetitions: i64,
    pub easiness_factor: f64,
}

pub fn to_record(item: &ReviewItem) -> ReviewRecord {
    ReviewRecord {
        front: item.front.clone(),
        back: item.back.clone(),
        review_date: item
            .review_date
            .map(|date| date.format(DATE_FORMAT).to_string()),
        interval: i64::from(item.interval),
        repetitions: i64::from(item.repetitions),
        easiness_factor: item.easiness_factor,
    }
}

/// Accepts only the zero-padded `YYYY-MM-DD` form that `to_record` writes.
fn parse_review_date(text: &str) -> Result<NaiveDate, SchedulerError> {
    let date = NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| SchedulerError::MalformedRecord(format!("review_date '{}': {}", text, e)))?;
    if date.format(DATE_FORMAT).to_string() != text {
        return Err(SchedulerError::MalformedRecord(format!(
            "review_date '{}' is not in YYYY-MM-DD form",
            text
        )));
    }
    Ok(date)
}

/// Rebuilds a ReviewItem, rejecting values that break its invariants.
pub fn from_record(record: ReviewRecord) -> Result<ReviewItem, SchedulerError> {
    let review_date = match record.review_date {
        None => None,
        Some(text) => Some(parse_review_date(&text)?),
    };

    let interval = u32::try_from(record.interval)
        .ok()
        .filter(|&days| days >= 1)
        .ok_or_else(|| {
            SchedulerError::MalformedRecord(format!(
                "interval must be a positive number of days, got {}",
                record.interval
            ))
        })?;

    let repetitions = u32::try_from(record.repetitions).map_err(|_| {
        SchedulerError::MalformedRecord(format!(
            "repetitions must not be negative, got {}",
            record.repetitions
        ))
    })?;

    if !record.easiness_factor.is_finite() || record.easiness_factor < MIN_EASINESS_FACTOR {
        return Err(SchedulerError::MalformedRecord(format!(
            "easiness_factor must be at least {}, got {}",
            MIN_EASINESS_FACTOR, record.easiness_factor
        )));
    }

    Ok(ReviewItem {
        front: record.front,
        back: record.back,
        review_date,
        interval,
        repetitions,
        easiness_factor: record.easiness_factor,
    })
}

/// Checks the shape of one untyped JSON element and converts it.
pub fn from_json_value(value: serde_json::Value) -> Result<ReviewItem, SchedulerError> {
    let record: ReviewRecord = serde_json::from_value(value)
        .map_err(|e| SchedulerError::MalformedRecord(e.to_string()))?;
    from_record(record)
}
