//! SM-2 (SuperMemo 2) spaced repetition algorithm implementation.
//!
//! The SM-2 algorithm calculates review intervals based on recall quality:
//! - Quality grades 0-2: reset repetitions and interval, easiness factor is kept
//! - Quality grades 3-5: adjust the easiness factor, then grow the interval
//!   progressively (1 day → 6 days → previous interval × EF)
//! - EF never falls below 1.3
//! - The next review date is always `today + interval`
//!
//! Intervals are rounded half away from zero (`f64::round`).

use super::ReviewItem;
use super::review_item::MIN_EASINESS_FACTOR;
use crate::error::SchedulerError;
use chrono::{Days, NaiveDate};

pub const MIN_QUALITY: i32 = 0;
pub const MAX_QUALITY: i32 = 5;
/// Lowest grade that counts as a successful recall.
pub const PASSING_QUALITY: i32 = 3;

/// Calculates the state a card moves to after being graded on `today`.
/// quality: 0-5 (0 = complete blackout, 5 = perfect response)
pub fn calculate_next_review(
    item: &ReviewItem,
    quality: i32,
    today: NaiveDate,
) -> Result<ReviewItem, SchedulerError> {
    if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(SchedulerError::InvalidGrade(quality));
    }

    let (easiness_factor, interval, repetitions) = if quality < PASSING_QUALITY {
        (item.easiness_factor, 1, 0)
    } else {
        let d = f64::from(MAX_QUALITY - quality);
        let new_ef = (item.easiness_factor + 0.1 - d * (0.08 + d * 0.02)).max(MIN_EASINESS_FACTOR);
        let new_reps = item
            .repetitions
            .checked_add(1)
            .ok_or(SchedulerError::RepetitionOverflow(item.repetitions))?;
        let new_interval = match new_reps {
            1 => 1,
            2 => 6,
            _ => grow_interval(item.interval, new_ef, today)?,
        };
        (new_ef, new_interval, new_reps)
    };

    let review_date = today
        .checked_add_days(Days::new(u64::from(interval)))
        .ok_or(SchedulerError::DateOutOfRange {
            from: today,
            days: u64::from(interval),
        })?;

    Ok(ReviewItem {
        front: item.front.clone(),
        back: item.back.clone(),
        review_date: Some(review_date),
        interval,
        repetitions,
        easiness_factor,
    })
}

/// Grades `item` in place. On error the item is left untouched.
pub fn update_schedule(
    item: &mut ReviewItem,
    quality: i32,
    today: NaiveDate,
) -> Result<(), SchedulerError> {
    *item = calculate_next_review(item, quality, today)?;
    Ok(())
}

fn grow_interval(previous: u32, easiness_factor: f64, today: NaiveDate) -> Result<u32, SchedulerError> {
    let days = (f64::from(previous) * easiness_factor).round();
    if days > f64::from(u32::MAX) {
        return Err(SchedulerError::DateOutOfRange {
            from: today,
            days: days as u64,
        });
    }
    Ok((days as u32).max(1))
}
