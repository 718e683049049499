//! Review session state for the deck window.
//! Tracks which due card is on screen and whether its answer is revealed.

use super::{Deck, ReviewItem};
use super::sm2::{MAX_QUALITY, MIN_QUALITY};
use crate::error::SessionError;
use chrono::NaiveDate;

/// Cursor over the due cards of a deck.
/// The deck itself stays with the caller and is passed into each call.
#[derive(Debug, Default)]
pub struct ReviewSession {
    pub current_index: Option<usize>,
    pub show_back: bool,
    pub reviewed_count: usize,
}

/// Parses a typed grade. Anything other than a whole number 0-5 is rejected.
pub fn parse_grade(entry: &str) -> Result<i32, SessionError> {
    let trimmed = entry.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(SessionError::GradeEntry(entry.to_string()));
    }
    trimmed
        .parse::<i32>()
        .ok()
        .filter(|q| (MIN_QUALITY..=MAX_QUALITY).contains(q))
        .ok_or_else(|| SessionError::GradeEntry(entry.to_string()))
}

impl ReviewSession {
    /// Moves to the first due card, hiding its answer.
    pub fn next_card(&mut self, deck: &Deck, today: NaiveDate) -> Option<usize> {
        self.current_index = deck.first_due_index(today);
        self.show_back = false;
        self.current_index
    }

    pub fn current_card<'a>(&self, deck: &'a Deck) -> Option<&'a ReviewItem> {
        self.current_index.and_then(|idx| deck.get(idx))
    }

    pub fn reveal_back(&mut self) {
        if self.current_index.is_some() {
            self.show_back = true;
        }
    }

    /// Grades the current card from the text typed by the user, then moves on.
    /// The deck is unchanged when the entry or the grade is rejected.
    pub fn grade_current_card(
        &mut self,
        deck: &mut Deck,
        entry: &str,
        today: NaiveDate,
    ) -> Result<(), SessionError> {
        let index = self.current_index.ok_or(SessionError::NothingDue)?;
        let quality = parse_grade(entry)?;

        deck.grade(index, quality, today)?;
        self.reviewed_count += 1;
        self.next_card(deck, today);
        Ok(())
    }

    pub fn is_completed(&self) -> bool {
        self.current_index.is_none()
    }

    pub fn status_message(&self, deck: &Deck, today: NaiveDate) -> String {
        format!(
            "{} due today, {} reviewed this session",
            deck.due_count(today),
            self.reviewed_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_deck() -> Deck {
        let mut deck = Deck::default();
        deck.add_item("cześć", "hello").unwrap();
        deck.add_item("dziękuję", "thank you").unwrap();
        deck
    }

    #[test]
    fn test_parse_grade() {
        assert_eq!(parse_grade("0"), Ok(0));
        assert_eq!(parse_grade(" 5 "), Ok(5));

        for bad in ["", "6", "-1", "3.5", "four", "+3"] {
            assert_eq!(
                parse_grade(bad),
                Err(SessionError::GradeEntry(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_walks_through_due_cards() {
        let today = day(2024, 1, 1);
        let mut deck = create_test_deck();
        let mut session = ReviewSession::default();

        assert_eq!(session.next_card(&deck, today), Some(0));
        assert_eq!(session.current_card(&deck).unwrap().front, "cześć");
        assert!(!session.show_back);

        session.reveal_back();
        assert!(session.show_back);

        session.grade_current_card(&mut deck, "4", today).unwrap();
        assert_eq!(session.current_index, Some(1));
        assert!(!session.show_back);

        session.grade_current_card(&mut deck, "5", today).unwrap();
        assert!(session.is_completed());
        assert_eq!(session.reviewed_count, 2);
        assert_eq!(
            session.status_message(&deck, today),
            "0 due today, 2 reviewed this session"
        );
    }

    #[test]
    fn test_invalid_entry_keeps_card() {
        let today = day(2024, 1, 1);
        let mut deck = create_test_deck();
        let before = deck.clone();
        let mut session = ReviewSession::default();
        session.next_card(&deck, today);
        session.reveal_back();

        assert!(session.grade_current_card(&mut deck, "9", today).is_err());
        assert_eq!(deck, before);
        assert_eq!(session.current_index, Some(0));
        assert!(session.show_back);
        assert_eq!(session.reviewed_count, 0);
    }

    #[test]
    fn test_failed_card_stays_due_tomorrow() {
        let today = day(2024, 1, 1);
        let mut deck = create_test_deck();
        let mut session = ReviewSession::default();
        session.next_card(&deck, today);

        session.grade_current_card(&mut deck, "1", today).unwrap();
        session.grade_current_card(&mut deck, "1", today).unwrap();
        assert!(session.is_completed());

        let tomorrow = today.succ_opt().unwrap();
        assert_eq!(session.next_card(&deck, tomorrow), Some(0));
    }

    #[test]
    fn test_grading_with_nothing_due() {
        let mut deck = Deck::default();
        let mut session = ReviewSession::default();
        session.next_card(&deck, day(2024, 1, 1));

        assert_eq!(
            session.grade_current_card(&mut deck, "3", day(2024, 1, 1)),
            Err(SessionError::NothingDue)
        );
    }
}
