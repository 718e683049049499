//! Deck is an ordered set of flashcards, kept in insertion order.
use super::record::{self, ReviewRecord};
use super::{ReviewItem, sm2};
use crate::error::SchedulerError;
use chrono::NaiveDate;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deck {
    pub items: Vec<ReviewItem>,
}

/// Returns the cards due on `today`, keeping their relative order.
pub fn select_due(items: &[ReviewItem], today: NaiveDate) -> Vec<&ReviewItem> {
    items.iter().filter(|item| item.is_due(today)).collect()
}

impl Deck {
    pub fn new(items: Vec<ReviewItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a new card. Duplicates are allowed.
    pub fn add_item(&mut self, front: &str, back: &str) -> Result<&ReviewItem, SchedulerError> {
        let item = ReviewItem::new(front, back)?;
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn select_due(&self, today: NaiveDate) -> Vec<&ReviewItem> {
        select_due(&self.items, today)
    }

    pub fn due_count(&self, today: NaiveDate) -> usize {
        self.items.iter().filter(|item| item.is_due(today)).count()
    }

    /// Position of the first due card, which is the one presented next.
    pub fn first_due_index(&self, today: NaiveDate) -> Option<usize> {
        self.items.iter().position(|item| item.is_due(today))
    }

    pub fn get(&self, index: usize) -> Option<&ReviewItem> {
        self.items.get(index)
    }

    /// Grades the card at `index` with the SM-2 update rule.
    pub fn grade(&mut self, index: usize, quality: i32, today: NaiveDate) -> Result<&ReviewItem, SchedulerError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(SchedulerError::NoSuchItem { index, len })?;
        sm2::update_schedule(item, quality, today)?;
        Ok(&*item)
    }

    pub fn to_records(&self) -> Vec<ReviewRecord> {
        self.items.iter().map(record::to_record).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_deck(today: NaiveDate) -> Deck {
        let mut deck = Deck::default();
        for (front, date) in [
            ("tomorrow", today.succ_opt()),
            ("new", None),
            ("yesterday", today.pred_opt()),
            ("today", Some(today)),
        ] {
            deck.add_item(front, "back").unwrap();
            deck.items.last_mut().unwrap().review_date = date;
        }
        deck
    }

    #[test]
    fn test_add_item_keeps_insertion_order() {
        let mut deck = Deck::default();
        deck.add_item("cześć", "hello").unwrap();
        deck.add_item("dziękuję", "thank you").unwrap();
        deck.add_item("cześć", "hello").unwrap();

        assert_eq!(deck.len(), 3);
        let fronts: Vec<_> = deck.items.iter().map(|i| i.front.as_str()).collect();
        assert_eq!(fronts, ["cześć", "dziękuję", "cześć"]);
    }

    #[test]
    fn test_add_item_rejects_empty_text() {
        let mut deck = Deck::default();
        assert!(deck.add_item("", "hello").is_err());
        assert!(deck.is_empty());
    }

    #[test]
    fn test_select_due() {
        let today = day(2024, 6, 15);
        let deck = create_test_deck(today);

        let due: Vec<_> = deck
            .select_due(today)
            .into_iter()
            .map(|i| i.front.as_str())
            .collect();
        assert_eq!(due, ["new", "yesterday", "today"]);
        assert_eq!(deck.due_count(today), 3);
        assert_eq!(deck.first_due_index(today), Some(1));
    }

    #[test]
    fn test_select_due_empty() {
        let today = day(2024, 6, 15);
        assert!(select_due(&[], today).is_empty());

        let mut deck = Deck::default();
        deck.add_item("later", "back").unwrap();
        deck.items[0].review_date = today.succ_opt();
        assert!(deck.select_due(today).is_empty());
        assert_eq!(deck.first_due_index(today), None);
    }

    #[test]
    fn test_grade_updates_only_target() {
        let today = day(2024, 6, 15);
        let mut deck = create_test_deck(today);
        let untouched = deck.items[0].clone();

        let graded = deck.grade(1, 4, today).unwrap();
        assert_eq!(graded.review_date, today.succ_opt());

        assert_eq!(deck.items[0], untouched);
        assert_eq!(deck.first_due_index(today), Some(2));
    }

    #[test]
    fn test_grade_rejects_bad_index_and_grade() {
        let today = day(2024, 6, 15);
        let mut deck = create_test_deck(today);
        let before = deck.clone();

        assert_eq!(
            deck.grade(10, 4, today).unwrap_err(),
            SchedulerError::NoSuchItem { index: 10, len: 4 }
        );
        assert_eq!(
            deck.grade(1, 7, today).unwrap_err(),
            SchedulerError::InvalidGrade(7)
        );
        assert_eq!(deck, before);
    }
}
