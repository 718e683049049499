pub mod deck;
pub mod record;
pub mod review_item;
pub mod review_session;
pub mod sm2;

pub use deck::{Deck, select_due};
pub use record::{ReviewRecord, from_json_value, from_record, to_record};
pub use review_item::ReviewItem;
pub use review_session::ReviewSession;
pub use sm2::{calculate_next_review, update_schedule};
