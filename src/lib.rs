pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use config::AppConfig;
pub use error::{DeckError, SchedulerError, SessionError};
pub use models::{Deck, ReviewItem, ReviewRecord, ReviewSession};
