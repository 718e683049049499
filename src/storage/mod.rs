pub mod json;

pub use json::{create_deck, load_deck, parse_deck, save_deck};
