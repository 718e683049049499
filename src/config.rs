//! Application settings. Everything has a built-in default; there is no
//! config file and nothing is read from the environment.

use std::path::PathBuf;

/// Deck opened on startup when the user has not picked one.
pub const DEFAULT_DECK_PATH: &str = "StudyBuddyApplication/flashcards.json";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub title: String,
    pub deck_path: PathBuf,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Flashcard App".to_string(),
            deck_path: PathBuf::from(DEFAULT_DECK_PATH),
            window_size: [500.0, 500.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deck_is_json() {
        let config = AppConfig::default();
        assert_eq!(config.deck_path.extension().unwrap(), "json");
        assert!(config.window_size.iter().all(|&side| side > 0.0));
    }
}
