//! JSON deck files.
//! A deck is stored as a bare array of flashcard records. The bytes match
//! what the original study app wrote, so existing decks keep working in
//! both directions.

use crate::error::DeckError;
use crate::models::{Deck, ReviewRecord, from_json_value};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info};

/// Compact JSON with `", "` / `": "` separators and ASCII-only strings.
struct DeckFormatter;

impl Formatter for DeckFormatter {
    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W: ?Sized + Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        for c in fragment.chars() {
            if (' '..='~').contains(&c) {
                writer.write_all(&[c as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

fn to_deck_bytes(records: &[ReviewRecord]) -> Result<Vec<u8>, DeckError> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, DeckFormatter);
    records.serialize(&mut serializer)?;
    Ok(buf)
}

/// Parses the contents of a deck file.
pub fn parse_deck(contents: &str) -> Result<Deck, DeckError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(contents)?;
    let items = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| from_json_value(value).map_err(|source| DeckError::Record { index, source }))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Deck::new(items))
}

/// Loads a deck from `path`. A file that does not exist is an empty deck.
pub fn load_deck(path: &Path) -> Result<Deck, DeckError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "deck file not found, starting with an empty deck");
            return Ok(Deck::default());
        }
        Err(e) => return Err(e.into()),
    };

    let deck = parse_deck(&contents)?;
    info!(path = %path.display(), cards = deck.len(), "deck loaded");
    Ok(deck)
}

/// Writes the deck to `path`, creating missing parent directories.
pub fn save_deck(deck: &Deck, path: &Path) -> Result<(), DeckError> {
    let contents = to_deck_bytes(&deck.to_records())?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(&contents)?;

    debug!(path = %path.display(), cards = deck.len(), "deck saved");
    Ok(())
}

/// Creates an empty deck file at `path`, replacing whatever was there.
pub fn create_deck(path: &Path) -> Result<Deck, DeckError> {
    let deck = Deck::default();
    save_deck(&deck, path)?;
    info!(path = %path.display(), "new deck created");
    Ok(deck)
}
