//! Deck listing and JSON import.

use crate::cli::{CollectionArgs, ImportArgs};
use crate::db::SqliteCollection;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

/// Shape of an importable deck file.
#[derive(Debug, Deserialize)]
pub struct DeckFile {
    pub deck: String,
    pub notes: Vec<ImportNote>,
}

#[derive(Debug, Deserialize)]
pub struct ImportNote {
    pub fields: HashMap<String, String>,
}

pub fn run_decks(args: &CollectionArgs) -> Result<()> {
    let collection = SqliteCollection::open(&args.collection).context("opening collection")?;
    let decks = collection.list_decks()?;
    print!("{}", decks_report(&decks));
    Ok(())
}

/// One line per deck with its note count, or a placeholder for none.
fn decks_report(decks: &[(String, usize)]) -> String {
    if decks.is_empty() {
        return "No decks in collection.\n".to_string();
    }
    let mut out = String::new();
    for (deck, count) in decks {
        out.push_str(&format!("{}\t{} notes\n", deck, count));
    }
    out
}

pub fn run_import(args: &ImportArgs) -> Result<()> {
    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let deck_file: DeckFile = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", args.file.display()))?;

    let collection =
        SqliteCollection::open(&args.collection.collection).context("opening collection")?;
    for note in &deck_file.notes {
        collection.insert_note(&deck_file.deck, &note.fields)?;
    }

    tracing::info!(
        deck = %deck_file.deck,
        notes = deck_file.notes.len(),
        "import finished"
    );
    println!(
        "Imported {} notes into deck '{}'.",
        deck_file.notes.len(),
        deck_file.deck
    );
    Ok(())
}
