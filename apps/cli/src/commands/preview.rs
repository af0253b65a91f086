//! Read-only views of a deck: field names and note previews.

use crate::cli::DeckArgs;
use crate::db::SqliteCollection;
use anyhow::{bail, Context, Result};
use noteport_core::{load_notes, Collection, DeckSnapshot};

/// Longest field value printed before truncation.
const PREVIEW_LIMIT: usize = 100;

pub fn run_fields(args: &DeckArgs) -> Result<()> {
    let snapshot = load_deck(args)?;
    print!("{}", fields_report(&snapshot, &args.deck));
    Ok(())
}

pub fn run_preview(args: &DeckArgs) -> Result<()> {
    let snapshot = load_deck(args)?;
    print!("{}", preview_report(&snapshot));
    Ok(())
}

fn fields_report(snapshot: &DeckSnapshot, deck: &str) -> String {
    let mut out = format!(
        "{} notes in deck '{}', fields:\n",
        snapshot.notes.len(),
        deck
    );
    for field in &snapshot.field_universe {
        out.push_str(field);
        out.push('\n');
    }
    out
}

fn preview_report(snapshot: &DeckSnapshot) -> String {
    let mut out = String::new();
    for note in &snapshot.notes {
        out.push_str(&format!("note {}\n", note.id));
        for field in &snapshot.field_universe {
            out.push_str(&format!("  {}: {}\n", field, preview(note.field(field))));
        }
    }
    out
}

fn load_deck(args: &DeckArgs) -> Result<DeckSnapshot> {
    let collection =
        SqliteCollection::open(&args.collection.collection).context("opening collection")?;
    let ids = collection.deck_note_ids(&args.deck)?;
    if ids.is_empty() {
        bail!("No notes found in deck '{}'.", args.deck);
    }
    Ok(load_notes(&collection, &ids)?)
}

/// First 100 characters of a value, "..."-suffixed when longer.
fn preview(content: &str) -> String {
    if content.chars().count() <= PREVIEW_LIMIT {
        return content.to_string();
    }
    let cut: String = content.chars().take(PREVIEW_LIMIT).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use noteport_core::{MemoryCollection, NoteId};
    use pretty_assertions::assert_eq;

    #[test]
    fn fields_report_counts_notes_and_lists_the_universe() {
        let mut collection = MemoryCollection::new("media");
        collection.add_note("Spanish", NoteId(1), &[("Front", "hola"), ("Back", "hello")]);
        collection.add_note("Spanish", NoteId(2), &[("Front", "gato")]);
        let ids = collection.deck_note_ids("Spanish").unwrap();
        let snapshot = load_notes(&collection, &ids).unwrap();

        assert_eq!(
            fields_report(&snapshot, "Spanish"),
            "2 notes in deck 'Spanish', fields:\nBack\nFront\n"
        );
    }

    #[test]
    fn preview_report_shows_every_note_with_truncated_values() {
        let long = "x".repeat(150);
        let mut collection = MemoryCollection::new("media");
        collection.add_note(
            "Spanish",
            NoteId(7),
            &[("Back", long.as_str()), ("Front", "hola")],
        );
        let ids = collection.deck_note_ids("Spanish").unwrap();
        let snapshot = load_notes(&collection, &ids).unwrap();

        let expected = format!("note 7\n  Back: {}...\n  Front: hola\n", "x".repeat(100));
        assert_eq!(preview_report(&snapshot), expected);
    }

    #[test]
    fn short_values_pass_through() {
        assert_eq!(preview("hola"), "hola");
    }

    #[test]
    fn a_value_exactly_at_the_limit_is_untouched() {
        let value = "x".repeat(100);
        assert_eq!(preview(&value), value);
    }

    #[test]
    fn long_values_truncate_with_ellipsis() {
        let value = "x".repeat(250);
        let shown = preview(&value);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.len(), 103);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let value = "é".repeat(150);
        let shown = preview(&value);
        assert_eq!(shown.chars().count(), 103);
    }
}
