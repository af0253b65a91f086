//! Loading note snapshots and discovering the field universe.

use crate::collection::Collection;
use crate::error::{ExportError, Result};
use crate::types::{NoteId, NoteSnapshot};
use std::collections::BTreeSet;

/// Snapshots for a set of notes plus the field universe they span.
#[derive(Debug, Clone)]
pub struct DeckSnapshot {
    /// One snapshot per note, in the order the ids were given.
    pub notes: Vec<NoteSnapshot>,
    /// Distinct field names across all loaded notes, sorted lexicographically.
    pub field_universe: Vec<String>,
}

/// Fetch each note's fields once and derive the field universe.
///
/// Notes with differing field sets are fine; the universe is their union.
/// Fails with [`ExportError::EmptySource`] when `ids` is empty, so callers
/// can report "nothing to export" before any selection state exists.
pub fn load_notes(collection: &dyn Collection, ids: &[NoteId]) -> Result<DeckSnapshot> {
    if ids.is_empty() {
        return Err(ExportError::EmptySource);
    }

    let mut notes = Vec::with_capacity(ids.len());
    let mut universe = BTreeSet::new();

    for &id in ids {
        let fields = collection.note_fields(id)?;
        universe.extend(fields.keys().cloned());
        notes.push(NoteSnapshot { id, fields });
    }

    tracing::debug!(notes = notes.len(), fields = universe.len(), "loaded deck snapshot");

    Ok(DeckSnapshot {
        notes,
        field_universe: universe.into_iter().collect(),
    })
}
