//! Access to the host application's note collection.

use crate::error::{ExportError, Result};
use crate::types::NoteId;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Read access to the notes and media of a host collection.
///
/// The export flow takes a `Collection` wherever it needs note data, so the
/// engine stays independent of how the host stores things. Implementations
/// exist for SQLite (the CLI) and in-memory data (tests).
pub trait Collection {
    /// Ids of the notes in the named deck, in the host's stable order.
    /// Unknown deck names resolve to an empty list.
    fn deck_note_ids(&self, deck: &str) -> Result<Vec<NoteId>>;

    /// Field name to content map for one note. Fails for an unknown id.
    fn note_fields(&self, id: NoteId) -> Result<HashMap<String, String>>;

    /// Directory holding the media files that audio markers reference.
    fn media_dir(&self) -> &Path;
}

/// In-memory [`Collection`] used by tests and embedding experiments.
#[derive(Debug, Default)]
pub struct MemoryCollection {
    decks: HashMap<String, Vec<NoteId>>,
    notes: HashMap<NoteId, HashMap<String, String>>,
    media_dir: PathBuf,
}

impl MemoryCollection {
    pub fn new(media_dir: impl Into<PathBuf>) -> Self {
        Self {
            decks: HashMap::new(),
            notes: HashMap::new(),
            media_dir: media_dir.into(),
        }
    }

    /// Add a note to a deck. Notes keep their insertion order within a deck.
    pub fn add_note(&mut self, deck: &str, id: NoteId, fields: &[(&str, &str)]) {
        let fields = fields
            .iter()
            .map(|(name, content)| (name.to_string(), content.to_string()))
            .collect();
        self.notes.insert(id, fields);
        self.decks.entry(deck.to_string()).or_default().push(id);
    }

    /// Overwrite one field of an existing note, as a live edit would.
    pub fn set_field(&mut self, id: NoteId, name: &str, content: &str) {
        if let Some(fields) = self.notes.get_mut(&id) {
            fields.insert(name.to_string(), content.to_string());
        }
    }
}

impl Collection for MemoryCollection {
    fn deck_note_ids(&self, deck: &str) -> Result<Vec<NoteId>> {
        Ok(self.decks.get(deck).cloned().unwrap_or_default())
    }

    fn note_fields(&self, id: NoteId) -> Result<HashMap<String, String>> {
        self.notes
            .get(&id)
            .cloned()
            .ok_or_else(|| ExportError::Collection(format!("note {} not found", id)))
    }

    fn media_dir(&self) -> &Path {
        &self.media_dir
    }
}
