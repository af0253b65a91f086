//! SQLite-backed note collection.

use crate::db::error::DbError;
use chrono::Utc;
use noteport_core::{Collection, ExportError, NoteId};
use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, DbError>;

/// File name of the note database inside a collection directory.
pub const COLLECTION_DB: &str = "collection.db";

/// Name of the media directory inside a collection directory.
pub const MEDIA_DIR: &str = "media";

/// A collection directory: `collection.db` plus a `media/` folder holding
/// the attachments that `[sound:FILE]` markers reference.
pub struct SqliteCollection {
    conn: Connection,
    media_dir: PathBuf,
}

impl SqliteCollection {
    /// Open the collection stored in `dir`, creating the database and the
    /// media directory when absent.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let media_dir = dir.join(MEDIA_DIR);
        fs::create_dir_all(&media_dir)?;

        let conn = Connection::open(dir.join(COLLECTION_DB))?;
        let collection = Self { conn, media_dir };
        collection.initialize()?;
        Ok(collection)
    }

    /// Open an in-memory database (for testing). Media still lives on disk.
    pub fn open_in_memory(media_dir: PathBuf) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let collection = Self { conn, media_dir };
        collection.initialize()?;
        Ok(collection)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        self.conn.execute(
            "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
            params![super::schema::SCHEMA_VERSION],
        )?;
        Ok(())
    }

    /// Insert one note with its fields, returning the new id.
    pub fn insert_note(&self, deck: &str, fields: &HashMap<String, String>) -> Result<i64> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO notes (deck, modified_at) VALUES (?1, ?2)",
            params![deck, now],
        )?;
        let id = self.conn.last_insert_rowid();

        for (name, content) in fields {
            self.conn.execute(
                "INSERT INTO note_fields (note_id, name, content) VALUES (?1, ?2, ?3)",
                params![id, name, content],
            )?;
        }

        Ok(id)
    }

    /// Deck names with their note counts, sorted by name.
    pub fn list_decks(&self) -> Result<Vec<(String, usize)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT deck, COUNT(*) FROM notes GROUP BY deck ORDER BY deck")?;

        let decks = stmt
            .query_map([], |row| {
                Ok((row.get(0)?, row.get::<_, i64>(1)? as usize))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(decks)
    }

    fn note_exists(&self, id: NoteId) -> Result<bool> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM notes WHERE id = ?1)",
            params![id.0],
            |row| row.get(0),
        )?;
        Ok(exists)
    }
}

/// The core flow reports store failures as one opaque variant; everything it
/// needs to branch on (validation, io) has its own type already.
fn collection_error(err: impl std::fmt::Display) -> ExportError {
    ExportError::Collection(err.to_string())
}

impl Collection for SqliteCollection {
    fn deck_note_ids(&self, deck: &str) -> noteport_core::Result<Vec<NoteId>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM notes WHERE deck = ?1 ORDER BY id")
            .map_err(collection_error)?;

        let ids = stmt
            .query_map(params![deck], |row| row.get(0).map(NoteId))
            .map_err(collection_error)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(collection_error)?;

        Ok(ids)
    }

    fn note_fields(&self, id: NoteId) -> noteport_core::Result<HashMap<String, String>> {
        if !self.note_exists(id).map_err(collection_error)? {
            return Err(collection_error(DbError::NoteNotFound(id.0)));
        }

        let mut stmt = self
            .conn
            .prepare("SELECT name, content FROM note_fields WHERE note_id = ?1")
            .map_err(collection_error)?;

        let fields = stmt
            .query_map(params![id.0], |row| Ok((row.get(0)?, row.get(1)?)))
            .map_err(collection_error)?
            .collect::<std::result::Result<HashMap<_, _>, _>>()
            .map_err(collection_error)?;

        Ok(fields)
    }

    fn media_dir(&self) -> &Path {
        &self.media_dir
    }
}
