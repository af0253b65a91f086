//! SQLite schema for a local note collection.

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 1;

/// Complete schema. Every statement is idempotent so opening an existing
/// collection is safe.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY,
    deck TEXT NOT NULL,
    modified_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS note_fields (
    note_id INTEGER NOT NULL REFERENCES notes(id),
    name TEXT NOT NULL,
    content TEXT NOT NULL DEFAULT '',
    PRIMARY KEY (note_id, name)
);

CREATE INDEX IF NOT EXISTS idx_notes_deck ON notes(deck);

CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);
"#;
