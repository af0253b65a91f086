use thiserror::Error;

/// Errors from the local collection store
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("note {0} not found")]
    NoteNotFound(i64),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
