//! Local SQLite collection storage.

pub mod collection;
pub mod error;
pub mod schema;

pub use collection::{SqliteCollection, COLLECTION_DB, MEDIA_DIR};
pub use error::DbError;
