//! Core note-export engine, independent of any GUI toolkit or storage.
//!
//! The flow mirrors an export dialog: load snapshots of a deck's notes
//! ([`load_notes`]), let the user shape a [`SelectionModel`] (which fields,
//! which notes, what column order), then hand the result to [`export_notes`],
//! which writes one TSV/CSV file and relocates every `[sound:FILE]`
//! attachment next to it.
//!
//! Host data access goes through the [`Collection`] trait so the engine runs
//! against any store; [`MemoryCollection`] covers tests and embedding.

pub mod audio;
pub mod collection;
pub mod error;
pub mod export;
pub mod selection;
pub mod snapshot;
pub mod types;

pub use collection::{Collection, MemoryCollection};
pub use error::{ExportError, Result};
pub use export::{
    export_notes, ExportFormat, ExportOptions, ExportReport, DEFAULT_AUDIO_FOLDER,
};
pub use selection::{SelectionModel, ROW_TOGGLE_COLUMN};
pub use snapshot::{load_notes, DeckSnapshot};
pub use types::{NoteId, NoteSnapshot};
