//! Subcommand implementations.

pub mod deck;
pub mod export;
pub mod preview;

pub use deck::{run_decks, run_import};
pub use export::run_export;
pub use preview::{run_fields, run_preview};
