//! Command-line definitions.

use clap::{Args, Parser, Subcommand};
use noteport_core::ExportFormat;
use std::path::PathBuf;

/// Export flashcard notes and their audio attachments to TSV or CSV.
#[derive(Debug, Parser)]
#[command(name = "noteport", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export a deck's notes to a delimited file plus an audio folder.
    Export(ExportArgs),
    /// List the decks in a collection with their note counts.
    Decks(CollectionArgs),
    /// List the field names used by a deck's notes.
    Fields(DeckArgs),
    /// Print every note's field values, truncated for reading.
    Preview(DeckArgs),
    /// Import notes from a JSON deck file.
    Import(ImportArgs),
}

#[derive(Debug, Args)]
pub struct CollectionArgs {
    /// Collection directory (holds collection.db and media/).
    #[arg(short, long)]
    pub collection: PathBuf,
}

#[derive(Debug, Args)]
pub struct DeckArgs {
    #[command(flatten)]
    pub collection: CollectionArgs,

    /// Deck to read notes from.
    #[arg(short, long)]
    pub deck: String,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub deck: DeckArgs,

    /// Output file. Defaults to notes_export.tsv / notes_export.csv.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "tsv")]
    pub format: ExportFormat,

    /// Name of the audio folder created next to the output file.
    #[arg(long, default_value = noteport_core::DEFAULT_AUDIO_FOLDER)]
    pub audio_dir: String,

    /// Comma-separated field names to export, in column order.
    /// Everything else is left out. Defaults to all fields.
    #[arg(long, value_delimiter = ',', conflicts_with = "exclude_fields")]
    pub fields: Option<Vec<String>>,

    /// Comma-separated field names to leave out of the export.
    #[arg(long, value_delimiter = ',')]
    pub exclude_fields: Option<Vec<String>>,

    /// Comma-separated note ids to export. Defaults to the whole deck.
    #[arg(long, value_delimiter = ',')]
    pub notes: Option<Vec<i64>>,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    #[command(flatten)]
    pub collection: CollectionArgs,

    /// JSON deck file: {"deck": "...", "notes": [{"fields": {...}}, ...]}.
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn export_args_parse() {
        let cli = Cli::try_parse_from([
            "noteport",
            "export",
            "--collection",
            "col",
            "--deck",
            "Spanish",
            "--format",
            "csv",
            "--fields",
            "Back,Front",
            "--notes",
            "1,3",
        ])
        .unwrap();

        let Command::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.deck.deck, "Spanish");
        assert_eq!(args.format, ExportFormat::Csv);
        assert_eq!(
            args.fields,
            Some(vec!["Back".to_string(), "Front".to_string()])
        );
        assert_eq!(args.notes, Some(vec![1, 3]));
        assert_eq!(args.audio_dir, "audio");
    }

    #[test]
    fn fields_and_exclude_fields_conflict() {
        let result = Cli::try_parse_from([
            "noteport",
            "export",
            "--collection",
            "col",
            "--deck",
            "Spanish",
            "--fields",
            "Front",
            "--exclude-fields",
            "Back",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn format_defaults_to_tsv() {
        let cli = Cli::try_parse_from([
            "noteport", "export", "--collection", "col", "--deck", "Spanish",
        ])
        .unwrap();

        let Command::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.format, ExportFormat::Tsv);
        assert_eq!(args.output, None);
    }
}
