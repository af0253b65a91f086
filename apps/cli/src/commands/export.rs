//! The export flow: open the collection, load, apply selections, write.

use crate::cli::ExportArgs;
use crate::db::SqliteCollection;
use anyhow::{anyhow, bail, Context, Result};
use noteport_core::{
    export_notes, load_notes, Collection, ExportFormat, ExportOptions, NoteId, SelectionModel,
};
use std::path::PathBuf;

/// Output file stem when --output is not given.
const DEFAULT_OUTPUT_STEM: &str = "notes_export";

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let collection = SqliteCollection::open(&args.deck.collection.collection)
        .context("opening collection")?;

    let deck = &args.deck.deck;
    let ids = collection.deck_note_ids(deck)?;
    if ids.is_empty() {
        bail!("No notes found in deck '{}'.", deck);
    }

    let snapshot = load_notes(&collection, &ids)?;
    let mut model = SelectionModel::new(&snapshot.field_universe, &ids);
    apply_field_selection(&mut model, args);
    apply_note_selection(&mut model, args);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(args.format));
    let options = ExportOptions {
        output,
        format: args.format,
        audio_folder: args.audio_dir.clone(),
    };

    let report = export_notes(
        &collection,
        &model.export_fields(),
        &model.selected_notes(),
        &options,
    )
    .map_err(|err| {
        if err.is_validation() {
            anyhow!("{}", err)
        } else {
            anyhow!("Error during export: {}", err)
        }
    })?;

    println!(
        "Exported {} notes with {} fields successfully!",
        report.notes, report.fields
    );
    println!("Audio files saved to: {}", report.audio_dir.display());
    Ok(())
}

/// notes_export.tsv / notes_export.csv in the working directory.
fn default_output(format: ExportFormat) -> PathBuf {
    PathBuf::from(format!("{}.{}", DEFAULT_OUTPUT_STEM, format.extension()))
}

/// --fields both checks and orders columns; --exclude-fields only unchecks.
/// Unknown names are warned about and skipped, never fatal.
fn apply_field_selection(model: &mut SelectionModel, args: &ExportArgs) {
    if let Some(fields) = &args.fields {
        model.select_no_fields();
        let mut target = 1; // slot 0 is the row-toggle column
        for name in fields {
            if !model.set_field_included(name, true) {
                tracing::warn!(field = %name, "unknown field ignored");
                continue;
            }
            // Look up past slot 0 so a field sharing the row-toggle
            // column's title still resolves to the field.
            if let Some(position) = model
                .visual_order()
                .iter()
                .skip(1)
                .position(|column| column == name)
                .map(|offset| offset + 1)
            {
                // position < target means a duplicate already placed this one.
                if position >= target {
                    model.move_column(position, target);
                    target += 1;
                }
            }
        }
    } else if let Some(excluded) = &args.exclude_fields {
        for name in excluded {
            if !model.set_field_included(name, false) {
                tracing::warn!(field = %name, "unknown field ignored");
            }
        }
    }
}

fn apply_note_selection(model: &mut SelectionModel, args: &ExportArgs) {
    if let Some(notes) = &args.notes {
        model.select_no_notes();
        for &raw in notes {
            if !model.set_note_included(NoteId(raw), true) {
                tracing::warn!(note = raw, "note id not in deck, ignored");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CollectionArgs, DeckArgs};
    use pretty_assertions::assert_eq;

    fn args(fields: Option<Vec<&str>>, exclude: Option<Vec<&str>>, notes: Option<Vec<i64>>) -> ExportArgs {
        let owned = |v: Vec<&str>| v.into_iter().map(str::to_string).collect();
        ExportArgs {
            deck: DeckArgs {
                collection: CollectionArgs {
                    collection: "col".into(),
                },
                deck: "Spanish".into(),
            },
            output: None,
            format: ExportFormat::Tsv,
            audio_dir: "audio".into(),
            fields: fields.map(owned),
            exclude_fields: exclude.map(owned),
            notes,
        }
    }

    fn model() -> SelectionModel {
        let universe = vec!["Audio".to_string(), "Back".to_string(), "Front".to_string()];
        let ids = vec![NoteId(1), NoteId(2), NoteId(3)];
        SelectionModel::new(&universe, &ids)
    }

    #[test]
    fn default_output_follows_the_format() {
        assert_eq!(default_output(ExportFormat::Tsv), PathBuf::from("notes_export.tsv"));
        assert_eq!(default_output(ExportFormat::Csv), PathBuf::from("notes_export.csv"));
    }

    #[test]
    fn fields_flag_picks_and_orders_columns() {
        let mut model = model();
        apply_field_selection(&mut model, &args(Some(vec!["Front", "Back"]), None, None));
        assert_eq!(model.export_fields(), vec!["Front", "Back"]);
    }

    #[test]
    fn unknown_field_names_are_skipped() {
        let mut model = model();
        apply_field_selection(&mut model, &args(Some(vec!["Tags", "Back"]), None, None));
        assert_eq!(model.export_fields(), vec!["Back"]);
    }

    #[test]
    fn duplicate_field_names_keep_the_first_position() {
        let mut model = model();
        apply_field_selection(
            &mut model,
            &args(Some(vec!["Front", "Front", "Back"]), None, None),
        );
        assert_eq!(model.export_fields(), vec!["Front", "Back"]);
    }

    #[test]
    fn a_field_named_export_can_be_picked_and_ordered() {
        let universe = vec!["Export".to_string(), "Front".to_string()];
        let mut model = SelectionModel::new(&universe, &[NoteId(1)]);
        apply_field_selection(&mut model, &args(Some(vec!["Export", "Front"]), None, None));
        assert_eq!(model.export_fields(), vec!["Export", "Front"]);
    }

    #[test]
    fn exclude_fields_keeps_the_rest_in_order() {
        let mut model = model();
        apply_field_selection(&mut model, &args(None, Some(vec!["Back"]), None));
        assert_eq!(model.export_fields(), vec!["Audio", "Front"]);
    }

    #[test]
    fn note_ids_filter_rows_in_load_order() {
        let mut model = model();
        apply_note_selection(&mut model, &args(None, None, Some(vec![3, 1, 99])));
        assert_eq!(model.selected_notes(), vec![NoteId(1), NoteId(3)]);
    }
}
