//! Delimited text export with audio relocation.

use crate::audio;
use crate::collection::Collection;
use crate::error::{ExportError, Result};
use crate::types::NoteId;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Audio folder name used when the configured one trims to nothing.
pub const DEFAULT_AUDIO_FOLDER: &str = "audio";

/// Output delimiter variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Tsv,
    Csv,
}

impl ExportFormat {
    pub fn delimiter(self) -> u8 {
        match self {
            Self::Tsv => b'\t',
            Self::Csv => b',',
        }
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        self.as_str()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tsv => "tsv",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tsv" => Ok(Self::Tsv),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown format '{}', expected 'tsv' or 'csv'", other)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where and how one export is written.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Output file path. The audio directory is created next to it.
    pub output: PathBuf,
    pub format: ExportFormat,
    /// Audio folder name as the user entered it; trimmed before use, with
    /// [`DEFAULT_AUDIO_FOLDER`] standing in for a blank entry.
    pub audio_folder: String,
}

impl ExportOptions {
    pub fn new(output: impl Into<PathBuf>, format: ExportFormat) -> Self {
        Self {
            output: output.into(),
            format,
            audio_folder: DEFAULT_AUDIO_FOLDER.to_string(),
        }
    }
}

/// What a finished export produced.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ExportReport {
    pub notes: usize,
    pub fields: usize,
    /// Directory the audio files were copied into.
    pub audio_dir: PathBuf,
}

/// Write the selected notes as one delimited file and relocate their audio.
///
/// `fields` is the exact column order; `notes` the exact row order. Both must
/// be non-empty or the export is rejected before anything touches the
/// filesystem. Cell values are re-fetched from the collection, so edits made
/// after the notes were first loaded still land in the output.
///
/// Every `[sound:FILE]` marker in a cell is rewritten to `FOLDER/FILE` and
/// the attachment copied into the audio directory. A missing attachment is
/// logged and skipped; the marker is rewritten regardless, keeping the
/// output's shape independent of media health. Failures past validation
/// (directory creation, file writing, copying) abort the export and leave
/// whatever was already written in place.
pub fn export_notes(
    collection: &dyn Collection,
    fields: &[String],
    notes: &[NoteId],
    options: &ExportOptions,
) -> Result<ExportReport> {
    if fields.is_empty() {
        return Err(ExportError::NoFieldsSelected);
    }
    if notes.is_empty() {
        return Err(ExportError::NoNotesSelected);
    }

    let audio_folder = resolve_audio_folder(&options.audio_folder);
    let audio_dir = prepare_audio_dir(&options.output, audio_folder)?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(options.format.delimiter())
        .terminator(csv::Terminator::CRLF)
        .from_path(&options.output)?;
    writer.write_record(fields)?;

    let media_dir = collection.media_dir();
    for &id in notes {
        let live = collection.note_fields(id)?;
        let mut row = Vec::with_capacity(fields.len());
        for field in fields {
            let content = live.get(field).map(String::as_str).unwrap_or("");
            row.push(relocate_audio(content, media_dir, &audio_dir, audio_folder)?);
        }
        writer.write_record(&row)?;
    }
    writer.flush()?;

    tracing::info!(
        notes = notes.len(),
        fields = fields.len(),
        output = %options.output.display(),
        "export finished"
    );

    Ok(ExportReport {
        notes: notes.len(),
        fields: fields.len(),
        audio_dir,
    })
}

/// Trimmed audio folder name, falling back to the default when blank.
fn resolve_audio_folder(name: &str) -> &str {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_AUDIO_FOLDER
    } else {
        trimmed
    }
}

/// Create `<output parent>/<folder>` if needed and return it.
fn prepare_audio_dir(output: &Path, audio_folder: &str) -> Result<PathBuf> {
    let parent = output.parent().unwrap_or_else(|| Path::new(""));
    let audio_dir = parent.join(audio_folder);
    fs::create_dir_all(&audio_dir).map_err(|source| ExportError::AudioDir {
        path: audio_dir.display().to_string(),
        source,
    })?;
    Ok(audio_dir)
}

/// Copy each referenced attachment into the audio directory and rewrite its
/// markers to `FOLDER/FILE`. Re-copies on every occurrence, so the last copy
/// wins for repeated filenames.
fn relocate_audio(
    content: &str,
    media_dir: &Path,
    audio_dir: &Path,
    audio_folder: &str,
) -> Result<String> {
    let refs = audio::extract_refs(content);
    if refs.is_empty() {
        return Ok(content.to_string());
    }

    let mut rewritten = content.to_string();
    for name in refs {
        let src = media_dir.join(name);
        if src.is_file() {
            fs::copy(&src, audio_dir.join(name)).map_err(|source| ExportError::CopyMedia {
                name: name.to_string(),
                source,
            })?;
        } else {
            tracing::debug!(file = name, "attachment missing, marker rewritten anyway");
        }
        rewritten = rewritten.replace(
            &audio::marker(name),
            &format!("{}/{}", audio_folder, name),
        );
    }

    Ok(rewritten)
}
