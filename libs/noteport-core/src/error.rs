use thiserror::Error;

/// Errors surfaced by the export flow
#[derive(Debug, Error)]
pub enum ExportError {
    /// The source resolved to zero notes, so there is nothing to select from.
    #[error("no notes to export")]
    EmptySource,

    #[error("Select at least one field to export.")]
    NoFieldsSelected,

    #[error("Select at least one note to export.")]
    NoNotesSelected,

    /// The host collection failed while resolving or fetching notes.
    #[error("collection error: {0}")]
    Collection(String),

    #[error("creating audio directory '{path}': {source}")]
    AudioDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("copying media file '{name}': {source}")]
    CopyMedia {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("writing output: {0}")]
    Output(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// True for selection mistakes the user can correct and retry, as opposed
    /// to faults that abort the export.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::NoFieldsSelected | Self::NoNotesSelected)
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_flagged() {
        assert!(ExportError::NoFieldsSelected.is_validation());
        assert!(ExportError::NoNotesSelected.is_validation());
        assert!(!ExportError::EmptySource.is_validation());
        assert!(!ExportError::Collection("gone".to_string()).is_validation());
    }

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(
            ExportError::NoFieldsSelected.to_string(),
            "Select at least one field to export."
        );
        assert_eq!(
            ExportError::NoNotesSelected.to_string(),
            "Select at least one note to export."
        );
    }
}
