use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of a note in the host collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One note's field map as read at load time.
///
/// Snapshots back the selection dialog; the export itself re-fetches each
/// note so edits made after loading still land in the output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteSnapshot {
    pub id: NoteId,
    pub fields: HashMap<String, String>,
}

impl NoteSnapshot {
    /// Field content by name, empty for a field this note does not have.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snapshot() -> NoteSnapshot {
        NoteSnapshot {
            id: NoteId(7),
            fields: HashMap::from([("Front".to_string(), "hello".to_string())]),
        }
    }

    #[test]
    fn field_returns_content() {
        assert_eq!(snapshot().field("Front"), "hello");
    }

    #[test]
    fn missing_field_is_empty() {
        assert_eq!(snapshot().field("Back"), "");
    }

    #[test]
    fn note_id_displays_as_number() {
        assert_eq!(NoteId(42).to_string(), "42");
    }
}
