//! Audio reference markers embedded in field content.
//!
//! Field text may carry any number of markers of the form:
//!
//! ```text
//! What does this word mean? [sound:pronunciation.mp3]
//! ```
//!
//! The filename between `[sound:` and the next `]` names an attachment in the
//! collection's media directory. Markers never nest or overlap.

/// Opening tag of an audio marker. Case sensitive.
pub const MARKER_OPEN: &str = "[sound:";

/// Closing tag of an audio marker.
pub const MARKER_CLOSE: char = ']';

/// Extract every well-formed marker's filename, left to right.
///
/// Scanning resumes after each closing `]`. An opening tag with no closing
/// `]` ends the scan; that tag and everything after it yields nothing.
/// Filenames are returned verbatim, duplicates and empty names included.
pub fn extract_refs(text: &str) -> Vec<&str> {
    let mut refs = Vec::new();
    let mut pos = 0;

    while let Some(open) = text[pos..].find(MARKER_OPEN) {
        let name_start = pos + open + MARKER_OPEN.len();
        match text[name_start..].find(MARKER_CLOSE) {
            Some(close) => {
                refs.push(&text[name_start..name_start + close]);
                pos = name_start + close + 1;
            }
            None => break,
        }
    }

    refs
}

/// The full marker text for a filename, suitable for search and replace.
pub fn marker(filename: &str) -> String {
    format!("{}{}{}", MARKER_OPEN, filename, MARKER_CLOSE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_single_marker() {
        assert_eq!(extract_refs("hello [sound:word.mp3] world"), vec!["word.mp3"]);
    }

    #[test]
    fn extracts_markers_in_document_order() {
        let text = "[sound:a.mp3] mid [sound:b.ogg] end [sound:c.wav]";
        assert_eq!(extract_refs(text), vec!["a.mp3", "b.ogg", "c.wav"]);
    }

    #[test]
    fn adjacent_markers_do_not_merge() {
        assert_eq!(
            extract_refs("[sound:a.mp3][sound:b.mp3]"),
            vec!["a.mp3", "b.mp3"]
        );
    }

    #[test]
    fn unterminated_marker_ends_the_scan() {
        assert_eq!(extract_refs("[sound:a.mp3] then [sound:broken"), vec!["a.mp3"]);
        assert_eq!(extract_refs("[sound:never-closed"), Vec::<&str>::new());
    }

    #[test]
    fn plain_text_has_no_refs() {
        assert!(extract_refs("no markers here").is_empty());
        assert!(extract_refs("").is_empty());
    }

    #[test]
    fn empty_filename_is_kept() {
        assert_eq!(extract_refs("[sound:]"), vec![""]);
    }

    #[test]
    fn opening_tag_is_case_sensitive() {
        assert!(extract_refs("[SOUND:a.mp3]").is_empty());
        assert!(extract_refs("[Sound:a.mp3]").is_empty());
    }

    #[test]
    fn repeated_filename_appears_per_occurrence() {
        assert_eq!(
            extract_refs("[sound:dup.mp3] and [sound:dup.mp3]"),
            vec!["dup.mp3", "dup.mp3"]
        );
    }

    #[test]
    fn marker_builds_the_search_text() {
        assert_eq!(marker("word.mp3"), "[sound:word.mp3]");
    }
}
