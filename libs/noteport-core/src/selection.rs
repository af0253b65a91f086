//! Field and note selection state with a movable column order.

use crate::types::NoteId;

/// Title of the leading pseudo-column that holds per-note checkboxes in a
/// table surface. It is part of the visual order but never exported.
pub const ROW_TOGGLE_COLUMN: &str = "Export";

/// Which fields and notes are included, and the left-to-right column order.
///
/// The model is plain state: surfaces (a table GUI, CLI flags) drive it and
/// render from it. It never talks to the collection and never validates;
/// the export entry point rejects empty selections when asked to run.
///
/// Three orders live here and stay independent:
/// - field universe order (the order fields were discovered in),
/// - note load order (rows are always written in this order),
/// - visual column order (starts as the row-toggle column followed by the
///   universe, then changes via [`SelectionModel::move_column`]).
#[derive(Debug, Clone)]
pub struct SelectionModel {
    fields: Vec<(String, bool)>,
    notes: Vec<(NoteId, bool)>,
    visual_order: Vec<String>,
}

impl SelectionModel {
    /// Every field and note starts included.
    pub fn new(field_universe: &[String], note_ids: &[NoteId]) -> Self {
        let mut visual_order = Vec::with_capacity(field_universe.len() + 1);
        visual_order.push(ROW_TOGGLE_COLUMN.to_string());
        visual_order.extend(field_universe.iter().cloned());

        Self {
            fields: field_universe.iter().map(|name| (name.clone(), true)).collect(),
            notes: note_ids.iter().map(|&id| (id, true)).collect(),
            visual_order,
        }
    }

    /// Set one field's inclusion flag. Returns false for an unknown name,
    /// leaving the model untouched.
    pub fn set_field_included(&mut self, name: &str, included: bool) -> bool {
        match self.fields.iter_mut().find(|(field, _)| field == name) {
            Some(entry) => {
                entry.1 = included;
                true
            }
            None => false,
        }
    }

    /// Set one note's inclusion flag. Returns false for an unknown id.
    pub fn set_note_included(&mut self, id: NoteId, included: bool) -> bool {
        match self.notes.iter_mut().find(|(note, _)| *note == id) {
            Some(entry) => {
                entry.1 = included;
                true
            }
            None => false,
        }
    }

    pub fn select_all_fields(&mut self) {
        for entry in &mut self.fields {
            entry.1 = true;
        }
    }

    pub fn select_no_fields(&mut self) {
        for entry in &mut self.fields {
            entry.1 = false;
        }
    }

    pub fn select_all_notes(&mut self) {
        for entry in &mut self.notes {
            entry.1 = true;
        }
    }

    pub fn select_no_notes(&mut self) {
        for entry in &mut self.notes {
            entry.1 = false;
        }
    }

    pub fn is_field_included(&self, name: &str) -> bool {
        self.fields
            .iter()
            .any(|(field, included)| *included && field == name)
    }

    pub fn is_note_included(&self, id: NoteId) -> bool {
        self.notes
            .iter()
            .any(|(note, included)| *included && *note == id)
    }

    /// Current column arrangement, row-toggle column included.
    pub fn visual_order(&self) -> &[String] {
        &self.visual_order
    }

    /// Move the column at `from` so it sits at `to`, shifting the rest.
    /// Out-of-range positions are ignored.
    pub fn move_column(&mut self, from: usize, to: usize) {
        if from >= self.visual_order.len() || to >= self.visual_order.len() || from == to {
            return;
        }
        let column = self.visual_order.remove(from);
        self.visual_order.insert(to, column);
    }

    /// The exported column order: the visual order minus its leading
    /// pseudo-column, filtered to fields whose flag is set.
    pub fn export_fields(&self) -> Vec<String> {
        self.visual_order
            .iter()
            .skip(1)
            .filter(|name| self.is_field_included(name.as_str()))
            .cloned()
            .collect()
    }

    /// Included notes, always in their original load order.
    pub fn selected_notes(&self) -> Vec<NoteId> {
        self.notes
            .iter()
            .filter(|(_, included)| *included)
            .map(|(id, _)| *id)
            .collect()
    }
}
