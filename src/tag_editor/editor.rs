use std::collections::HashMap;

use super::rules::{is_valid_key, is_valid_value, TagError};
use super::validate::{validate, RowError, RowId, TagDraft};

/// One editable tag row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRow {
    pub id: RowId,
    pub key: String,
    pub value: String,
    pub error: Option<TagError>,
}

impl TagRow {
    fn empty(id: RowId) -> Self {
        Self {
            id,
            key: String::new(),
            value: String::new(),
            error: None,
        }
    }
}

/// Editable tag rows for one form session.
///
/// Edits that fail a charset check are still committed, with the row
/// flagged, so the text on screen always matches the row. [`Self::validate`]
/// re-checks everything at submit time.
#[derive(Debug, Clone, Default)]
pub struct TagEditor {
    rows: Vec<TagRow>,
    touched: bool,
}

impl TagEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[TagRow] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&TagRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// True once any row has been added, edited or removed.
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn draft(&self) -> TagDraft {
        TagDraft::from_rows(&self.rows)
    }

    /// Appends an empty row whose id is one past the current maximum.
    pub fn add_row(&mut self) -> TagDraft {
        let id = self
            .rows
            .iter()
            .map(|row| row.id)
            .max()
            .map_or(0, |max| max + 1);
        self.rows.push(TagRow::empty(id));
        self.touched = true;
        self.draft()
    }

    pub fn update_key(&mut self, id: RowId, key: &str) -> TagDraft {
        self.touched = true;
        let duplicate = !key.is_empty()
            && self
                .rows
                .iter()
                .any(|row| row.id != id && row.key == key);
        if let Some(row) = self.row_mut(id) {
            row.key = key.to_string();
            row.error = if !is_valid_key(key) {
                Some(TagError::InvalidKey)
            } else if duplicate {
                Some(TagError::DuplicateKey)
            } else {
                None
            };
        }
        self.clear_resolved_duplicates();
        self.draft()
    }

    pub fn update_value(&mut self, id: RowId, value: &str) -> TagDraft {
        self.touched = true;
        if let Some(row) = self.row_mut(id) {
            row.value = value.to_string();
            if !is_valid_value(value) {
                row.error = Some(TagError::InvalidValue);
            } else if row.error == Some(TagError::InvalidValue) {
                row.error = None;
            }
        }
        self.draft()
    }

    pub fn delete_row(&mut self, id: RowId) -> TagDraft {
        self.touched = true;
        self.rows.retain(|row| row.id != id);
        self.clear_resolved_duplicates();
        self.draft()
    }

    /// Focus left the key field of `id`: an empty key is flagged.
    pub fn blur_key(&mut self, id: RowId) {
        if let Some(row) = self.row_mut(id) {
            if row.key.is_empty() {
                row.error = Some(TagError::KeyRequired);
            }
        }
    }

    /// Runs the submit-time checks and marks the offending rows.
    pub fn validate(&mut self) -> Result<(), Vec<RowError>> {
        let result = validate(&self.draft());
        if let Err(errors) = &result {
            for err in errors {
                if let Some(row) = self.row_mut(err.id) {
                    row.error = Some(err.error);
                }
            }
        }
        result
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut TagRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    fn clear_resolved_duplicates(&mut self) {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for row in &self.rows {
            *counts.entry(row.key.clone()).or_default() += 1;
        }
        for row in &mut self.rows {
            if row.error == Some(TagError::DuplicateKey) && counts[&row.key] < 2 {
                row.error = None;
            }
        }
    }
}
