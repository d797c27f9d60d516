use std::collections::{HashMap, HashSet};

use crate::types::Tag;

use super::editor::TagRow;
use super::rules::{is_valid_key, is_valid_value, TagError};

/// Locally generated row identifier, used only to address rows.
pub type RowId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowError {
    pub id: RowId,
    pub error: TagError,
}

/// Snapshot of the editor's rows, as handed to the form after each edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDraft {
    entries: Vec<(RowId, Tag)>,
}

impl TagDraft {
    pub fn from_rows(rows: &[TagRow]) -> Self {
        Self {
            entries: rows
                .iter()
                .map(|row| (row.id, Tag::new(row.key.clone(), row.value.clone())))
                .collect(),
        }
    }

    pub fn from_tags(tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            entries: (0..).zip(tags).collect(),
        }
    }

    pub fn tags(&self) -> Vec<Tag> {
        self.entries.iter().map(|(_, tag)| tag.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

type Check = fn(&TagDraft) -> Vec<RowError>;

/// Validates a draft for submission.
///
/// Checks run in order: empty keys, duplicate keys, key charset, value
/// charset. The first check that finds anything returns its errors; the
/// remaining checks are skipped.
pub fn validate(draft: &TagDraft) -> Result<(), Vec<RowError>> {
    const CHECKS: [Check; 4] = [empty_keys, duplicate_keys, invalid_keys, invalid_values];
    for check in CHECKS {
        let errors = check(draft);
        if !errors.is_empty() {
            return Err(errors);
        }
    }
    Ok(())
}

fn flag(draft: &TagDraft, error: TagError, offending: impl Fn(&Tag) -> bool) -> Vec<RowError> {
    draft
        .entries
        .iter()
        .filter(|(_, tag)| offending(tag))
        .map(|(id, _)| RowError { id: *id, error })
        .collect()
}

fn empty_keys(draft: &TagDraft) -> Vec<RowError> {
    flag(draft, TagError::KeyRequired, |tag| tag.key.is_empty())
}

fn duplicate_keys(draft: &TagDraft) -> Vec<RowError> {
    let unique: HashSet<&str> = draft.entries.iter().map(|(_, t)| t.key.as_str()).collect();
    if unique.len() == draft.entries.len() {
        return Vec::new();
    }
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for (_, tag) in &draft.entries {
        *counts.entry(tag.key.as_str()).or_default() += 1;
    }
    flag(draft, TagError::DuplicateKey, |tag| {
        counts.get(tag.key.as_str()).copied().unwrap_or(0) > 1
    })
}

fn invalid_keys(draft: &TagDraft) -> Vec<RowError> {
    flag(draft, TagError::InvalidKey, |tag| !is_valid_key(&tag.key))
}

fn invalid_values(draft: &TagDraft) -> Vec<RowError> {
    flag(draft, TagError::InvalidValue, |tag| !is_valid_value(&tag.value))
}
