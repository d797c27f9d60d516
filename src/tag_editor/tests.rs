use super::*;
use crate::types::Tag;

fn editor_with(keys: &[(&str, &str)]) -> TagEditor {
    let mut editor = TagEditor::new();
    for (key, value) in keys {
        editor.add_row();
        let id = editor.rows().last().map(|row| row.id).unwrap();
        editor.update_key(id, key);
        editor.update_value(id, value);
    }
    editor
}

fn error_of(editor: &TagEditor, id: RowId) -> Option<TagError> {
    editor.row(id).and_then(|row| row.error)
}

#[test]
fn new_editor_is_untouched_and_empty() {
    let editor = TagEditor::new();
    assert!(!editor.is_touched());
    assert!(editor.draft().is_empty());
}

#[test]
fn add_row_ids_follow_the_maximum() {
    let mut editor = TagEditor::new();
    editor.add_row();
    editor.add_row();
    editor.add_row();
    let ids: Vec<RowId> = editor.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);

    editor.delete_row(0);
    editor.delete_row(2);
    editor.add_row();
    let ids: Vec<RowId> = editor.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);

    editor.delete_row(1);
    editor.delete_row(2);
    let draft = editor.add_row();
    assert_eq!(editor.rows()[0].id, 0);
    assert_eq!(draft.len(), 1);
    assert!(editor.is_touched());
}

#[test]
fn every_edit_returns_the_current_pairs() {
    let mut editor = TagEditor::new();
    editor.add_row();
    editor.update_key(0, "team");
    let draft = editor.update_value(0, "ml");
    assert_eq!(draft.tags(), vec![Tag::new("team", "ml")]);
    let draft = editor.delete_row(0);
    assert!(draft.tags().is_empty());
}

#[test]
fn invalid_key_is_committed_and_flagged() {
    let mut editor = editor_with(&[("team", "")]);
    let draft = editor.update_key(0, "team!");
    assert_eq!(draft.tags()[0].key, "team!");
    assert_eq!(error_of(&editor, 0), Some(TagError::InvalidKey));

    editor.update_key(0, "team");
    assert_eq!(error_of(&editor, 0), None);
}

#[test]
fn duplicate_key_is_flagged_against_other_rows_only() {
    let mut editor = editor_with(&[("a", "1"), ("b", "2")]);
    editor.update_key(1, "a");
    assert_eq!(error_of(&editor, 1), Some(TagError::DuplicateKey));

    // Re-typing a row's own key is not a duplicate.
    editor.update_key(0, "a");
    assert_eq!(error_of(&editor, 0), Some(TagError::DuplicateKey));
    editor.update_key(1, "c");
    assert_eq!(error_of(&editor, 1), None);
    assert_eq!(error_of(&editor, 0), None);
}

#[test]
fn deleting_a_duplicate_clears_its_partner() {
    let mut editor = editor_with(&[("a", "1"), ("b", "2")]);
    editor.update_key(1, "a");
    editor.validate().unwrap_err();
    assert_eq!(error_of(&editor, 0), Some(TagError::DuplicateKey));
    editor.delete_row(1);
    assert_eq!(error_of(&editor, 0), None);
}

#[test]
fn invalid_value_flag_clears_when_fixed() {
    let mut editor = editor_with(&[("a", "")]);
    editor.update_value(0, "trailing ");
    assert_eq!(error_of(&editor, 0), Some(TagError::InvalidValue));
    editor.update_value(0, "trailing");
    assert_eq!(error_of(&editor, 0), None);
}

#[test]
fn blur_on_empty_key_requires_a_key() {
    let mut editor = TagEditor::new();
    editor.add_row();
    editor.blur_key(0);
    assert_eq!(error_of(&editor, 0), Some(TagError::KeyRequired));

    // Editing continues normally afterwards.
    editor.update_key(0, "team");
    assert_eq!(error_of(&editor, 0), None);
    editor.blur_key(0);
    assert_eq!(error_of(&editor, 0), None);
}

#[test]
fn validate_marks_empty_keys() {
    let mut editor = editor_with(&[("", "x")]);
    let errors = editor.validate().unwrap_err();
    assert_eq!(
        errors,
        vec![RowError {
            id: 0,
            error: TagError::KeyRequired
        }]
    );
    assert_eq!(error_of(&editor, 0), Some(TagError::KeyRequired));
}

#[test]
fn validate_marks_both_duplicates() {
    let mut editor = editor_with(&[("a", "x"), ("a", "y")]);
    assert!(editor.validate().is_err());
    assert_eq!(error_of(&editor, 0), Some(TagError::DuplicateKey));
    assert_eq!(error_of(&editor, 1), Some(TagError::DuplicateKey));
}

#[test]
fn validate_passes_clean_rows() {
    let mut editor = editor_with(&[("a", "x")]);
    assert!(editor.validate().is_ok());
    assert_eq!(error_of(&editor, 0), None);
}

#[test]
fn unknown_row_ids_are_ignored() {
    let mut editor = editor_with(&[("a", "x")]);
    let draft = editor.update_key(42, "b");
    assert_eq!(draft.tags(), vec![Tag::new("a", "x")]);
    editor.blur_key(42);
    editor.delete_row(42);
    assert_eq!(editor.rows().len(), 1);
}
