//! Row-based tag editor used while drafting a new inference profile.
//!
//! The editor owns its rows and hands out a [`TagDraft`] snapshot after every
//! edit. Submission runs [`validate`] on a draft explicitly, and the editor
//! copies any resulting [`RowError`]s onto its rows for display.

mod editor;
mod rules;
mod validate;

#[cfg(test)]
mod tests;

pub use editor::{TagEditor, TagRow};
pub use rules::{is_valid_key, is_valid_value, TagError, MAX_KEY_LEN, MAX_VALUE_LEN};
pub use validate::{validate, RowError, RowId, TagDraft};
