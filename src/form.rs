//! Create-profile form: field gates and the submit check.
//!
//! Text fields are committed as whole values (the console commits when the
//! cursor leaves a field). A value that fails its pattern is rejected: the
//! previously committed value stays and the field error is raised.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::tag_editor::{RowError, TagEditor};
use crate::types::{FormFields, ModelSource};

const NAME_PATTERN: &str = r"^[0-9a-zA-Z]([0-9a-zA-Z _-]*[0-9a-zA-Z])?$";
const DESCRIPTION_PATTERN: &str = r"^[0-9a-zA-Z:.][0-9a-zA-Z:. _-]*$";

static NAME_RE: OnceLock<Regex> = OnceLock::new();
static DESCRIPTION_RE: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Inference profile name may only contain letters, digits, spaces, '_' and '-'")]
    InvalidName,
    #[error("Description may only contain letters, digits, spaces and '_ - : .'")]
    InvalidDescription,
    #[error("Inference profile name is required")]
    NameRequired,
    #[error("Select a model source to copy from")]
    SourceRequired,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Field(FieldError),
    #[error("{} tag row(s) need attention", .0.len())]
    Tags(Vec<RowError>),
}

pub fn is_valid_name(name: &str) -> bool {
    NAME_RE
        .get_or_init(|| Regex::new(NAME_PATTERN).expect("name pattern compiles"))
        .is_match(name)
}

pub fn is_valid_description(description: &str) -> bool {
    DESCRIPTION_RE
        .get_or_init(|| Regex::new(DESCRIPTION_PATTERN).expect("description pattern compiles"))
        .is_match(description)
}

/// State of one create-form session.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    name: String,
    description: Option<String>,
    copy_from: Option<String>,
    tags: TagEditor,
    name_error: Option<FieldError>,
    description_error: Option<FieldError>,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn copy_from(&self) -> Option<&str> {
        self.copy_from.as_deref()
    }

    pub fn name_error(&self) -> Option<FieldError> {
        self.name_error
    }

    pub fn description_error(&self) -> Option<FieldError> {
        self.description_error
    }

    /// First outstanding field error, name before description.
    pub fn field_error(&self) -> Option<FieldError> {
        self.name_error.or(self.description_error)
    }

    /// Commits `name` if it matches the name pattern; otherwise the committed
    /// name is kept and the field error set. An empty name never matches.
    pub fn set_name(&mut self, name: &str) -> Result<(), FieldError> {
        if !is_valid_name(name) {
            self.name_error = Some(FieldError::InvalidName);
            return Err(FieldError::InvalidName);
        }
        self.name = name.to_string();
        self.name_error = None;
        Ok(())
    }

    /// Commits `description`; an empty string removes it.
    pub fn set_description(&mut self, description: &str) -> Result<(), FieldError> {
        if description.is_empty() {
            self.description = None;
            self.description_error = None;
            return Ok(());
        }
        if !is_valid_description(description) {
            self.description_error = Some(FieldError::InvalidDescription);
            return Err(FieldError::InvalidDescription);
        }
        self.description = Some(description.to_string());
        self.description_error = None;
        Ok(())
    }

    pub fn set_copy_from(&mut self, arn: impl Into<String>) {
        self.copy_from = Some(arn.into());
    }

    /// Selects the first source unless one is already chosen.
    pub fn default_source(&mut self, sources: &[ModelSource]) {
        if self.copy_from.is_none() {
            self.copy_from = sources.first().map(|source| source.arn.clone());
        }
    }

    pub fn tags(&self) -> &TagEditor {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut TagEditor {
        &mut self.tags
    }

    /// Checks the whole form and produces the request fields.
    ///
    /// Tag rows are validated only once the tag editor has been used.
    pub fn submit(&mut self) -> Result<FormFields, SubmitError> {
        if let Some(error) = self.field_error() {
            return Err(SubmitError::Field(error));
        }
        if self.name.is_empty() {
            self.name_error = Some(FieldError::NameRequired);
            return Err(SubmitError::Field(FieldError::NameRequired));
        }
        let Some(copy_from) = self.copy_from.clone() else {
            return Err(SubmitError::Field(FieldError::SourceRequired));
        };
        let tags = if self.tags.is_touched() {
            self.tags.validate().map_err(SubmitError::Tags)?;
            Some(self.tags.draft().tags()).filter(|tags| !tags.is_empty())
        } else {
            None
        };
        Ok(FormFields {
            inference_profile_name: self.name.clone(),
            description: self.description.clone(),
            copy_from,
            tags,
        })
    }
}
