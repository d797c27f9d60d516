use std::fmt;

use crate::form::{ProfileForm, SubmitError};
use crate::types::{InferenceProfileSummary, ModelSource, Tag};

/// Identifies one issued fetch or mutation.
///
/// Results carry the id they were issued with; a result is applied only
/// while its panel still waits on that id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of one fetched collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Panel<T> {
    #[default]
    Idle,
    Loading(RequestId),
    Ready(T),
    Failed(String),
}

impl<T> Panel<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    pub fn waits_on(&self, request: RequestId) -> bool {
        matches!(self, Self::Loading(id) if *id == request)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateModal {
    pub form: ProfileForm,
    pub sources: Panel<Vec<ModelSource>>,
    /// Last rejected submit, shown until the next submit attempt.
    pub submit_error: Option<SubmitError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub arn: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagsModal {
    pub arn: String,
    pub name: String,
    pub tags: Panel<Vec<Tag>>,
}

#[derive(Debug, Clone, Default)]
pub enum Modal {
    #[default]
    None,
    Create(Box<CreateModal>),
    ConfirmDelete(DeleteTarget),
    Tags(TagsModal),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Everything the console renders.
#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    pub region: String,
    pub regions: Panel<Vec<String>>,
    pub profiles: Panel<Vec<InferenceProfileSummary>>,
    pub modal: Modal,
    /// Mutation failure shown in the error modal.
    pub error: Option<String>,
    pub creating: Option<RequestId>,
    pub deleting: Option<RequestId>,
    next_request: u64,
}

impl ConsoleState {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Self::default()
        }
    }

    pub(crate) fn next_request(&mut self) -> RequestId {
        self.next_request += 1;
        RequestId(self.next_request)
    }

    pub fn is_busy(&self) -> bool {
        self.creating.is_some() || self.deleting.is_some()
    }
}
