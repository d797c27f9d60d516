use crate::error::Result;
use crate::resources::{CreateOutcome, DeleteOutcome};
use crate::tag_editor::RowId;
use crate::types::{FormFields, InferenceProfileSummary, ModelSource, Tag};

use super::state::RequestId;

/// Edits to the open create form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetName(String),
    SetDescription(String),
    SetCopyFrom(String),
    AddTag,
    UpdateTagKey(RowId, String),
    UpdateTagValue(RowId, String),
    BlurTagKey(RowId),
    DeleteTag(RowId),
}

/// Everything that can change the console state.
///
/// `*Loaded`, `Created` and `Deleted` carry the results of commands; the
/// rest come from the user.
#[derive(Debug, Clone)]
pub enum Action {
    Start,
    RegionsLoaded {
        request: RequestId,
        result: Result<Vec<String>>,
    },
    SelectRegion(String),
    Refetch,
    ProfilesLoaded {
        request: RequestId,
        result: Result<Vec<InferenceProfileSummary>>,
    },
    ViewTags {
        arn: String,
        name: String,
    },
    TagsLoaded {
        request: RequestId,
        result: Result<Vec<Tag>>,
    },
    OpenCreate,
    SourcesLoaded {
        request: RequestId,
        result: Result<Vec<ModelSource>>,
    },
    Form(FormAction),
    SubmitCreate,
    Created {
        request: RequestId,
        result: Result<CreateOutcome>,
    },
    RequestDelete {
        arn: String,
        name: String,
    },
    ConfirmDelete,
    Deleted {
        request: RequestId,
        result: Result<DeleteOutcome>,
    },
    CloseModal,
    DismissError,
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadRegions {
        request: RequestId,
    },
    LoadProfiles {
        request: RequestId,
        region: String,
    },
    LoadTags {
        request: RequestId,
        region: String,
        arn: String,
    },
    LoadSources {
        request: RequestId,
        region: String,
    },
    Create {
        request: RequestId,
        region: String,
        fields: FormFields,
    },
    Delete {
        request: RequestId,
        region: String,
        arn: String,
    },
}

impl Command {
    pub fn request(&self) -> RequestId {
        match self {
            Self::LoadRegions { request }
            | Self::LoadProfiles { request, .. }
            | Self::LoadTags { request, .. }
            | Self::LoadSources { request, .. }
            | Self::Create { request, .. }
            | Self::Delete { request, .. } => *request,
        }
    }
}
