//! Domain types shared by the resources layer, the store and the backends.
//!
//! These are decoupled from the AWS SDK shapes so the fetch and validation
//! logic can be exercised against in-memory backends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One page of a paginated listing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_token: Option<String>) -> Self {
        Self { items, next_token }
    }

    /// A terminal page: no continuation token.
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }
}

/// Opt-in status of an account region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegionStatus {
    Enabled,
    EnabledByDefault,
    Enabling,
    Disabling,
    Disabled,
    Other(String),
}

/// A region as reported by the account listing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub name: String,
    pub status: Option<RegionStatus>,
}

impl RegionEntry {
    pub fn new(name: impl Into<String>, status: Option<RegionStatus>) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    /// Regions with an empty name or a disabled/disabling opt status are not offered.
    pub fn is_selectable(&self) -> bool {
        !self.name.is_empty()
            && !matches!(
                self.status,
                Some(RegionStatus::Disabled) | Some(RegionStatus::Disabling)
            )
    }
}

/// Which kind of inference profile a listing call asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileType {
    Application,
    SystemDefined,
}

impl ProfileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Application => "APPLICATION",
            Self::SystemDefined => "SYSTEM_DEFINED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileModel {
    pub model_arn: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceProfileSummary {
    pub arn: String,
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub models: Vec<ProfileModel>,
    pub profile_type: ProfileType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl InferenceProfileSummary {
    /// Model ARNs referenced by the profile, skipping entries without one.
    pub fn model_arns(&self) -> impl Iterator<Item = &str> {
        self.models.iter().filter_map(|m| m.model_arn.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundationModelSummary {
    pub model_arn: String,
    pub model_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    SystemProfile,
    FoundationModel,
}

/// One option of the "copy from" selector of the create form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSource {
    pub arn: String,
    pub label: String,
    pub kind: SourceKind,
}

const PROFILE_ARN_MARKER: &str = "inference-profile/";
const MODEL_ARN_MARKER: &str = "foundation-model/";

fn arn_suffix<'a>(arn: &'a str, marker: &str) -> &'a str {
    arn.split_once(marker).map(|(_, tail)| tail).unwrap_or("")
}

impl From<&InferenceProfileSummary> for ModelSource {
    fn from(profile: &InferenceProfileSummary) -> Self {
        Self {
            arn: profile.arn.clone(),
            label: format!(
                "{} ({})",
                profile.name,
                arn_suffix(&profile.arn, PROFILE_ARN_MARKER)
            ),
            kind: SourceKind::SystemProfile,
        }
    }
}

impl From<&FoundationModelSummary> for ModelSource {
    fn from(model: &FoundationModelSummary) -> Self {
        Self {
            arn: model.model_arn.clone(),
            label: format!(
                "{} {} ({})",
                model.provider_name.as_deref().unwrap_or_default(),
                model.model_name.as_deref().unwrap_or_default(),
                arn_suffix(&model.model_arn, MODEL_ARN_MARKER)
            ),
            kind: SourceKind::FoundationModel,
        }
    }
}

/// Draft of a new application inference profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub inference_profile_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ARN of a system-defined profile or a foundation model.
    pub copy_from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedProfile {
    pub arn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
