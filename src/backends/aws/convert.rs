// src/backends/aws/convert.rs
//! Conversions from AWS SDK shapes to console domain types

use aws_sdk_account::types::{Region as SdkRegion, RegionOptStatus};
use aws_sdk_bedrock::types::{
    FoundationModelSummary as SdkFoundationModel, InferenceProfileSummary as SdkProfileSummary,
    InferenceProfileType, Tag as SdkTag,
};
use chrono::{DateTime, Utc};

use crate::types::{
    FoundationModelSummary, InferenceProfileSummary, ProfileModel, ProfileType, RegionEntry,
    RegionStatus, Tag,
};

impl From<&RegionOptStatus> for RegionStatus {
    fn from(status: &RegionOptStatus) -> Self {
        match status {
            RegionOptStatus::Enabled => Self::Enabled,
            RegionOptStatus::EnabledByDefault => Self::EnabledByDefault,
            RegionOptStatus::Enabling => Self::Enabling,
            RegionOptStatus::Disabling => Self::Disabling,
            RegionOptStatus::Disabled => Self::Disabled,
            other => Self::Other(other.as_str().to_string()),
        }
    }
}

pub(super) fn region_entry(region: &SdkRegion) -> RegionEntry {
    RegionEntry::new(
        region.region_name().unwrap_or_default(),
        region.region_opt_status().map(RegionStatus::from),
    )
}

impl From<ProfileType> for InferenceProfileType {
    fn from(profile_type: ProfileType) -> Self {
        match profile_type {
            ProfileType::Application => InferenceProfileType::Application,
            ProfileType::SystemDefined => InferenceProfileType::SystemDefined,
        }
    }
}

fn timestamp(value: Option<&aws_smithy_types::DateTime>) -> Option<DateTime<Utc>> {
    value.and_then(|dt| DateTime::from_timestamp(dt.secs(), dt.subsec_nanos()))
}

pub(super) fn profile_summary(summary: &SdkProfileSummary) -> InferenceProfileSummary {
    let profile_type = match summary.r#type() {
        InferenceProfileType::Application => ProfileType::Application,
        _ => ProfileType::SystemDefined,
    };
    InferenceProfileSummary {
        arn: summary.inference_profile_arn().to_string(),
        id: summary.inference_profile_id().to_string(),
        name: summary.inference_profile_name().to_string(),
        description: summary.description().map(str::to_string),
        models: summary
            .models()
            .iter()
            .map(|model| ProfileModel {
                model_arn: model.model_arn().map(str::to_string),
            })
            .collect(),
        profile_type,
        status: Some(summary.status().as_str().to_string()),
        created_at: timestamp(summary.created_at()),
        updated_at: timestamp(summary.updated_at()),
    }
}

pub(super) fn tag(tag: &SdkTag) -> Tag {
    Tag::new(tag.key(), tag.value())
}

pub(super) fn foundation_model(model: &SdkFoundationModel) -> FoundationModelSummary {
    FoundationModelSummary {
        model_arn: model.model_arn().to_string(),
        model_id: model.model_id().to_string(),
        model_name: model.model_name().map(str::to_string),
        provider_name: model.provider_name().map(str::to_string),
    }
}
