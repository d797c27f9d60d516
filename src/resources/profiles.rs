use serde::Serialize;

use crate::api::BedrockApi;
use crate::error::{ConsoleError, Result};
use crate::pagination::fetch_all;
use crate::types::{CreatedProfile, FormFields, InferenceProfileSummary, ProfileType};

use super::is_unset;

/// Result of [`create_profile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CreateOutcome {
    /// No region or no draft; nothing was sent.
    Skipped,
    Created(CreatedProfile),
}

/// Result of [`delete_profile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// No identifier; nothing was sent.
    Skipped,
    Deleted { identifier: String },
}

/// Every inference profile of `profile_type` in `region`.
pub async fn list_profiles<A>(
    api: &A,
    region: &str,
    profile_type: ProfileType,
) -> Result<Vec<InferenceProfileSummary>>
where
    A: BedrockApi + ?Sized,
{
    if is_unset(region) {
        return Ok(Vec::new());
    }
    fetch_all(|token| api.list_inference_profiles_page(region, profile_type, token)).await
}

/// Creates an application inference profile from `draft`.
pub async fn create_profile<A>(
    api: &A,
    region: &str,
    draft: Option<&FormFields>,
) -> Result<CreateOutcome>
where
    A: BedrockApi + ?Sized,
{
    let Some(draft) = draft else {
        return Ok(CreateOutcome::Skipped);
    };
    if is_unset(region) {
        return Ok(CreateOutcome::Skipped);
    }
    log::info!(
        "creating inference profile {} in {region} from {}",
        draft.inference_profile_name,
        draft.copy_from
    );
    let created = api
        .create_inference_profile(region, draft)
        .await
        .inspect_err(|err| {
            log::error!(
                "failed to create inference profile {}: {err}",
                draft.inference_profile_name
            )
        })?;
    Ok(CreateOutcome::Created(created))
}

/// Deletes the inference profile `identifier` (ARN or id).
///
/// A blank identifier is a no-op, while a missing region is an error.
pub async fn delete_profile<A>(
    api: &A,
    region: &str,
    identifier: Option<&str>,
) -> Result<DeleteOutcome>
where
    A: BedrockApi + ?Sized,
{
    let Some(identifier) = identifier.filter(|id| !id.trim().is_empty()) else {
        return Ok(DeleteOutcome::Skipped);
    };
    if is_unset(region) {
        return Err(ConsoleError::MissingRegion);
    }
    log::info!("deleting inference profile {identifier} in {region}");
    api.delete_inference_profile(region, identifier)
        .await
        .inspect_err(|err| log::error!("failed to delete inference profile {identifier}: {err}"))?;
    Ok(DeleteOutcome::Deleted {
        identifier: identifier.to_string(),
    })
}
