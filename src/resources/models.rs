use crate::api::BedrockApi;
use crate::error::Result;
use crate::types::{FoundationModelSummary, ModelSource, ProfileType};

use super::{is_unset, list_profiles};

/// On-demand foundation models available in `region`.
pub async fn list_foundation_models<A>(api: &A, region: &str) -> Result<Vec<FoundationModelSummary>>
where
    A: BedrockApi + ?Sized,
{
    if is_unset(region) {
        return Ok(Vec::new());
    }
    api.list_foundation_models(region).await
}

/// Options for the "copy from" selector: system-defined profiles first, then
/// foundation models. Both listings run concurrently; either failing fails
/// the whole lookup.
pub async fn list_model_sources<A>(api: &A, region: &str) -> Result<Vec<ModelSource>>
where
    A: BedrockApi + ?Sized,
{
    let (profiles, models) = futures::try_join!(
        list_profiles(api, region, ProfileType::SystemDefined),
        list_foundation_models(api, region),
    )?;
    Ok(profiles
        .iter()
        .map(ModelSource::from)
        .chain(models.iter().map(ModelSource::from))
        .collect())
}
