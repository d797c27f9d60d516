use crate::api::BedrockApi;
use crate::error::Result;
use crate::types::Tag;

use super::is_unset;

/// Tags attached to the resource `arn`. Empty when either input is unset.
pub async fn list_tags<A>(api: &A, region: &str, arn: &str) -> Result<Vec<Tag>>
where
    A: BedrockApi + ?Sized,
{
    if is_unset(region) || arn.trim().is_empty() {
        return Ok(Vec::new());
    }
    api.list_tags_for_resource(region, arn).await
}
