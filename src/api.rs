//! Backend seams: the management calls the console depends on.
//!
//! [`crate::AwsConsole`] implements both traits over the AWS SDK; tests
//! implement them in memory.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    CreatedProfile, FormFields, FoundationModelSummary, InferenceProfileSummary, Page,
    ProfileType, RegionEntry, Tag,
};

/// Account-level calls.
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// One page of the account's regions.
    async fn list_regions_page(&self, next_token: Option<String>) -> Result<Page<RegionEntry>>;
}

/// Bedrock control-plane calls, scoped to a region.
#[async_trait]
pub trait BedrockApi: Send + Sync {
    async fn list_inference_profiles_page(
        &self,
        region: &str,
        profile_type: ProfileType,
        next_token: Option<String>,
    ) -> Result<Page<InferenceProfileSummary>>;

    /// Foundation models that support on-demand inference.
    async fn list_foundation_models(&self, region: &str) -> Result<Vec<FoundationModelSummary>>;

    async fn list_tags_for_resource(&self, region: &str, arn: &str) -> Result<Vec<Tag>>;

    async fn create_inference_profile(
        &self,
        region: &str,
        fields: &FormFields,
    ) -> Result<CreatedProfile>;

    async fn delete_inference_profile(&self, region: &str, identifier: &str) -> Result<()>;
}

/// Everything the console needs from a backend.
pub trait ConsoleApi: AccountApi + BedrockApi {}

impl<T: AccountApi + BedrockApi> ConsoleApi for T {}
