// src/backends/aws/mod.rs
//! AWS backend implementation
//!
//! This module implements the console's backend seams over the AWS SDK:
//! - Region listing through the Account API
//! - Inference profile listing, creation and deletion through the Bedrock control plane
//! - Foundation model and resource tag listing

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_account::Client as AccountClient;
use aws_sdk_bedrock::{
    types::{InferenceProfileModelSource, InferenceType, Tag as SdkTag},
    Client as BedrockClient,
};
use tokio::sync::{Mutex, OnceCell};

use crate::api::{AccountApi, BedrockApi};
use crate::credentials::Credentials;
use crate::error::Result;
use crate::types::{
    CreatedProfile, FormFields, FoundationModelSummary, InferenceProfileSummary, Page,
    ProfileType, RegionEntry, Tag,
};

mod convert;
mod error;

use error::{build_error, sdk_error};

/// AWS management client set.
///
/// The Account client is built on first use against the home region. Bedrock
/// clients are built on first use per region and cached; they are cheap to
/// clone.
#[derive(Debug)]
pub struct AwsConsole {
    credentials: Credentials,
    home_region: String,
    account: OnceCell<AccountClient>,
    bedrock: Mutex<HashMap<String, BedrockClient>>,
}

impl AwsConsole {
    pub fn new(credentials: Credentials, home_region: impl Into<String>) -> Self {
        Self {
            credentials,
            home_region: home_region.into(),
            account: OnceCell::new(),
            bedrock: Mutex::new(HashMap::new()),
        }
    }

    /// Get the region used for account-level calls
    pub fn home_region(&self) -> &str {
        &self.home_region
    }

    async fn sdk_config(&self, region: &str) -> SdkConfig {
        aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .credentials_provider(self.credentials.to_sdk())
            .load()
            .await
    }

    async fn account_client(&self) -> &AccountClient {
        self.account
            .get_or_init(|| async {
                let config = self.sdk_config(&self.home_region).await;
                AccountClient::new(&config)
            })
            .await
    }

    async fn bedrock_client(&self, region: &str) -> BedrockClient {
        let mut clients = self.bedrock.lock().await;
        if let Some(client) = clients.get(region) {
            return client.clone();
        }
        log::debug!("creating Bedrock client for {region}");
        let config = self.sdk_config(region).await;
        let client = BedrockClient::new(&config);
        clients.insert(region.to_string(), client.clone());
        client
    }
}

#[async_trait]
impl AccountApi for AwsConsole {
    async fn list_regions_page(&self, next_token: Option<String>) -> Result<Page<RegionEntry>> {
        let output = self
            .account_client()
            .await
            .list_regions()
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| sdk_error("ListRegions", e))?;
        Ok(Page::new(
            output.regions().iter().map(convert::region_entry).collect(),
            output.next_token().map(str::to_string),
        ))
    }
}

#[async_trait]
impl BedrockApi for AwsConsole {
    async fn list_inference_profiles_page(
        &self,
        region: &str,
        profile_type: ProfileType,
        next_token: Option<String>,
    ) -> Result<Page<InferenceProfileSummary>> {
        let output = self
            .bedrock_client(region)
            .await
            .list_inference_profiles()
            .type_equals(profile_type.into())
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| sdk_error("ListInferenceProfiles", e))?;
        Ok(Page::new(
            output
                .inference_profile_summaries()
                .iter()
                .map(convert::profile_summary)
                .collect(),
            output.next_token().map(str::to_string),
        ))
    }

    async fn list_foundation_models(&self, region: &str) -> Result<Vec<FoundationModelSummary>> {
        let output = self
            .bedrock_client(region)
            .await
            .list_foundation_models()
            .by_inference_type(InferenceType::OnDemand)
            .send()
            .await
            .map_err(|e| sdk_error("ListFoundationModels", e))?;
        Ok(output
            .model_summaries()
            .iter()
            .map(convert::foundation_model)
            .collect())
    }

    async fn list_tags_for_resource(&self, region: &str, arn: &str) -> Result<Vec<Tag>> {
        let output = self
            .bedrock_client(region)
            .await
            .list_tags_for_resource()
            .resource_arn(arn)
            .send()
            .await
            .map_err(|e| sdk_error("ListTagsForResource", e))?;
        Ok(output.tags().iter().map(convert::tag).collect())
    }

    async fn create_inference_profile(
        &self,
        region: &str,
        fields: &FormFields,
    ) -> Result<CreatedProfile> {
        let tags = fields
            .tags
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|tag| {
                SdkTag::builder()
                    .key(&tag.key)
                    .value(&tag.value)
                    .build()
                    .map_err(build_error)
            })
            .collect::<Result<Vec<_>>>()?;

        let output = self
            .bedrock_client(region)
            .await
            .create_inference_profile()
            .inference_profile_name(&fields.inference_profile_name)
            .set_description(fields.description.clone())
            .model_source(InferenceProfileModelSource::CopyFrom(
                fields.copy_from.clone(),
            ))
            .set_tags((!tags.is_empty()).then_some(tags))
            .send()
            .await
            .map_err(|e| sdk_error("CreateInferenceProfile", e))?;
        Ok(CreatedProfile {
            arn: output.inference_profile_arn().to_string(),
            status: output.status().map(|s| s.as_str().to_string()),
        })
    }

    async fn delete_inference_profile(&self, region: &str, identifier: &str) -> Result<()> {
        self.bedrock_client(region)
            .await
            .delete_inference_profile()
            .inference_profile_identifier(identifier)
            .send()
            .await
            .map_err(|e| sdk_error("DeleteInferenceProfile", e))?;
        Ok(())
    }
}
