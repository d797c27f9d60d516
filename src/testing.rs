//! In-memory backend used by the library's tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{AccountApi, BedrockApi};
use crate::error::{ConsoleError, Result};
use crate::types::{
    CreatedProfile, FormFields, FoundationModelSummary, InferenceProfileSummary, Page,
    ProfileModel, ProfileType, RegionEntry, Tag,
};

pub(crate) const FAILURE_MESSAGE: &str = "boom";

/// Scripted backend that records every call it receives.
///
/// Paged listings chain tokens `"page-1"`, `"page-2"`, ... through the
/// configured pages.
#[derive(Default)]
pub(crate) struct FakeConsole {
    region_pages: Vec<Vec<RegionEntry>>,
    profile_pages: HashMap<ProfileType, Vec<Vec<InferenceProfileSummary>>>,
    models: Vec<FoundationModelSummary>,
    tags: HashMap<String, Vec<Tag>>,
    failing: HashSet<&'static str>,
    calls: Mutex<Vec<String>>,
    pub created: Mutex<Vec<(String, FormFields)>>,
    pub deleted: Mutex<Vec<(String, String)>>,
}

impl FakeConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region_pages(mut self, pages: Vec<Vec<RegionEntry>>) -> Self {
        self.region_pages = pages;
        self
    }

    pub fn with_profile_pages(
        mut self,
        profile_type: ProfileType,
        pages: Vec<Vec<InferenceProfileSummary>>,
    ) -> Self {
        self.profile_pages.insert(profile_type, pages);
        self
    }

    pub fn with_models(mut self, models: Vec<FoundationModelSummary>) -> Self {
        self.models = models;
        self
    }

    pub fn with_tags(mut self, arn: &str, tags: Vec<Tag>) -> Self {
        self.tags.insert(arn.to_string(), tags);
        self
    }

    /// Makes every call to `operation` fail with [`FAILURE_MESSAGE`].
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    /// Number of recorded calls whose description starts with `operation`.
    pub fn calls(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .expect("calls lock")
            .iter()
            .filter(|call| call.starts_with(operation))
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }

    fn record(&self, operation: &'static str, detail: String) -> Result<()> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(format!("{operation}:{detail}"));
        if self.failing.contains(operation) {
            return Err(ConsoleError::api(operation, FAILURE_MESSAGE));
        }
        Ok(())
    }
}

fn serve<T: Clone>(pages: &[Vec<T>], token: Option<String>) -> Page<T> {
    let index = token
        .and_then(|t| t.strip_prefix("page-").and_then(|n| n.parse::<usize>().ok()))
        .unwrap_or(0);
    let items = pages.get(index).cloned().unwrap_or_default();
    let next = (index + 1 < pages.len()).then(|| format!("page-{}", index + 1));
    Page::new(items, next)
}

#[async_trait]
impl AccountApi for FakeConsole {
    async fn list_regions_page(&self, next_token: Option<String>) -> Result<Page<RegionEntry>> {
        self.record("ListRegions", format!("{next_token:?}"))?;
        Ok(serve(&self.region_pages, next_token))
    }
}

#[async_trait]
impl BedrockApi for FakeConsole {
    async fn list_inference_profiles_page(
        &self,
        region: &str,
        profile_type: ProfileType,
        next_token: Option<String>,
    ) -> Result<Page<InferenceProfileSummary>> {
        self.record(
            "ListInferenceProfiles",
            format!("{region}:{}:{next_token:?}", profile_type.as_str()),
        )?;
        let pages = self
            .profile_pages
            .get(&profile_type)
            .map(Vec::as_slice)
            .unwrap_or_default();
        Ok(serve(pages, next_token))
    }

    async fn list_foundation_models(&self, region: &str) -> Result<Vec<FoundationModelSummary>> {
        self.record("ListFoundationModels", region.to_string())?;
        Ok(self.models.clone())
    }

    async fn list_tags_for_resource(&self, region: &str, arn: &str) -> Result<Vec<Tag>> {
        self.record("ListTagsForResource", format!("{region}:{arn}"))?;
        Ok(self.tags.get(arn).cloned().unwrap_or_default())
    }

    async fn create_inference_profile(
        &self,
        region: &str,
        fields: &FormFields,
    ) -> Result<CreatedProfile> {
        self.record("CreateInferenceProfile", region.to_string())?;
        self.created
            .lock()
            .expect("created lock")
            .push((region.to_string(), fields.clone()));
        Ok(CreatedProfile {
            arn: format!(
                "arn:aws:bedrock:{region}:123456789012:application-inference-profile/{}",
                fields.inference_profile_name
            ),
            status: Some("ACTIVE".to_string()),
        })
    }

    async fn delete_inference_profile(&self, region: &str, identifier: &str) -> Result<()> {
        self.record("DeleteInferenceProfile", format!("{region}:{identifier}"))?;
        self.deleted
            .lock()
            .expect("deleted lock")
            .push((region.to_string(), identifier.to_string()));
        Ok(())
    }
}

pub(crate) fn profile(name: &str, profile_type: ProfileType) -> InferenceProfileSummary {
    let (kind, id) = match profile_type {
        ProfileType::Application => ("application-inference-profile", format!("{name}-id")),
        ProfileType::SystemDefined => ("inference-profile", format!("us.{name}")),
    };
    InferenceProfileSummary {
        arn: format!("arn:aws:bedrock:us-east-1:123456789012:{kind}/{id}"),
        id,
        name: name.to_string(),
        description: None,
        models: vec![ProfileModel {
            model_arn: Some(format!(
                "arn:aws:bedrock:us-east-1::foundation-model/{name}-model"
            )),
        }],
        profile_type,
        status: Some("ACTIVE".to_string()),
        created_at: None,
        updated_at: None,
    }
}

pub(crate) fn foundation_model(provider: &str, name: &str) -> FoundationModelSummary {
    let id = format!("{}.{}", provider.to_lowercase(), name.to_lowercase());
    FoundationModelSummary {
        model_arn: format!("arn:aws:bedrock:us-east-1::foundation-model/{id}"),
        model_id: id,
        model_name: Some(name.to_string()),
        provider_name: Some(provider.to_string()),
    }
}
