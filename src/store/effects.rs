use crate::api::ConsoleApi;
use crate::resources;
use crate::types::ProfileType;

use super::action::{Action, Command};

/// Runs one command against `api` and wraps the outcome in its result action.
pub async fn execute<A>(api: &A, command: Command) -> Action
where
    A: ConsoleApi + ?Sized,
{
    match command {
        Command::LoadRegions { request } => Action::RegionsLoaded {
            request,
            result: resources::list_regions(api).await,
        },
        Command::LoadProfiles { request, region } => Action::ProfilesLoaded {
            request,
            result: resources::list_profiles(api, &region, ProfileType::Application).await,
        },
        Command::LoadTags {
            request,
            region,
            arn,
        } => Action::TagsLoaded {
            request,
            result: resources::list_tags(api, &region, &arn).await,
        },
        Command::LoadSources { request, region } => Action::SourcesLoaded {
            request,
            result: resources::list_model_sources(api, &region).await,
        },
        Command::Create {
            request,
            region,
            fields,
        } => Action::Created {
            request,
            result: resources::create_profile(api, &region, Some(&fields)).await,
        },
        Command::Delete {
            request,
            region,
            arn,
        } => Action::Deleted {
            request,
            result: resources::delete_profile(api, &region, Some(&arn)).await,
        },
    }
}
