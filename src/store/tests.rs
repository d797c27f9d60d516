use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;
use crate::error::ConsoleError;
use crate::form::{FieldError, SubmitError};
use crate::resources::{CreateOutcome, DeleteOutcome};
use crate::testing::{foundation_model, profile, FakeConsole};
use crate::types::{CreatedProfile, ModelSource, ProfileType, RegionEntry, RegionStatus, SourceKind};

fn only_profile_request(commands: &[Command]) -> RequestId {
    match commands {
        [Command::LoadProfiles { request, .. }] => *request,
        other => panic!("expected a single profile load, got {other:?}"),
    }
}

fn source(arn: &str) -> ModelSource {
    ModelSource {
        arn: arn.to_string(),
        label: arn.to_string(),
        kind: SourceKind::SystemProfile,
    }
}

/// Opens the create form with one loaded source and a valid name.
fn open_filled_form(state: &mut ConsoleState) {
    let commands = reduce(state, Action::OpenCreate);
    let [Command::LoadSources { request, .. }] = commands.as_slice() else {
        panic!("expected a source load, got {commands:?}");
    };
    reduce(
        state,
        Action::SourcesLoaded {
            request: *request,
            result: Ok(vec![source("arn:first"), source("arn:second")]),
        },
    );
    reduce(state, Action::Form(FormAction::SetName("team".into())));
}

fn submit(state: &mut ConsoleState) -> RequestId {
    match reduce(state, Action::SubmitCreate).as_slice() {
        [Command::Create { request, fields, .. }] => {
            assert_eq!(fields.copy_from, "arn:first");
            *request
        }
        other => panic!("expected a create, got {other:?}"),
    }
}

#[test]
fn start_loads_regions_and_profiles() {
    let mut state = ConsoleState::new("us-east-1");
    let commands = reduce(&mut state, Action::Start);
    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], Command::LoadRegions { .. }));
    assert!(matches!(
        &commands[1],
        Command::LoadProfiles { region, .. } if region == "us-east-1"
    ));
    assert!(state.regions.is_loading());
    assert!(state.profiles.is_loading());
    assert_ne!(commands[0].request(), commands[1].request());
}

#[test]
fn latest_profile_fetch_wins() {
    let mut state = ConsoleState::new("us-east-1");
    let first = only_profile_request(&reduce(&mut state, Action::SelectRegion("eu-west-1".into())));
    let second =
        only_profile_request(&reduce(&mut state, Action::SelectRegion("ap-northeast-1".into())));

    reduce(
        &mut state,
        Action::ProfilesLoaded {
            request: second,
            result: Ok(vec![profile("tokyo", ProfileType::Application)]),
        },
    );
    reduce(
        &mut state,
        Action::ProfilesLoaded {
            request: first,
            result: Ok(vec![profile("ireland", ProfileType::Application)]),
        },
    );

    let names: Vec<&str> = state
        .profiles
        .ready()
        .unwrap()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["tokyo"]);
    assert_eq!(state.region, "ap-northeast-1");
}

#[test]
fn stale_failure_does_not_replace_newer_fetch() {
    let mut state = ConsoleState::new("us-east-1");
    let first = only_profile_request(&reduce(&mut state, Action::Refetch));
    let second = only_profile_request(&reduce(&mut state, Action::Refetch));
    reduce(
        &mut state,
        Action::ProfilesLoaded {
            request: first,
            result: Err(ConsoleError::api("ListInferenceProfiles", "throttled")),
        },
    );
    assert!(state.profiles.waits_on(second));
}

#[test]
fn selecting_the_current_region_does_nothing() {
    let mut state = ConsoleState::new("us-east-1");
    assert!(reduce(&mut state, Action::SelectRegion("us-east-1".into())).is_empty());
}

#[test]
fn fetch_failure_is_shown_on_the_panel() {
    let mut state = ConsoleState::new("us-east-1");
    let request = only_profile_request(&reduce(&mut state, Action::Refetch));
    reduce(
        &mut state,
        Action::ProfilesLoaded {
            request,
            result: Err(ConsoleError::api("ListInferenceProfiles", "AccessDenied")),
        },
    );
    assert_eq!(
        state.profiles.error(),
        Some("ListInferenceProfiles failed: AccessDenied")
    );
    assert_eq!(state.error, None);
}

#[test]
fn sources_default_the_copy_source() {
    let mut state = ConsoleState::new("us-east-1");
    open_filled_form(&mut state);
    let Modal::Create(modal) = &state.modal else {
        panic!("create modal should be open");
    };
    assert_eq!(modal.form.copy_from(), Some("arn:first"));
    assert_eq!(modal.sources.ready().map(Vec::len), Some(2));
}

#[test]
fn create_success_closes_modal_and_refetches() {
    let mut state = ConsoleState::new("us-east-1");
    open_filled_form(&mut state);
    let request = submit(&mut state);
    assert!(state.is_busy());

    let commands = reduce(
        &mut state,
        Action::Created {
            request,
            result: Ok(CreateOutcome::Created(CreatedProfile {
                arn: "arn:new".into(),
                status: None,
            })),
        },
    );
    assert!(!state.modal.is_open());
    assert_eq!(state.creating, None);
    only_profile_request(&commands);
    assert!(state.profiles.is_loading());
}

#[test]
fn create_failure_keeps_modal_and_raises_error() {
    let mut state = ConsoleState::new("us-east-1");
    open_filled_form(&mut state);
    let request = submit(&mut state);

    let commands = reduce(
        &mut state,
        Action::Created {
            request,
            result: Err(ConsoleError::api("CreateInferenceProfile", "ConflictException")),
        },
    );
    assert!(commands.is_empty());
    assert!(matches!(state.modal, Modal::Create(_)));
    assert_eq!(
        state.error.as_deref(),
        Some("CreateInferenceProfile failed: ConflictException")
    );

    reduce(&mut state, Action::DismissError);
    assert_eq!(state.error, None);
    assert!(matches!(state.modal, Modal::Create(_)));
}

#[test]
fn skipped_create_keeps_modal_and_explains() {
    let mut state = ConsoleState::new("us-east-1");
    open_filled_form(&mut state);
    let request = submit(&mut state);

    let commands = reduce(
        &mut state,
        Action::Created {
            request,
            result: Ok(CreateOutcome::Skipped),
        },
    );
    assert!(commands.is_empty());
    assert!(matches!(state.modal, Modal::Create(_)));
    assert_eq!(state.creating, None);
    assert_eq!(state.error.as_deref(), Some("Nothing was created: no region is selected."));
}

#[test]
fn rejected_submit_is_recorded_on_the_modal() {
    let mut state = ConsoleState::new("us-east-1");
    reduce(&mut state, Action::OpenCreate);
    assert!(reduce(&mut state, Action::SubmitCreate).is_empty());
    let Modal::Create(modal) = &state.modal else {
        panic!("create modal should stay open");
    };
    assert_eq!(
        modal.submit_error,
        Some(SubmitError::Field(FieldError::NameRequired))
    );
    assert_eq!(state.creating, None);
}

#[test]
fn only_one_create_in_flight() {
    let mut state = ConsoleState::new("us-east-1");
    open_filled_form(&mut state);
    submit(&mut state);
    assert!(reduce(&mut state, Action::SubmitCreate).is_empty());

    reduce(&mut state, Action::Form(FormAction::SetName("other".into())));
    let Modal::Create(modal) = &state.modal else {
        panic!("create modal should be open");
    };
    assert_eq!(modal.form.name(), "team");
}

#[test]
fn modals_do_not_stack() {
    let mut state = ConsoleState::new("us-east-1");
    reduce(&mut state, Action::OpenCreate);
    let commands = reduce(
        &mut state,
        Action::ViewTags {
            arn: "arn:p".into(),
            name: "p".into(),
        },
    );
    assert!(commands.is_empty());
    reduce(
        &mut state,
        Action::RequestDelete {
            arn: "arn:p".into(),
            name: "p".into(),
        },
    );
    assert!(matches!(state.modal, Modal::Create(_)));
    assert!(reduce(&mut state, Action::SelectRegion("eu-west-1".into())).is_empty());
}

#[test]
fn tags_modal_loads_and_ignores_stale_results() {
    let mut state = ConsoleState::new("us-east-1");
    let commands = reduce(
        &mut state,
        Action::ViewTags {
            arn: "arn:p".into(),
            name: "p".into(),
        },
    );
    let [Command::LoadTags { request, arn, .. }] = commands.as_slice() else {
        panic!("expected a tag load, got {commands:?}");
    };
    assert_eq!(arn, "arn:p");
    let request = *request;

    reduce(&mut state, Action::CloseModal);
    reduce(
        &mut state,
        Action::TagsLoaded {
            request,
            result: Ok(vec![]),
        },
    );
    assert!(!state.modal.is_open());
}

#[test]
fn confirmed_delete_refetches_on_success() {
    let mut state = ConsoleState::new("us-east-1");
    reduce(
        &mut state,
        Action::RequestDelete {
            arn: "arn:p".into(),
            name: "p".into(),
        },
    );
    let commands = reduce(&mut state, Action::ConfirmDelete);
    let [Command::Delete { request, arn, .. }] = commands.as_slice() else {
        panic!("expected a delete, got {commands:?}");
    };
    assert_eq!(arn, "arn:p");
    assert!(!state.modal.is_open());

    let commands = reduce(
        &mut state,
        Action::Deleted {
            request: *request,
            result: Ok(DeleteOutcome::Deleted {
                identifier: "arn:p".into(),
            }),
        },
    );
    only_profile_request(&commands);
    assert_eq!(state.deleting, None);
}

#[test]
fn failed_delete_raises_error_and_keeps_list() {
    let mut state = ConsoleState::new("us-east-1");
    state.profiles = Panel::Ready(vec![profile("keep", ProfileType::Application)]);
    reduce(
        &mut state,
        Action::RequestDelete {
            arn: "arn:p".into(),
            name: "p".into(),
        },
    );
    let request = reduce(&mut state, Action::ConfirmDelete)[0].request();
    let commands = reduce(
        &mut state,
        Action::Deleted {
            request,
            result: Err(ConsoleError::api("DeleteInferenceProfile", "in use")),
        },
    );
    assert!(commands.is_empty());
    assert!(state.error.is_some());
    assert_eq!(state.profiles.ready().map(Vec::len), Some(1));
}

#[test]
fn confirm_without_pending_delete_keeps_other_modal() {
    let mut state = ConsoleState::new("us-east-1");
    reduce(&mut state, Action::OpenCreate);
    assert!(reduce(&mut state, Action::ConfirmDelete).is_empty());
    assert!(matches!(state.modal, Modal::Create(_)));
}

#[test]
fn subscribers_see_every_dispatch() {
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    let mut store = Store::new(ConsoleState::new("us-east-1"));
    store.subscribe(Box::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));
    store.dispatch(Action::Refetch);
    store.dispatch(Action::DismissError);
    assert_eq!(seen.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn settles_start_against_backend() {
    let api = FakeConsole::new()
        .with_region_pages(vec![
            vec![RegionEntry::new("us-east-1", Some(RegionStatus::EnabledByDefault))],
            vec![RegionEntry::new("me-south-1", Some(RegionStatus::Disabled))],
        ])
        .with_profile_pages(
            ProfileType::Application,
            vec![vec![profile("team", ProfileType::Application)]],
        );
    let mut store = Store::new(ConsoleState::new("us-east-1"));
    store.dispatch_and_settle(&api, Action::Start).await;

    let state = store.state();
    assert_eq!(state.regions.ready(), Some(&vec!["us-east-1".to_string()]));
    assert_eq!(state.profiles.ready().map(Vec::len), Some(1));
}

#[tokio::test]
async fn settles_create_flow_against_backend() {
    let api = FakeConsole::new()
        .with_profile_pages(
            ProfileType::SystemDefined,
            vec![vec![profile("claude", ProfileType::SystemDefined)]],
        )
        .with_models(vec![foundation_model("Amazon", "Nova")]);
    let mut store = Store::new(ConsoleState::new("us-west-2"));
    store.dispatch_and_settle(&api, Action::OpenCreate).await;
    store
        .dispatch_and_settle(&api, Action::Form(FormAction::SetName("team".into())))
        .await;
    store.dispatch_and_settle(&api, Action::SubmitCreate).await;

    let created = api.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].0, "us-west-2");
    assert!(created[0].1.copy_from.contains("inference-profile/us.claude"));
    assert!(!store.state().modal.is_open());
    assert_eq!(api.calls("ListInferenceProfiles:us-west-2:APPLICATION"), 1);
}
