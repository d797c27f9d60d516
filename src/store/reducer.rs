use crate::resources::CreateOutcome;

use super::action::{Action, Command, FormAction};
use super::state::{ConsoleState, CreateModal, DeleteTarget, Modal, Panel, TagsModal};

const NOTHING_CREATED: &str = "Nothing was created: no region is selected.";

/// Applies `action` to `state` and returns the commands it triggers.
pub fn reduce(state: &mut ConsoleState, action: Action) -> Vec<Command> {
    match action {
        Action::Start => {
            let request = state.next_request();
            state.regions = Panel::Loading(request);
            vec![Command::LoadRegions { request }, load_profiles(state)]
        }
        Action::RegionsLoaded { request, result } => {
            if state.regions.waits_on(request) {
                state.regions = settle(result);
            }
            Vec::new()
        }
        Action::SelectRegion(region) => {
            if region == state.region || state.modal.is_open() {
                return Vec::new();
            }
            log::debug!("region changed to {region}");
            state.region = region;
            vec![load_profiles(state)]
        }
        Action::Refetch => vec![load_profiles(state)],
        Action::ProfilesLoaded { request, result } => {
            if state.profiles.waits_on(request) {
                state.profiles = settle(result);
            } else {
                log::debug!("dropping superseded profile listing {request}");
            }
            Vec::new()
        }
        Action::ViewTags { arn, name } => {
            if state.modal.is_open() {
                return Vec::new();
            }
            let request = state.next_request();
            state.modal = Modal::Tags(TagsModal {
                arn: arn.clone(),
                name,
                tags: Panel::Loading(request),
            });
            vec![Command::LoadTags {
                request,
                region: state.region.clone(),
                arn,
            }]
        }
        Action::TagsLoaded { request, result } => {
            if let Modal::Tags(modal) = &mut state.modal {
                if modal.tags.waits_on(request) {
                    modal.tags = settle(result);
                }
            }
            Vec::new()
        }
        Action::OpenCreate => {
            if state.modal.is_open() || state.creating.is_some() {
                return Vec::new();
            }
            let request = state.next_request();
            state.modal = Modal::Create(Box::new(CreateModal {
                form: Default::default(),
                sources: Panel::Loading(request),
                submit_error: None,
            }));
            vec![Command::LoadSources {
                request,
                region: state.region.clone(),
            }]
        }
        Action::SourcesLoaded { request, result } => {
            if let Modal::Create(modal) = &mut state.modal {
                if modal.sources.waits_on(request) {
                    if let Ok(sources) = &result {
                        modal.form.default_source(sources);
                    }
                    modal.sources = settle(result);
                }
            }
            Vec::new()
        }
        Action::Form(edit) => {
            if state.creating.is_none() {
                if let Modal::Create(modal) = &mut state.modal {
                    apply_form(modal, edit);
                }
            }
            Vec::new()
        }
        Action::SubmitCreate => submit_create(state),
        Action::Created { request, result } => {
            if state.creating != Some(request) {
                return Vec::new();
            }
            state.creating = None;
            match result {
                Ok(CreateOutcome::Created(created)) => {
                    log::info!("created inference profile {}", created.arn);
                    if matches!(state.modal, Modal::Create(_)) {
                        state.modal = Modal::None;
                    }
                    vec![load_profiles(state)]
                }
                Ok(CreateOutcome::Skipped) => {
                    log::warn!("create request was skipped; no region selected");
                    state.error = Some(NOTHING_CREATED.to_string());
                    Vec::new()
                }
                Err(err) => {
                    state.error = Some(err.to_string());
                    Vec::new()
                }
            }
        }
        Action::RequestDelete { arn, name } => {
            if state.modal.is_open() || state.deleting.is_some() {
                return Vec::new();
            }
            state.modal = Modal::ConfirmDelete(DeleteTarget { arn, name });
            Vec::new()
        }
        Action::ConfirmDelete => {
            if !matches!(state.modal, Modal::ConfirmDelete(_)) {
                return Vec::new();
            }
            let Modal::ConfirmDelete(target) = std::mem::take(&mut state.modal) else {
                return Vec::new();
            };
            let request = state.next_request();
            state.deleting = Some(request);
            vec![Command::Delete {
                request,
                region: state.region.clone(),
                arn: target.arn,
            }]
        }
        Action::Deleted { request, result } => {
            if state.deleting != Some(request) {
                return Vec::new();
            }
            state.deleting = None;
            match result {
                Ok(_) => vec![load_profiles(state)],
                Err(err) => {
                    state.error = Some(err.to_string());
                    Vec::new()
                }
            }
        }
        Action::CloseModal => {
            state.modal = Modal::None;
            Vec::new()
        }
        Action::DismissError => {
            state.error = None;
            Vec::new()
        }
    }
}

fn load_profiles(state: &mut ConsoleState) -> Command {
    let request = state.next_request();
    state.profiles = Panel::Loading(request);
    Command::LoadProfiles {
        request,
        region: state.region.clone(),
    }
}

fn settle<T>(result: crate::error::Result<T>) -> Panel<T> {
    match result {
        Ok(value) => Panel::Ready(value),
        Err(err) => Panel::Failed(err.to_string()),
    }
}

fn apply_form(modal: &mut CreateModal, edit: FormAction) {
    let form = &mut modal.form;
    // Field errors are kept on the form itself.
    match edit {
        FormAction::SetName(name) => {
            let _ = form.set_name(&name);
        }
        FormAction::SetDescription(description) => {
            let _ = form.set_description(&description);
        }
        FormAction::SetCopyFrom(arn) => form.set_copy_from(arn),
        FormAction::AddTag => {
            form.tags_mut().add_row();
        }
        FormAction::UpdateTagKey(id, key) => {
            form.tags_mut().update_key(id, &key);
        }
        FormAction::UpdateTagValue(id, value) => {
            form.tags_mut().update_value(id, &value);
        }
        FormAction::BlurTagKey(id) => form.tags_mut().blur_key(id),
        FormAction::DeleteTag(id) => {
            form.tags_mut().delete_row(id);
        }
    }
}

fn submit_create(state: &mut ConsoleState) -> Vec<Command> {
    if state.creating.is_some() {
        return Vec::new();
    }
    let Modal::Create(modal) = &mut state.modal else {
        return Vec::new();
    };
    match modal.form.submit() {
        Ok(fields) => {
            modal.submit_error = None;
            let request = state.next_request();
            state.creating = Some(request);
            vec![Command::Create {
                request,
                region: state.region.clone(),
                fields,
            }]
        }
        Err(err) => {
            modal.submit_error = Some(err);
            Vec::new()
        }
    }
}
