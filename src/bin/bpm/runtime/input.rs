use bedrock_profiles::store::{Action, FormAction, Modal};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::controller::AppController;
use super::events::InputEvent;
use super::picker::{PickerItem, PickerState};
use super::state::{FormFocus, FormView};

enum Mode {
    Main,
    Create,
    ConfirmDelete,
    Tags,
}

pub fn handle_input(controller: &mut AppController, input: InputEvent) -> bool {
    match input {
        InputEvent::Resize(_, _) => true,
        InputEvent::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return false;
            }
            handle_key(controller, key);
            true
        }
    }
}

fn handle_key(controller: &mut AppController, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        controller.state.should_quit = true;
        return;
    }
    if controller.state.fatal.is_some() {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) {
            controller.state.should_quit = true;
        }
        return;
    }
    if controller.state.console().error.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            controller.dispatch(Action::DismissError);
        }
        return;
    }
    if controller.state.picker.is_some() {
        handle_picker_key(controller, key);
        return;
    }
    let mode = match &controller.state.console().modal {
        Modal::None => Mode::Main,
        Modal::Create(_) => Mode::Create,
        Modal::ConfirmDelete(_) => Mode::ConfirmDelete,
        Modal::Tags(_) => Mode::Tags,
    };
    match mode {
        Mode::Main => handle_main_key(controller, key),
        Mode::Create => handle_create_key(controller, key),
        Mode::ConfirmDelete => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => controller.dispatch(Action::ConfirmDelete),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                controller.dispatch(Action::CloseModal)
            }
            _ => {}
        },
        Mode::Tags => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                controller.dispatch(Action::CloseModal);
            }
        }
    }
}

fn handle_main_key(controller: &mut AppController, key: KeyEvent) {
    let state = &mut controller.state;
    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => state.selected = state.selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => {
            state.selected += 1;
            state.clamp_selection();
        }
        KeyCode::Char('r') => open_region_picker(controller),
        KeyCode::Char('R') | KeyCode::F(5) => controller.dispatch(Action::Refetch),
        KeyCode::Char('n') => {
            controller.state.form = FormView::default();
            controller.dispatch(Action::OpenCreate);
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(profile) = controller.state.selected_profile() {
                let action = Action::RequestDelete {
                    arn: profile.arn.clone(),
                    name: profile.name.clone(),
                };
                controller.dispatch(action);
            }
        }
        KeyCode::Char('t') | KeyCode::Enter => {
            if let Some(profile) = controller.state.selected_profile() {
                let action = Action::ViewTags {
                    arn: profile.arn.clone(),
                    name: profile.name.clone(),
                };
                controller.dispatch(action);
            }
        }
        _ => {}
    }
}

fn open_region_picker(controller: &mut AppController) {
    let console = controller.state.console();
    let Some(regions) = console.regions.ready() else {
        return;
    };
    let items = regions
        .iter()
        .map(|name| PickerItem {
            id: name.clone(),
            label: name.clone(),
            meta: (*name == console.region).then(|| "current".to_string()),
        })
        .collect();
    let mut picker = PickerState::new("Region", items);
    picker.select_id(&console.region);
    controller.state.picker = Some(picker);
}

fn handle_picker_key(controller: &mut AppController, key: KeyEvent) {
    let Some(picker) = controller.state.picker.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => controller.state.picker = None,
        KeyCode::Up => picker.prev(),
        KeyCode::Down => picker.next(),
        KeyCode::Backspace => picker.pop_query(),
        KeyCode::Char(ch) => picker.push_query(ch),
        KeyCode::Enter => {
            let region = picker.selected_item().map(|item| item.id.clone());
            controller.state.picker = None;
            if let Some(region) = region {
                controller.state.selected = 0;
                controller.dispatch(Action::SelectRegion(region));
            }
        }
        _ => {}
    }
}

fn handle_create_key(controller: &mut AppController, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => controller.dispatch(Action::CloseModal),
        KeyCode::Char('s') if ctrl => {
            commit_focused(controller);
            controller.dispatch(Action::SubmitCreate);
        }
        KeyCode::Char('n') if ctrl => {
            commit_focused(controller);
            controller.dispatch(Action::Form(FormAction::AddTag));
            if let Some(row) = controller.state.tag_rows().last() {
                controller.state.form.focus = FormFocus::TagKey(row.id);
            }
        }
        KeyCode::Char('d') if ctrl => {
            if let Some(id) = controller.state.form.focus.tag_row() {
                controller.dispatch(Action::Form(FormAction::DeleteTag(id)));
                controller.state.form.focus = FormFocus::Source;
            }
        }
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => move_focus(controller, true),
        KeyCode::BackTab | KeyCode::Up => move_focus(controller, false),
        KeyCode::Left | KeyCode::Right if controller.state.form.focus == FormFocus::Source => {
            cycle_source(controller, key.code == KeyCode::Right)
        }
        KeyCode::Backspace => edit_focused(controller, |text| {
            text.pop();
        }),
        KeyCode::Char(ch) if !ctrl => edit_focused(controller, |text| text.push(ch)),
        _ => {}
    }
}

fn move_focus(controller: &mut AppController, forward: bool) {
    commit_focused(controller);
    let rows = controller.state.tag_rows().to_vec();
    controller.state.form.step(&rows, forward);
}

/// Commits the focused text field as the cursor leaves it.
///
/// A field left as it was is not committed again, so tabbing through an
/// untouched form raises no errors.
fn commit_focused(controller: &mut AppController) {
    let form = &controller.state.form;
    let committed = match &controller.state.console().modal {
        Modal::Create(modal) => Some(&modal.form),
        _ => None,
    };
    let action = match form.focus {
        FormFocus::Name => {
            if committed.is_some_and(|c| c.name() == form.name && c.name_error().is_none()) {
                return;
            }
            FormAction::SetName(form.name.clone())
        }
        FormFocus::Description => {
            if committed.is_some_and(|c| {
                c.description().unwrap_or_default() == form.description
                    && c.description_error().is_none()
            }) {
                return;
            }
            FormAction::SetDescription(form.description.clone())
        }
        FormFocus::TagKey(id) => FormAction::BlurTagKey(id),
        FormFocus::Source | FormFocus::TagValue(_) => return,
    };
    controller.dispatch(Action::Form(action));
}

fn edit_focused(controller: &mut AppController, edit: impl FnOnce(&mut String)) {
    let form = &mut controller.state.form;
    let action = match form.focus {
        FormFocus::Name => {
            edit(&mut form.name);
            return;
        }
        FormFocus::Description => {
            edit(&mut form.description);
            return;
        }
        FormFocus::Source => return,
        FormFocus::TagKey(id) => {
            let Some(row) = controller.state.tag_rows().iter().find(|r| r.id == id) else {
                return;
            };
            let mut key = row.key.clone();
            edit(&mut key);
            FormAction::UpdateTagKey(id, key)
        }
        FormFocus::TagValue(id) => {
            let Some(row) = controller.state.tag_rows().iter().find(|r| r.id == id) else {
                return;
            };
            let mut value = row.value.clone();
            edit(&mut value);
            FormAction::UpdateTagValue(id, value)
        }
    };
    controller.dispatch(Action::Form(action));
}

fn cycle_source(controller: &mut AppController, forward: bool) {
    let Modal::Create(modal) = &controller.state.console().modal else {
        return;
    };
    let Some(sources) = modal.sources.ready().filter(|s| !s.is_empty()) else {
        return;
    };
    let len = sources.len();
    let current = modal
        .form
        .copy_from()
        .and_then(|arn| sources.iter().position(|s| s.arn == arn))
        .unwrap_or(0);
    let next = if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    };
    let arn = sources[next].arn.clone();
    controller.dispatch(Action::Form(FormAction::SetCopyFrom(arn)));
}
