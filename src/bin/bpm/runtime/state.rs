use bedrock_profiles::store::{ConsoleState, Modal, Store};
use bedrock_profiles::tag_editor::{RowId, TagRow};
use bedrock_profiles::types::InferenceProfileSummary;

use super::picker::PickerState;

/// Field of the create form that receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Name,
    Description,
    Source,
    TagKey(RowId),
    TagValue(RowId),
}

impl FormFocus {
    pub fn tag_row(self) -> Option<RowId> {
        match self {
            Self::TagKey(id) | Self::TagValue(id) => Some(id),
            _ => None,
        }
    }
}

/// Text typed into the create form that has not been committed yet.
#[derive(Debug, Clone, Default)]
pub struct FormView {
    pub focus: FormFocus,
    pub name: String,
    pub description: String,
}

impl FormView {
    /// Focus order: the fixed fields, then key and value of each tag row.
    pub fn order(rows: &[TagRow]) -> Vec<FormFocus> {
        let mut order = vec![FormFocus::Name, FormFocus::Description, FormFocus::Source];
        for row in rows {
            order.push(FormFocus::TagKey(row.id));
            order.push(FormFocus::TagValue(row.id));
        }
        order
    }

    pub fn step(&mut self, rows: &[TagRow], forward: bool) {
        let order = Self::order(rows);
        let len = order.len();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (pos + 1) % len
        } else {
            (pos + len - 1) % len
        };
        self.focus = order[next];
    }
}

pub struct AppState {
    pub store: Store,
    pub theme: String,
    /// Startup failure that blocks every API call
    pub fatal: Option<String>,
    pub selected: usize,
    pub picker: Option<PickerState>,
    pub form: FormView,
    pub spinner: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(region: String, theme: String, fatal: Option<String>) -> Self {
        let mut store = Store::new(ConsoleState::new(region));
        store.subscribe(Box::new(|state| {
            log::trace!(
                "state: region={} modal_open={} busy={} error={}",
                state.region,
                state.modal.is_open(),
                state.is_busy(),
                state.error.is_some()
            )
        }));
        Self {
            store,
            theme,
            fatal,
            selected: 0,
            picker: None,
            form: FormView::default(),
            spinner: 0,
            should_quit: false,
        }
    }

    pub fn console(&self) -> &ConsoleState {
        self.store.state()
    }

    pub fn profiles(&self) -> &[InferenceProfileSummary] {
        self.console()
            .profiles
            .ready()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn selected_profile(&self) -> Option<&InferenceProfileSummary> {
        self.profiles().get(self.selected)
    }

    pub fn tag_rows(&self) -> &[TagRow] {
        match &self.console().modal {
            Modal::Create(modal) => modal.form.tags().rows(),
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        let console = self.console();
        let modal_loading = match &console.modal {
            Modal::Create(modal) => modal.sources.is_loading(),
            Modal::Tags(modal) => modal.tags.is_loading(),
            _ => false,
        };
        console.regions.is_loading()
            || console.profiles.is_loading()
            || console.is_busy()
            || modal_loading
    }

    pub fn clamp_selection(&mut self) {
        let len = self.profiles().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
