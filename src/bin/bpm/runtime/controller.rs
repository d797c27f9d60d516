use std::sync::Arc;

use bedrock_profiles::store::{execute, Action, Command};
use bedrock_profiles::ConsoleApi;
use tokio::sync::mpsc;

use super::events::AppEvent;
use super::input;
use super::state::AppState;

pub struct AppController {
    pub state: AppState,
    api: Option<Arc<dyn ConsoleApi>>,
    event_sender: mpsc::Sender<AppEvent>,
}

impl AppController {
    /// `api` is `None` when startup failed; nothing is ever sent then.
    pub fn new(
        state: AppState,
        api: Option<Arc<dyn ConsoleApi>>,
        event_sender: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            state,
            api,
            event_sender,
        }
    }

    pub fn start(&mut self) {
        if self.api.is_some() {
            self.dispatch(Action::Start);
        }
    }

    /// Returns true when the screen needs a redraw.
    pub async fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Input(input) => input::handle_input(self, input),
            AppEvent::Action(action) => {
                self.dispatch(action);
                true
            }
            AppEvent::Tick => {
                if self.state.is_loading() {
                    self.state.spinner = self.state.spinner.wrapping_add(1);
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        let commands = self.state.store.dispatch(action);
        for command in commands {
            self.spawn(command);
        }
        self.state.clamp_selection();
    }

    fn spawn(&self, command: Command) {
        let Some(api) = self.api.clone() else {
            return;
        };
        let sender = self.event_sender.clone();
        log::debug!("running {:?}", command.request());
        tokio::spawn(async move {
            let action = execute(api.as_ref(), command).await;
            let _ = sender.send(AppEvent::Action(action)).await;
        });
    }
}
