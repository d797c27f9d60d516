use crate::api::ConsoleApi;

use super::action::{Action, Command};
use super::effects::execute;
use super::reducer::reduce;
use super::state::ConsoleState;

/// Called with the new state after every dispatched action.
pub type Subscriber = Box<dyn Fn(&ConsoleState) + Send + Sync>;

/// Owns the console state and its subscribers.
pub struct Store {
    state: ConsoleState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    pub fn new(state: ConsoleState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    pub fn subscribe(&mut self, subscriber: Subscriber) -> &mut Self {
        self.subscribers.push(subscriber);
        self
    }

    /// Reduces `action` and notifies subscribers; the returned commands are
    /// the caller's to run.
    pub fn dispatch(&mut self, action: Action) -> Vec<Command> {
        let commands = reduce(&mut self.state, action);
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
        commands
    }

    /// Dispatches `action`, then runs every resulting command in order and
    /// dispatches its result, until nothing is left to run.
    pub async fn dispatch_and_settle<A>(&mut self, api: &A, action: Action)
    where
        A: ConsoleApi + ?Sized,
    {
        let mut pending = self.dispatch(action);
        while !pending.is_empty() {
            let mut next = Vec::new();
            for command in pending {
                let result = execute(api, command).await;
                next.extend(self.dispatch(result));
            }
            pending = next;
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
