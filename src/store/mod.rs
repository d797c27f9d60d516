//! Console state container.
//!
//! State changes happen only in [`reduce`], which turns an [`Action`] into a
//! new state plus the [`Command`]s to run. [`execute`] performs one command
//! against a backend and reports back with the matching result action.
//! [`Store`] ties the two together and notifies subscribers.

mod action;
mod container;
mod effects;
mod reducer;
mod state;

#[cfg(test)]
mod tests;

pub use action::{Action, Command, FormAction};
pub use container::{Store, Subscriber};
pub use effects::execute;
pub use reducer::reduce;
pub use state::{ConsoleState, CreateModal, DeleteTarget, Modal, Panel, RequestId, TagsModal};
