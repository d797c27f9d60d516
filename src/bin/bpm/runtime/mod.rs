pub mod controller;
mod events;
mod input;
mod picker;
mod runner;
mod state;
mod terminal;

pub use picker::{PickerItem, PickerState};
pub use runner::run_app;
pub use state::{AppState, FormFocus, FormView};
pub use terminal::{init_terminal, restore_terminal};
