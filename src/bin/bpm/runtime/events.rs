use bedrock_profiles::store::Action;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

#[derive(Debug)]
pub enum AppEvent {
    Input(InputEvent),
    Tick,
    /// Result of a spawned command, fed back into the store
    Action(Action),
}
