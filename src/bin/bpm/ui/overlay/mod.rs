mod confirm;
mod create;
mod error;
mod picker;
mod tags;

pub use confirm::render_confirm;
pub use create::render_create;
pub use error::{render_error, render_fatal};
pub use picker::render_picker;
pub use tags::render_tags;
