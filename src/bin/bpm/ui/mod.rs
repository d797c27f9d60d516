mod app;
mod overlay;
mod table;
mod text;
mod theme;

pub use app::render_app;
