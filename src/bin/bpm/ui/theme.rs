use ratatui::style::{Color, Modifier, Style};

/// Unicode indicators for status and UI elements
pub mod indicators {
    pub const BULLET: &str = "●";
    pub const CROSS: &str = "✗";
    pub const PREV: &str = "◂";
    pub const NEXT: &str = "▸";
    pub const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub error: Style,
    pub error_border: Style,
    pub status: Style,
    pub status_ok: Style,
    pub status_warn: Style,
    pub accent: Style,
    pub muted: Style,
    pub border: Style,
    pub border_focused: Style,
    pub selected: Style,
    pub header: Style,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "mono" => Self::mono(),
            _ => Self::warm(),
        }
    }

    /// Orange and terracotta accents on warm grays
    pub fn warm() -> Self {
        let orange = Color::Rgb(217, 119, 87);
        let green = Color::Rgb(120, 200, 140);
        let yellow = Color::Rgb(233, 182, 89);
        let muted_gray = Color::Rgb(140, 135, 130);
        let dim_gray = Color::Rgb(100, 95, 90);

        Self {
            error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            error_border: Style::default().fg(Color::Red),
            status: Style::default().fg(dim_gray),
            status_ok: Style::default().fg(green),
            status_warn: Style::default().fg(yellow),
            accent: Style::default().fg(orange).add_modifier(Modifier::BOLD),
            muted: Style::default().fg(muted_gray),
            border: Style::default().fg(dim_gray),
            border_focused: Style::default().fg(orange),
            selected: Style::default().add_modifier(Modifier::REVERSED),
            header: Style::default().fg(muted_gray).add_modifier(Modifier::BOLD),
        }
    }

    /// High contrast monochrome
    pub fn mono() -> Self {
        Self {
            error: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            error_border: Style::default().add_modifier(Modifier::BOLD),
            status: Style::default().add_modifier(Modifier::DIM),
            status_ok: Style::default(),
            status_warn: Style::default().add_modifier(Modifier::BOLD),
            accent: Style::default().add_modifier(Modifier::BOLD),
            muted: Style::default().add_modifier(Modifier::DIM),
            border: Style::default(),
            border_focused: Style::default().add_modifier(Modifier::BOLD),
            selected: Style::default().add_modifier(Modifier::REVERSED),
            header: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}
