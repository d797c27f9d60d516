use ratatui::layout::Rect;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::super::theme::Theme;

pub fn render_error(frame: &mut Frame<'_>, area: Rect, message: &str, theme: &Theme) {
    let lines = vec![
        Line::styled(message.to_string(), theme.error),
        Line::from(""),
        Line::styled("Enter = dismiss", theme.status),
    ];
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.error_border)
                .title("Error"),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Full-screen notice for failures that make the console unusable.
pub fn render_fatal(frame: &mut Frame<'_>, area: Rect, message: &str, theme: &Theme) {
    let lines = vec![
        Line::styled(message.to_string(), theme.error),
        Line::from(""),
        Line::from("Set the credentials in the environment or in the [credentials] table"),
        Line::from("of the config file, then restart."),
        Line::from(""),
        Line::styled("q = quit", theme.status),
    ];
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.error_border)
                .title("Cannot reach AWS"),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
