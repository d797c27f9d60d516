use bedrock_profiles::store::DeleteTarget;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::super::theme::Theme;

pub fn render_confirm(frame: &mut Frame<'_>, area: Rect, target: &DeleteTarget, theme: &Theme) {
    let lines = vec![
        Line::from(vec![
            Span::raw("Delete inference profile "),
            Span::styled(target.name.clone(), theme.accent),
            Span::raw("?"),
        ]),
        Line::styled(target.arn.clone(), theme.muted),
        Line::from(""),
        Line::styled("y = delete, n = cancel", theme.status),
    ];
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.error_border)
                .title("Confirm delete"),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
