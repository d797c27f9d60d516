use bedrock_profiles::store::{Panel, TagsModal};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::super::theme::Theme;

pub fn render_tags(frame: &mut Frame<'_>, area: Rect, modal: &TagsModal, theme: &Theme) {
    let mut lines = vec![Line::styled(modal.arn.clone(), theme.muted), Line::from("")];
    match &modal.tags {
        Panel::Idle | Panel::Loading(_) => lines.push(Line::styled("Loading...", theme.muted)),
        Panel::Failed(error) => lines.push(Line::styled(error.clone(), theme.error)),
        Panel::Ready(tags) if tags.is_empty() => {
            lines.push(Line::styled("No tags", theme.muted))
        }
        Panel::Ready(tags) => lines.extend(tags.iter().map(|tag| {
            Line::from(vec![
                Span::styled(tag.key.clone(), theme.accent),
                Span::raw(" = "),
                Span::raw(tag.value.clone()),
            ])
        })),
    }
    lines.push(Line::from(""));
    lines.push(Line::styled("Esc = close", theme.status));
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_focused)
                .title(format!("Tags of {}", modal.name)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
