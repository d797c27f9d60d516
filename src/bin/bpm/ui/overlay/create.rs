use bedrock_profiles::store::{CreateModal, Panel};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::runtime::{FormFocus, FormView};

use super::super::text::fit;
use super::super::theme::{indicators, Theme};

const LABEL_WIDTH: usize = 13;
const HELP: &str = "Tab next  Ctrl+N add tag  Ctrl+D remove tag  Ctrl+S create  Esc cancel";

pub fn render_create(
    frame: &mut Frame<'_>,
    area: Rect,
    modal: &CreateModal,
    view: &FormView,
    theme: &Theme,
) {
    let width = usize::from(area.width.saturating_sub(2));
    let mut lines = Vec::new();

    lines.push(field_line(
        "Name",
        &view.name,
        view.focus == FormFocus::Name,
        theme,
    ));
    if let Some(error) = modal.form.name_error() {
        lines.push(error_line(&error.to_string(), theme));
    }
    lines.push(field_line(
        "Description",
        &view.description,
        view.focus == FormFocus::Description,
        theme,
    ));
    if let Some(error) = modal.form.description_error() {
        lines.push(error_line(&error.to_string(), theme));
    }
    lines.push(source_line(modal, view, width, theme));

    lines.push(Line::from(""));
    lines.push(Line::styled("Tags", theme.header));
    let rows = modal.form.tags().rows();
    if rows.is_empty() {
        lines.push(Line::styled("  none (Ctrl+N adds one)", theme.muted));
    }
    for row in rows {
        let key_focus = view.focus == FormFocus::TagKey(row.id);
        let value_focus = view.focus == FormFocus::TagValue(row.id);
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(with_cursor(&row.key, key_focus), focus_style(key_focus, theme)),
            Span::raw(" = "),
            Span::styled(
                with_cursor(&row.value, value_focus),
                focus_style(value_focus, theme),
            ),
        ]));
        if let Some(error) = row.error {
            lines.push(error_line(&error.to_string(), theme));
        }
    }

    if let Some(error) = &modal.submit_error {
        lines.push(Line::from(""));
        lines.push(Line::styled(error.to_string(), theme.error));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(HELP, theme.status));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_focused)
                .title("Create application inference profile"),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn field_line<'a>(label: &'a str, value: &str, focused: bool, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<LABEL_WIDTH$}"), theme.muted),
        Span::styled(with_cursor(value, focused), focus_style(focused, theme)),
    ])
}

fn source_line<'a>(modal: &CreateModal, view: &FormView, width: usize, theme: &Theme) -> Line<'a> {
    let focused = view.focus == FormFocus::Source;
    let label = Span::styled(format!("{:<LABEL_WIDTH$}", "Copy from"), theme.muted);
    let value = match &modal.sources {
        Panel::Idle | Panel::Loading(_) => Span::styled("loading sources...", theme.muted),
        Panel::Failed(error) => Span::styled(error.clone(), theme.error),
        Panel::Ready(sources) => {
            let selected = modal
                .form
                .copy_from()
                .and_then(|arn| sources.iter().find(|s| s.arn == arn))
                .map(|s| s.label.as_str())
                .unwrap_or("no sources available");
            let text = fit(selected, width.saturating_sub(LABEL_WIDTH + 4));
            let text = if focused {
                format!("{} {text} {}", indicators::PREV, indicators::NEXT)
            } else {
                text
            };
            Span::styled(text, focus_style(focused, theme))
        }
    };
    Line::from(vec![label, value])
}

fn error_line<'a>(message: &str, theme: &Theme) -> Line<'a> {
    Line::styled(format!("  {} {message}", indicators::CROSS), theme.error)
}

fn with_cursor(value: &str, focused: bool) -> String {
    if focused {
        format!("{value}_")
    } else if value.is_empty() {
        "…".to_string()
    } else {
        value.to_string()
    }
}

fn focus_style(focused: bool, theme: &Theme) -> Style {
    if focused {
        theme.accent
    } else {
        Style::default()
    }
}
