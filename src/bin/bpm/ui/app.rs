use bedrock_profiles::store::Modal;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::runtime::AppState;

use super::overlay;
use super::table::render_profiles;
use super::theme::{indicators, Theme};

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 10;
const HEADER_HEIGHT: u16 = 1;
const FOOTER_HEIGHT: u16 = 1;
const MAIN_HELP: &str = "r region  R refresh  n new  t tags  d delete  q quit";

pub fn render_app(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::from_name(&state.theme);
    let size = frame.area();
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        render_too_small(frame, size, &theme);
        return;
    }
    if let Some(message) = &state.fatal {
        overlay::render_fatal(frame, size, message, &theme);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(size);
    render_header(frame, rows[0], state, &theme);
    render_profiles(frame, rows[1], state, &theme);
    frame.render_widget(Paragraph::new(Line::styled(MAIN_HELP, theme.status)), rows[2]);

    let console = state.console();
    let popup = centered_rect(70, 70, size);
    match &console.modal {
        Modal::None => {}
        Modal::Create(modal) => overlay::render_create(frame, popup, modal, &state.form, &theme),
        Modal::ConfirmDelete(target) => {
            overlay::render_confirm(frame, centered_rect(50, 30, size), target, &theme)
        }
        Modal::Tags(modal) => overlay::render_tags(frame, popup, modal, &theme),
    }
    if let Some(picker) = &state.picker {
        overlay::render_picker(frame, centered_rect(40, 60, size), picker, &theme);
    }
    if let Some(error) = &console.error {
        overlay::render_error(frame, centered_rect(60, 30, size), error, &theme);
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let console = state.console();
    let mut spans = vec![
        Span::styled("Bedrock inference profiles ", theme.accent),
        Span::styled(format!("{} ", indicators::BULLET), theme.muted),
        Span::raw(console.region.clone()),
    ];
    if let Some(error) = console.regions.error() {
        spans.push(Span::styled(
            format!("  {} regions: {error}", indicators::CROSS),
            theme.error,
        ));
    }
    let activity = if console.creating.is_some() {
        Some("creating")
    } else if console.deleting.is_some() {
        Some("deleting")
    } else if state.is_loading() {
        Some("loading")
    } else {
        None
    };
    if let Some(activity) = activity {
        let frame_glyph = indicators::SPINNER[state.spinner % indicators::SPINNER.len()];
        spans.push(Span::styled(
            format!("  {frame_glyph} {activity}"),
            theme.status_warn,
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let message = format!(
        "Terminal too small (min {}x{}). Resize to continue.",
        MIN_WIDTH, MIN_HEIGHT
    );
    let paragraph = Paragraph::new(Text::from(message))
        .block(Block::default().borders(Borders::ALL).title("bpm"))
        .style(theme.error);
    frame.render_widget(paragraph, area);
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const FULL_PERCENT: u16 = 100;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((FULL_PERCENT - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((FULL_PERCENT - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((FULL_PERCENT - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((FULL_PERCENT - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
