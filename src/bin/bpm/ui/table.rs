use bedrock_profiles::store::Panel;
use ratatui::layout::{Constraint, Rect};
use bedrock_profiles::types::InferenceProfileSummary;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use crate::runtime::AppState;

use super::text::fit;
use super::theme::Theme;

const NAME_WIDTH: u16 = 28;
const STATUS_WIDTH: u16 = 8;
const MODEL_WIDTH: u16 = 36;

pub fn render_profiles(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title("Application inference profiles");
    let message = match &state.console().profiles {
        Panel::Idle => Some(Line::styled("Nothing loaded yet", theme.muted)),
        Panel::Loading(_) => Some(Line::styled("Loading...", theme.muted)),
        Panel::Failed(error) => Some(Line::styled(error.clone(), theme.error)),
        Panel::Ready(profiles) if profiles.is_empty() => Some(Line::styled(
            "No application inference profiles in this region. Press n to create one.",
            theme.muted,
        )),
        Panel::Ready(_) => None,
    };
    if let Some(message) = message {
        frame.render_widget(
            Paragraph::new(message)
                .block(block)
                .wrap(Wrap { trim: true }),
            area,
        );
        return;
    }

    let arn_width = usize::from(
        area.width
            .saturating_sub(NAME_WIDTH + STATUS_WIDTH + MODEL_WIDTH + 5),
    );
    let rows = state.profiles().iter().enumerate().map(|(idx, profile)| {
        let models = model_lines(profile);
        let height = models.len().max(1) as u16;
        let row = Row::new(vec![
            Cell::from(fit(&profile.name, usize::from(NAME_WIDTH))),
            Cell::from(profile.status.clone().unwrap_or_default()).style(theme.status_ok),
            Cell::from(Text::from(models)),
            Cell::from(fit(&profile.arn, arn_width)),
        ])
        .height(height);
        if idx == state.selected {
            row.style(theme.selected)
        } else {
            row
        }
    });
    let header = Row::new(vec!["Name", "Status", "Model", "ARN"]).style(theme.header);
    let table = Table::new(
        rows,
        [
            Constraint::Length(NAME_WIDTH),
            Constraint::Length(STATUS_WIDTH),
            Constraint::Length(MODEL_WIDTH),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(block);
    frame.render_widget(table, area);
}

/// One line per referenced model, shown by model id.
fn model_lines(profile: &InferenceProfileSummary) -> Vec<Line<'static>> {
    let lines: Vec<Line<'static>> = profile
        .model_arns()
        .map(|arn| {
            let id = arn.rsplit('/').next().unwrap_or(arn);
            Line::from(fit(id, usize::from(MODEL_WIDTH)))
        })
        .collect();
    if lines.is_empty() {
        vec![Line::from("-")]
    } else {
        lines
    }
}
