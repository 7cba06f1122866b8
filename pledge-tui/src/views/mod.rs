//! View rendering dispatch.

pub mod filters;
pub mod promises;
pub mod score;
pub mod summary;

use crate::keys::InputMode;
use crate::state::{App, HELP_TEXT};
use crate::theme::notification_color;
use crate::traits::Renderable;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Seconds a notification stays in the footer.
const NOTIFICATION_TTL_SECS: i64 = 5;

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    let sections: [(&dyn Renderable, Rect); 4] = [
        (&summary::SummaryView, layout[1]),
        (&score::ScoreView, layout[2]),
        (&filters::FilterView, layout[3]),
        (&promises::PromiseTableView, layout[4]),
    ];
    for (section, area) in sections {
        section.render(f, app, area);
    }

    render_footer(f, app, layout[5]);

    if app.modal.is_some() {
        render_modal(f, app, centered(60, 30, f.size()));
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        app.model.title(),
        Style::default()
            .fg(app.theme.primary)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(block, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = match app.mode {
        InputMode::Search => "type to search • Backspace delete • Enter/Esc done",
        InputMode::Normal => HELP_TEXT,
    };
    let now = chrono::Utc::now();
    let (text, style) = match app
        .notifications
        .last()
        .filter(|note| note.is_fresh(now, NOTIFICATION_TTL_SECS))
    {
        Some(note) => (
            format!("{}: {}", note.level.tag(), note.message),
            Style::default().fg(notification_color(note.level, &app.theme)),
        ),
        None => (help.to_string(), Style::default().fg(app.theme.text_dim)),
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}

fn render_modal(f: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(modal) = &app.modal else {
        return;
    };
    let popup = Paragraph::new(modal.message.clone())
        .block(
            Block::default()
                .title(modal.title.as_str())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focus)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
