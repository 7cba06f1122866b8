//! Promise table and detail panel.

use crate::state::App;
use crate::theme::status_color;
use crate::traits::Renderable;
use crate::widgets::DetailPanel;
use pledge_core::PromiseRow;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

pub struct PromiseTableView;

impl Renderable for PromiseTableView {
    fn render(&self, f: &mut Frame<'_>, app: &App, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);

        let rows = app.model.rows();
        render_table(f, app, &rows, chunks[0]);

        let selected = app.selected.and_then(|idx| rows.get(idx));
        render_detail(f, app, selected, chunks[1]);
    }
}

fn render_table(f: &mut Frame<'_>, app: &App, rows: &[PromiseRow<'_>], area: Rect) {
    let header = Row::new(["Promise", "Category", "Status", "Deadline", "Source"])
        .style(Style::default().fg(app.theme.text_dim).add_modifier(Modifier::BOLD));

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.promise.to_string()),
                Cell::from(row.category.to_string()),
                Cell::from(row.status_label.to_string())
                    .style(Style::default().fg(status_color(row.status, &app.theme))),
                Cell::from(row.deadline.to_string()),
                Cell::from(if row.source_url.is_some() { "link" } else { "" }),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(40),
        Constraint::Percentage(18),
        Constraint::Percentage(14),
        Constraint::Percentage(16),
        Constraint::Percentage(12),
    ];
    let table = Table::new(body, widths)
        .header(header)
        .block(Block::default().title("Promises").borders(Borders::ALL))
        .highlight_style(Style::default().bg(app.theme.bg_highlight).fg(app.theme.primary));

    let mut state = TableState::default();
    state.select(app.selected);
    f.render_stateful_widget(table, area, &mut state);
}

fn render_detail(f: &mut Frame<'_>, app: &App, row: Option<&PromiseRow<'_>>, area: Rect) {
    let fields = match row {
        Some(row) => vec![
            ("Promise", row.promise.to_string()),
            ("Category", row.category.to_string()),
            ("Status", row.status_label.to_string()),
            ("Deadline", row.deadline.to_string()),
            ("Source", row.source_url.unwrap_or_default().to_string()),
        ],
        None => Vec::new(),
    };

    DetailPanel {
        title: "Details",
        fields,
        label_style: Style::default().fg(app.theme.secondary),
        placeholder: "No promise matches the current filters.",
    }
    .render(f, area);
}
