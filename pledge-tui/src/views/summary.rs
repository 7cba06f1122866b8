//! Summary cards row.

use crate::state::App;
use crate::theme::card_color;
use crate::traits::Renderable;
use crate::widgets::CardIndicator;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    Frame,
};

pub struct SummaryView;

impl Renderable for SummaryView {
    fn render(&self, f: &mut Frame<'_>, app: &App, area: Rect) {
        let cards = app.model.metrics().cards();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, cards.len() as u32); 4])
            .split(area);

        for (card, chunk) in cards.iter().zip(chunks.iter()) {
            let color = card_color(card.kind, &app.theme);
            CardIndicator {
                card,
                style: Style::default().fg(color),
                border_style: Style::default().fg(app.theme.border),
            }
            .render(f, *chunk);
        }
    }
}
