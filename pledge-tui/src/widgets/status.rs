//! Summary card widget.

use pledge_core::SummaryCard;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct CardIndicator<'a> {
    pub card: &'a SummaryCard,
    pub style: Style,
    pub border_style: Style,
}

impl<'a> CardIndicator<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.card.value.to_string(),
                self.style.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.card.icon, self.style)),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(self.card.label)
                .borders(Borders::ALL)
                .border_style(self.border_style),
        );
        f.render_widget(paragraph, area);
    }
}
