//! Filter bar widget.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One labelled filter input, e.g. `Category: Education`.
#[derive(Debug, Clone)]
pub struct FilterOption {
    pub name: &'static str,
    pub value: String,
    pub active: bool,
}

pub struct FilterBar<'a> {
    pub title: String,
    pub filters: &'a [FilterOption],
    pub active_style: Style,
    pub inactive_style: Style,
}

impl<'a> FilterBar<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let spans: Vec<Span> = self
            .filters
            .iter()
            .map(|filter| {
                let style = if filter.active {
                    self.active_style
                } else {
                    self.inactive_style
                };
                Span::styled(format!(" {}: {} ", filter.name, filter.value), style)
            })
            .collect();

        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().title(self.title.as_str()).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
