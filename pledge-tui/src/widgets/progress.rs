//! Accountability score gauge.

use crate::theme::{score_label_colors, LedgerTheme};
use pledge_core::ScoreLabel;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge},
    Frame,
};

pub struct ScoreGauge<'a> {
    pub title: &'a str,
    pub pct: u8,
    pub theme: &'a LedgerTheme,
}

impl<'a> ScoreGauge<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let pct = self.pct.min(100);
        let (color, _) = score_label_colors(ScoreLabel::from_pct(pct), self.theme);

        let gauge = Gauge::default()
            .block(Block::default().title(self.title).borders(Borders::ALL))
            .gauge_style(Style::default().fg(color).bg(self.theme.bg_highlight))
            .percent(u16::from(pct))
            .label(format!("{}%", pct));
        f.render_widget(gauge, area);
    }
}
