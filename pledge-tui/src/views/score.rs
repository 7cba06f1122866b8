//! Accountability score section.

use crate::state::App;
use crate::theme::score_label_colors;
use crate::traits::Renderable;
use crate::widgets::ScoreGauge;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct ScoreView;

impl Renderable for ScoreView {
    fn render(&self, f: &mut Frame<'_>, app: &App, area: Rect) {
        let score = app.model.score();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        ScoreGauge {
            title: "Accountability Score",
            pct: score.pct,
            theme: &app.theme,
        }
        .render(f, chunks[0]);

        let (fg, bg) = score_label_colors(score.label, &app.theme);
        let lines = vec![
            Line::from(Span::styled(
                format!(" {} ", score.label),
                Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                score.description(),
                Style::default().fg(app.theme.text_dim),
            )),
        ];
        let summary = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(summary, chunks[1]);
    }
}
