//! Search, category and status inputs.

use crate::keys::InputMode;
use crate::state::App;
use crate::traits::Renderable;
use crate::widgets::{FilterBar, FilterOption};
use pledge_core::{CategoryFilter, StatusFilter};
use ratatui::{layout::Rect, style::Style, Frame};

pub struct FilterView;

/// Text shown for each filter input.
pub fn filter_options(app: &App) -> Vec<FilterOption> {
    let criteria = app.model.criteria();
    let searching = app.mode == InputMode::Search;

    let query = if searching {
        format!("{}_", criteria.query)
    } else if criteria.query.is_empty() {
        "-".to_string()
    } else {
        criteria.query.clone()
    };
    let category = match &criteria.category {
        CategoryFilter::All => "All categories".to_string(),
        CategoryFilter::Only(name) if name.is_empty() => "(none)".to_string(),
        CategoryFilter::Only(name) => name.clone(),
    };

    vec![
        FilterOption {
            name: "Search",
            value: query,
            active: searching,
        },
        FilterOption {
            name: "Category",
            value: category,
            active: criteria.category != CategoryFilter::All,
        },
        FilterOption {
            name: "Status",
            value: criteria.status.label().to_string(),
            active: criteria.status != StatusFilter::All,
        },
    ]
}

impl Renderable for FilterView {
    fn render(&self, f: &mut Frame<'_>, app: &App, area: Rect) {
        let options = filter_options(app);
        let title = format!(
            "Filters ({} of {})",
            app.model.filtered_len(),
            app.model.metrics().total
        );
        FilterBar {
            title,
            filters: &options,
            active_style: Style::default().fg(app.theme.primary),
            inactive_style: Style::default().fg(app.theme.text_dim),
        }
        .render(f, area);
    }
}
