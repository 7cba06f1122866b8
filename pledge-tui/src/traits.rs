//! Common traits for TUI components

use crate::state::App;
use ratatui::{layout::Rect, Frame};

/// A dashboard section that draws view-models taken from the application
/// state.
///
/// Implementations only lay out and style what the model already computed;
/// they never filter, count or score records themselves.
pub trait Renderable {
    /// Render this section to the given frame within the specified area.
    fn render(&self, f: &mut Frame<'_>, app: &App, area: Rect);
}
