//! TUI Views module
//!
//! The single expense screen: entry form, expense table, summary, chart and
//! status bar.

pub mod expenses;
pub mod form;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::App;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    form::render(frame, app, layout.form);
    expenses::render(frame, app, layout.table);
    summary::render_totals(frame, app, layout.summary);
    summary::render_chart(frame, app, layout.chart);
    status_bar::render(frame, app, layout.status_bar);
}
