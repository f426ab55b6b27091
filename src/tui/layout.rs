//! Layout definitions for the TUI
//!
//! Entry form across the top, expense table on the left, summary and chart
//! on the right, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Entry form
    pub form: Rect,
    /// Expense table
    pub table: Rect,
    /// Per-category totals
    pub summary: Rect,
    /// Spending chart
    pub chart: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Form: border + three fields
                Constraint::Min(6),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(vertical[1]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(body[1]);

        Self {
            form: vertical[0],
            table: body[0],
            summary: right[0],
            chart: right[1],
            status_bar: vertical[2],
        }
    }
}
