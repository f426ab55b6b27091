//! Expense table view
//!
//! Shows every recorded expense in insertion order

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::truncate;
use crate::tui::app::App;

/// Render the expense table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(format!(" Expenses ({}) ", app.expenses.len()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.expenses.is_empty() {
        let text = Paragraph::new("No expenses yet. Fill in the form and press Enter.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Min(16),    // Description
        Constraint::Length(12), // Amount
        Constraint::Length(15), // Category
    ];

    let header = Row::new(vec![
        Cell::from("Description"),
        Cell::from("Amount"),
        Cell::from("Category"),
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .height(1);

    let rows: Vec<Row> = app
        .expenses
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(truncate(expense.description(), 40)),
                Cell::from(format!("{:>11}", expense.amount().to_string())),
                Cell::from(truncate(expense.category(), 15)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}
