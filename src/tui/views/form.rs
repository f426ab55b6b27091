//! Expense entry form view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::DefaultCategory;
use crate::tui::app::{App, FormField};

/// Render the entry form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Add Expense ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(&app.form.description_input, rows[0]);
    frame.render_widget(&app.form.amount_input, rows[1]);
    frame.render_widget(
        Paragraph::new(category_line(
            app.form.category,
            app.form.focused_field == FormField::Category,
        )),
        rows[2],
    );
}

/// The category picker: every choice, the selected one highlighted
fn category_line(selected: DefaultCategory, focused: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled("Category", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
    ];

    for category in DefaultCategory::all() {
        let style = if *category == selected && focused {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else if *category == selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", category.name()), style));
    }

    Line::from(spans)
}
