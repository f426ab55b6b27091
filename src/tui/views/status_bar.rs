//! Status bar view
//!
//! Shows the latest status message, the running total and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, StatusKind};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![
        Span::styled(" Total: ", Style::default().fg(Color::White)),
        Span::styled(
            app.summary.total().to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(ref status) = app.status {
        let color = match status.kind {
            StatusKind::Info => Color::White,
            StatusKind::Success => Color::Green,
            StatusKind::Warning => Color::Yellow,
            StatusKind::Error => Color::Red,
        };
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(status.text.as_str(), Style::default().fg(color)));
    }

    let hints = " Tab:Next  Enter:Add  ←/→:Category  ↑/↓:Scroll  Esc:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
