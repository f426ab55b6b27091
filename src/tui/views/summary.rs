//! Summary and chart views
//!
//! Per-category totals as text, and "Spending by Category" as a bar chart
//! where each bar is the category's share of total spending.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::display::{format_percentage, truncate};
use crate::tui::app::App;

const BAR_COLORS: [Color; 5] = [
    Color::Cyan,
    Color::Magenta,
    Color::Green,
    Color::Yellow,
    Color::Blue,
];

/// Render the per-category totals
pub fn render_totals(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Summary ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.summary.is_empty() {
        frame.render_widget(
            Paragraph::new("Nothing to summarize yet.")
                .block(block)
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let mut lines: Vec<Line> = app
        .summary
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(BAR_COLORS[i % BAR_COLORS.len()])),
                Span::raw(format!("{:<16}", truncate(&entry.category, 16))),
                Span::raw(format!("{:>12}", entry.total.to_string())),
                Span::styled(
                    format!("{:>7}", format_percentage(entry.percentage)),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("{:<16}", "Total"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>12}", app.summary.total().to_string()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the spending chart
pub fn render_chart(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Spending by Category ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.summary.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let bars: Vec<Bar> = app
        .summary
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Bar::default()
                .value(entry.percentage.round() as u64)
                .text_value(format_percentage(entry.percentage))
                .label(Line::from(truncate(&entry.category, 8)))
                .style(Style::default().fg(BAR_COLORS[i % BAR_COLORS.len()]))
        })
        .collect();

    // Fit every bar in the available width
    let count = bars.len() as u16;
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width.saturating_sub(count.saturating_sub(1)) / count.max(1)).clamp(1, 8);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(100)
        .value_style(Style::default().fg(Color::Black).add_modifier(Modifier::BOLD));

    frame.render_widget(chart, area);
}
