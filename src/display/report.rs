//! Report formatting utilities for terminal output
//!
//! Provides the text rendition of the spending chart and a few formatting
//! helpers shared with the TUI.

use crate::reports::Summary;

/// Width of the bar column in the text chart
const CHART_BAR_WIDTH: usize = 30;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Render "Spending by Category" as a horizontal bar chart
///
/// Each bar is the category's share of total spending, so the bars together
/// convey what a pie chart would.
pub fn format_spending_chart(summary: &Summary) -> String {
    if summary.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let label_width = summary
        .iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(8)
        .clamp(8, 20);

    let mut output = String::new();
    output.push_str("Spending by Category\n");
    output.push_str(&separator(label_width + CHART_BAR_WIDTH + 20));
    output.push('\n');

    for entry in summary {
        output.push_str(&format!(
            "{:<width$}  {}  {:>6}  {}\n",
            truncate(&entry.category, label_width),
            format_bar(entry.percentage, 100.0, CHART_BAR_WIDTH),
            format_percentage(entry.percentage),
            entry.total,
            width = label_width
        ));
    }

    output
}
