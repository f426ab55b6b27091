//! CLI commands for reports
//!
//! Category summary and the spending chart.

use crate::display::format_spending_chart;
use crate::error::{LedgerError, LedgerResult};
use crate::tracker::ExpenseTracker;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Handle `summary`
pub fn handle_summary(tracker: &dyn ExpenseTracker, output: Option<PathBuf>) -> LedgerResult<()> {
    let summary = tracker.summary();

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        summary.export_csv(BufWriter::new(file))?;
        println!("Summary exported to: {}", path.display());
    } else {
        println!("{}", summary.format_terminal());
    }

    Ok(())
}

/// Handle `chart`
pub fn handle_chart(tracker: &dyn ExpenseTracker) -> LedgerResult<()> {
    println!("{}", format_spending_chart(&tracker.summary()));
    Ok(())
}
