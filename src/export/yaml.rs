//! YAML Export functionality
//!
//! Exports the ledger to YAML for human-readable backup.

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::LedgerExport;
use crate::models::Expense;
use std::io::Write;

/// Export the ledger to YAML format
pub fn export_yaml<W: Write>(expenses: &[Expense], mut writer: W) -> LedgerResult<()> {
    let export = LedgerExport::from_expenses(expenses);

    writeln!(writer, "# Expense Ledger Export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    #[test]
    fn test_export_yaml() {
        let expenses = vec![
            Expense::new("Power", Amount::new(60.0), "Utilities").unwrap(),
            Expense::new("Cinema", Amount::new(14.0), "Entertainment").unwrap(),
        ];

        let mut buf = Vec::new();
        export_yaml(&expenses, &mut buf).unwrap();
        let yaml = String::from_utf8(buf).unwrap();

        assert!(yaml.starts_with("# Expense Ledger Export"));
        assert!(yaml.contains("expense_count: 2"));
        assert!(yaml.contains("description: Power"));
        assert!(yaml.contains("category: Entertainment"));

        let body: String = yaml
            .lines()
            .filter(|l| !l.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        let parsed: LedgerExport = serde_yaml::from_str(&body).unwrap();
        assert_eq!(parsed.expenses, expenses);
    }
}
