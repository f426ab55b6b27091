//! The expense ledger
//!
//! An ordered, append-only list of expenses bound to a JSON storage file.
//! Every successful append rewrites the whole file before returning.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;
use crate::reports::Summary;
use crate::storage::{read_json, write_json_atomic};

/// Ordered collection of expenses plus the file it persists to
#[derive(Debug, Clone)]
pub struct Ledger {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger that will persist to `path`
    ///
    /// Nothing is written until the first append or an explicit save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            expenses: Vec::new(),
        }
    }

    /// Load a ledger from `path`
    ///
    /// A missing file yields an empty ledger. A file that is not a JSON array
    /// of `{description, amount, category}` objects fails with
    /// [`LedgerError::CorruptData`] and is left untouched.
    pub fn load(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let path = path.into();
        if !path.exists() {
            debug!(path = %path.display(), "no storage file, starting empty ledger");
        }

        let expenses: Vec<Expense> = read_json(&path)?;
        info!(path = %path.display(), count = expenses.len(), "ledger loaded");

        Ok(Self { path, expenses })
    }

    /// The storage file this ledger is bound to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Validate raw input, append the expense and persist the ledger
    ///
    /// Validation failures leave the ledger and the file untouched. If the
    /// write fails the expense stays in memory and
    /// [`LedgerError::Storage`] is returned so the caller can warn that it
    /// was not saved.
    pub fn append(
        &mut self,
        description: &str,
        amount: &str,
        category: &str,
    ) -> LedgerResult<Expense> {
        let expense = Expense::parse(description, amount, category).map_err(|e| {
            debug!(error = %e, "rejected expense input");
            LedgerError::from(e)
        })?;
        self.record(expense)
    }

    /// Append an already validated expense and persist the ledger
    pub fn record(&mut self, expense: Expense) -> LedgerResult<Expense> {
        self.expenses.push(expense.clone());
        debug!(
            description = expense.description(),
            amount = expense.amount().value(),
            category = expense.category(),
            "expense appended"
        );

        if let Err(err) = self.save() {
            debug!(error = %err, "expense kept in memory but not saved");
            return Err(err);
        }

        Ok(expense)
    }

    /// Per-category totals in first-occurrence order
    pub fn summarize(&self) -> Summary {
        Summary::from_expenses(&self.expenses)
    }

    /// Write the ledger to its own storage file
    pub fn save(&self) -> LedgerResult<()> {
        self.save_to(&self.path)
    }

    /// Write the ledger to `path`, atomically replacing any existing file
    pub fn save_to(&self, path: impl AsRef<Path>) -> LedgerResult<()> {
        let path = path.as_ref();
        write_json_atomic(path, self.expenses.as_slice())?;
        debug!(path = %path.display(), count = self.expenses.len(), "ledger saved");
        Ok(())
    }
}
