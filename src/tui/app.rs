//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! It only reaches the ledger through [`ExpenseTracker`].

use crate::error::LedgerError;
use crate::models::{DefaultCategory, Expense};
use crate::reports::Summary;
use crate::tracker::ExpenseTracker;

use super::widgets::TextInput;

/// Which form field currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Description,
    Amount,
    Category,
}

impl FormField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Description,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::Category,
            Self::Amount => Self::Description,
            Self::Category => Self::Amount,
        }
    }
}

/// State for the expense entry form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    pub focused_field: FormField,
    pub description_input: TextInput,
    pub amount_input: TextInput,
    pub category: DefaultCategory,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create a new form with the description field focused
    pub fn new() -> Self {
        let mut state = Self {
            focused_field: FormField::Description,
            description_input: TextInput::new()
                .label("Description")
                .placeholder("What was it for?"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            category: DefaultCategory::Food,
        };
        state.update_focus();
        state
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    /// Focus a specific field
    pub fn focus(&mut self, field: FormField) {
        self.focused_field = field;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.description_input.focused = self.focused_field == FormField::Description;
        self.amount_input.focused = self.focused_field == FormField::Amount;
    }

    /// The text input that has focus, if the focused field is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::Description => Some(&mut self.description_input),
            FormField::Amount => Some(&mut self.amount_input),
            FormField::Category => None,
        }
    }

    /// Reset after a successful add. The category stays selected.
    pub fn reset(&mut self) {
        self.description_input.clear();
        self.amount_input.clear();
        self.focus(FormField::Description);
    }
}

/// Severity of a status bar message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Main application state
pub struct App<'a> {
    /// The ledger, behind the front-end interface
    pub tracker: &'a mut dyn ExpenseTracker,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Entry form state
    pub form: ExpenseFormState,

    /// Snapshot of the ledger for rendering
    pub expenses: Vec<Expense>,

    /// Category totals for rendering
    pub summary: Summary,

    /// Selected row in the expense table
    pub selected_index: usize,

    /// Status message to display
    pub status: Option<StatusMessage>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(tracker: &'a mut dyn ExpenseTracker) -> Self {
        let mut app = Self {
            tracker,
            should_quit: false,
            form: ExpenseFormState::new(),
            expenses: Vec::new(),
            summary: Summary::default(),
            selected_index: 0,
            status: None,
        };
        app.refresh();
        app.select_last();

        let greeting = match app.expenses.len() {
            0 => "Fill in the form and press Enter to add an expense".to_string(),
            1 => "1 expense loaded".to_string(),
            n => format!("{} expenses loaded", n),
        };
        app.set_status(StatusKind::Info, greeting);
        app
    }

    /// Reload the snapshot and summary from the ledger
    pub fn refresh(&mut self) {
        self.expenses = self.tracker.all_expenses();
        self.summary = self.tracker.summary();
        if self.selected_index >= self.expenses.len() {
            self.selected_index = self.expenses.len().saturating_sub(1);
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind,
            text: text.into(),
        });
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Move the table selection up
    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move the table selection down
    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.expenses.len() {
            self.selected_index += 1;
        }
    }

    /// Select the most recent expense
    pub fn select_last(&mut self) {
        self.selected_index = self.expenses.len().saturating_sub(1);
    }

    /// Submit the entry form to the ledger
    pub fn submit_form(&mut self) {
        let description = self.form.description_input.value().to_string();
        let amount = self.form.amount_input.value().to_string();
        let category = self.form.category.name();

        match self.tracker.add_expense(&description, &amount, category) {
            Ok(expense) => {
                self.form.reset();
                self.refresh();
                self.select_last();
                self.set_status(StatusKind::Success, format!("Added {}", expense));
            }
            Err(LedgerError::Validation(err)) => {
                self.set_status(StatusKind::Error, err.to_string());
            }
            Err(err @ LedgerError::Storage(_)) => {
                // The ledger kept the expense; only the write failed
                self.form.reset();
                self.refresh();
                self.select_last();
                self.set_status(
                    StatusKind::Warning,
                    format!("Recorded but NOT saved: {}", err),
                );
            }
            Err(err) => {
                self.set_status(StatusKind::Error, err.to_string());
            }
        }
    }
}
