//! Expense model
//!
//! A single recorded expense. Values are immutable once created; all input
//! validation happens in the constructors here.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::{Amount, MAX_AMOUNT};
use crate::error::{Field, ValidationError};

/// One recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    description: String,
    amount: Amount,
    category: String,
}

impl Expense {
    /// Create an expense from an already parsed amount
    pub fn new(
        description: impl Into<String>,
        amount: Amount,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let description = required(description.into(), Field::Description)?;
        let category = required(category.into(), Field::Category)?;
        if !amount.value().is_finite() {
            return Err(ValidationError::NonNumericAmount(amount.value().to_string()));
        }
        if amount.value() < 0.0 {
            return Err(ValidationError::NegativeAmount(amount.value()));
        }
        if amount.value() > MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge(amount.value()));
        }

        Ok(Self {
            description,
            amount,
            category,
        })
    }

    /// Create an expense from raw form input
    ///
    /// Every field is checked for presence before the amount is parsed, so an
    /// empty form reports the first missing field rather than a parse error.
    pub fn parse(description: &str, amount: &str, category: &str) -> Result<Self, ValidationError> {
        for (value, field) in [
            (description, Field::Description),
            (amount, Field::Amount),
            (category, Field::Category),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }

        let amount = Amount::parse(amount)?;
        Self::new(description, amount, category)
    }

    /// What the money was spent on
    pub fn description(&self) -> &str {
        &self.description
    }

    /// How much was spent
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// The category the expense is filed under
    pub fn category(&self) -> &str {
        &self.category
    }
}

fn required(value: String, field: Field) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}]", self.description, self.amount, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let expense = Expense::parse("Groceries", "42.10", "Food").unwrap();
        assert_eq!(expense.description(), "Groceries");
        assert_eq!(expense.amount().value(), 42.1);
        assert_eq!(expense.category(), "Food");
    }

    #[test]
    fn test_parse_trims_text() {
        let expense = Expense::parse("  Rent for May ", "900", " Rent").unwrap();
        assert_eq!(expense.description(), "Rent for May");
        assert_eq!(expense.category(), "Rent");
    }

    #[test]
    fn test_parse_missing_fields() {
        assert_eq!(
            Expense::parse("", "10", "Food"),
            Err(ValidationError::MissingField(Field::Description))
        );
        assert_eq!(
            Expense::parse("Lunch", "", "Food"),
            Err(ValidationError::MissingField(Field::Amount))
        );
        assert_eq!(
            Expense::parse("Lunch", "10", "   "),
            Err(ValidationError::MissingField(Field::Category))
        );
    }

    #[test]
    fn test_missing_field_reported_before_bad_amount() {
        assert_eq!(
            Expense::parse("Lunch", "abc", ""),
            Err(ValidationError::MissingField(Field::Category))
        );
    }

    #[test]
    fn test_parse_non_numeric_amount() {
        assert_eq!(
            Expense::parse("Lunch", "abc", "Food"),
            Err(ValidationError::NonNumericAmount("abc".into()))
        );
    }

    #[test]
    fn test_any_category_text_is_accepted() {
        let expense = Expense::parse("Flight", "300", "Travel").unwrap();
        assert_eq!(expense.category(), "Travel");
    }

    #[test]
    fn test_new_rejects_negative() {
        assert_eq!(
            Expense::new("Refund", Amount::new(-1.0), "Other"),
            Err(ValidationError::NegativeAmount(-1.0))
        );
    }

    #[test]
    fn test_new_rejects_amount_over_limit() {
        assert_eq!(
            Expense::new("Yacht", Amount::new(MAX_AMOUNT * 2.0), "Other"),
            Err(ValidationError::AmountTooLarge(MAX_AMOUNT * 2.0))
        );
    }

    #[test]
    fn test_display() {
        let expense = Expense::parse("Movie", "12.5", "Entertainment").unwrap();
        assert_eq!(expense.to_string(), "Movie: $12.50 [Entertainment]");
    }

    #[test]
    fn test_json_shape() {
        let expense = Expense::parse("Power bill", "60", "Utilities").unwrap();
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "description": "Power bill",
                "amount": 60.0,
                "category": "Utilities"
            })
        );
    }
}
