//! Amount type for expense values
//!
//! A thin wrapper over `f64` that serializes as a plain JSON number and
//! carries the parsing rules for user-entered amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::{Field, ValidationError};

/// Largest amount accepted from user input
///
/// Keeps ledger totals finite no matter how many expenses are summed.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// A non-negative expense amount in a single, unnamed currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value without validation
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Amount;
    /// let amount = Amount::new(10.5);
    /// assert_eq!(amount.value(), 10.5);
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Parse an amount from user input
    ///
    /// Accepts "10.50", "10", " 10.5 ", "$10.50", "1e2". Rejects empty input,
    /// anything that is not a finite number, negative values, and values
    /// above [`MAX_AMOUNT`].
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField(Field::Amount));
        }

        let (sign, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => ("-", stripped),
            None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let digits = rest.strip_prefix('$').unwrap_or(rest);

        let value: f64 = format!("{}{}", sign, digits)
            .parse()
            .map_err(|_| ValidationError::NonNumericAmount(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(ValidationError::NonNumericAmount(trimmed.to_string()));
        }
        if value < 0.0 {
            return Err(ValidationError::NegativeAmount(value));
        }
        if value > MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge(value));
        }

        // Normalize -0.0 so it prints and serializes as 0
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(Amount::parse("10.50").unwrap().value(), 10.5);
        assert_eq!(Amount::parse("10").unwrap().value(), 10.0);
        assert_eq!(Amount::parse("  7.25 ").unwrap().value(), 7.25);
        assert_eq!(Amount::parse("0").unwrap().value(), 0.0);
        assert_eq!(Amount::parse("1e2").unwrap().value(), 100.0);
    }

    #[test]
    fn test_parse_currency_symbol() {
        assert_eq!(Amount::parse("$12.00").unwrap().value(), 12.0);
        assert_eq!(Amount::parse("+$3").unwrap().value(), 3.0);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(
            Amount::parse("abc"),
            Err(ValidationError::NonNumericAmount("abc".into()))
        );
        assert_eq!(
            Amount::parse("12,50"),
            Err(ValidationError::NonNumericAmount("12,50".into()))
        );
        assert!(matches!(
            Amount::parse("NaN"),
            Err(ValidationError::NonNumericAmount(_))
        ));
        assert!(matches!(
            Amount::parse("inf"),
            Err(ValidationError::NonNumericAmount(_))
        ));
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert_eq!(
            Amount::parse("-5"),
            Err(ValidationError::NegativeAmount(-5.0))
        );
        assert_eq!(
            Amount::parse("-$5.50"),
            Err(ValidationError::NegativeAmount(-5.5))
        );
    }

    #[test]
    fn test_parse_rejects_huge_amount() {
        assert_eq!(
            Amount::parse("1e308"),
            Err(ValidationError::AmountTooLarge(1e308))
        );
        assert_eq!(Amount::parse("1000000000000").unwrap().value(), MAX_AMOUNT);
    }

    #[test]
    fn test_parse_empty_is_missing() {
        assert_eq!(
            Amount::parse("   "),
            Err(ValidationError::MissingField(Field::Amount))
        );
    }

    #[test]
    fn test_negative_zero_normalized() {
        let amount = Amount::parse("-0").unwrap();
        assert_eq!(amount.to_string(), "$0.00");
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(10.5).to_string(), "$10.50");
        assert_eq!(Amount::new(0.0).to_string(), "$0.00");
        assert_eq!(Amount::new(1234.567).to_string(), "$1234.57");
    }

    #[test]
    fn test_sum() {
        let total: Amount = vec![Amount::new(10.0), Amount::new(5.5)].into_iter().sum();
        assert_eq!(total.value(), 15.5);
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Amount::new(20.0)).unwrap();
        assert_eq!(json, "20.0");

        let parsed: Amount = serde_json::from_str("15").unwrap();
        assert_eq!(parsed.value(), 15.0);
    }
}
