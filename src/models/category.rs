//! Suggested expense categories
//!
//! Front ends offer these as choices. The ledger itself accepts any
//! non-empty category text.

use std::fmt;

/// The categories offered by the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Food,
    Rent,
    Utilities,
    Entertainment,
    Other,
}

impl DefaultCategory {
    /// Get all default categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Rent,
            Self::Utilities,
            Self::Entertainment,
            Self::Other,
        ]
    }

    /// Get the name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }

    /// Find a default category by name (case-insensitive)
    pub fn find(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// The category after this one, wrapping around
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// The category before this one, wrapping around
    pub fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for DefaultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
