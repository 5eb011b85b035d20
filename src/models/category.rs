//! Category allocations and entry validation
//!
//! A category is a user-chosen label (e.g. "produce") with the portion of the
//! weekly budget assigned to it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Token that ends category entry, compared case-insensitively
pub const DONE_SENTINEL: &str = "done";

/// Example names offered when a plan has no categories
pub const SUGGESTED_CATEGORIES: &[&str] = &["Produce", "Meat", "Dairy", "Pantry", "Snacks"];

/// One category and the amount allocated to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Category name, trimmed and non-empty
    pub name: String,

    /// Amount allocated, never negative
    pub amount: Money,
}

impl Allocation {
    /// Create a validated allocation
    pub fn new(name: impl Into<String>, amount: Money) -> Result<Self, EntryError> {
        let allocation = Self {
            name: name.into().trim().to_string(),
            amount,
        };
        allocation.validate()?;
        Ok(allocation)
    }

    pub fn validate(&self) -> Result<(), EntryError> {
        if self.name.is_empty() {
            return Err(EntryError::EmptyCategoryName);
        }

        if self.amount.is_negative() {
            return Err(EntryError::NegativeAmount);
        }

        Ok(())
    }
}

/// Returns true when `name` ends category entry
pub fn is_done_sentinel(name: &str) -> bool {
    name.trim().eq_ignore_ascii_case(DONE_SENTINEL)
}

/// Recoverable problems with a single line of user input
///
/// None of these end the session; the prompt that produced them is repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// Text where the weekly budget was expected
    NotANumber(String),
    /// Text where a category amount was expected
    InvalidAmount(String),
    /// Weekly budget of zero or less
    NonPositiveBudget,
    /// Category amount below zero
    NegativeAmount,
    /// Category name blank after trimming
    EmptyCategoryName,
    /// Amount would push the total past the weekly budget
    ExceedsBudget { remaining: Money },
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(input) => {
                write!(f, "Invalid input: '{}' is not a number", input)
            }
            Self::InvalidAmount(input) => {
                write!(f, "Invalid amount: '{}' is not a number", input)
            }
            Self::NonPositiveBudget => write!(f, "Budget must be a positive amount"),
            Self::NegativeAmount => write!(f, "Amount cannot be negative"),
            Self::EmptyCategoryName => write!(f, "Category name cannot be empty"),
            Self::ExceedsBudget { remaining } => {
                write!(
                    f,
                    "This would exceed your budget. You have {} remaining",
                    remaining
                )
            }
        }
    }
}

impl std::error::Error for EntryError {}
