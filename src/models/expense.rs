//! Expense value type
//!
//! An expense is one category/amount line item. Fields are private so an
//! `Expense` can only exist with a non-empty category and a non-negative,
//! finite amount; edits replace the value, they never mutate it.

use serde::Serialize;

use crate::error::ValidationError;

/// A single expense line item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    category: String,
    amount: f64,
}

impl Expense {
    /// Create a new expense, validating both fields
    ///
    /// The category is trimmed of surrounding whitespace and must be
    /// non-empty afterwards. The amount must be finite and non-negative.
    ///
    /// # Examples
    /// ```
    /// use outlay::models::Expense;
    /// let expense = Expense::new("Groceries", 15000.0).unwrap();
    /// assert_eq!(expense.category(), "Groceries");
    /// ```
    pub fn new(category: &str, amount: f64) -> Result<Self, ValidationError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(ValidationError::InvalidAmount(amount));
        }

        Ok(Self {
            category: category.to_string(),
            amount,
        })
    }

    /// Construct without validation. Callers must guarantee the fields
    /// already satisfy the `new` constraints.
    pub(crate) fn from_parts(category: &str, amount: f64) -> Self {
        Self {
            category: category.to_string(),
            amount,
        }
    }

    /// The expense category
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The expense amount
    pub fn amount(&self) -> f64 {
        self.amount
    }
}
