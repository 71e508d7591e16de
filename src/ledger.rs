//! The expense ledger
//!
//! Owns the ordered sequence of expenses. Insertion order is significant:
//! it defines display order and the tie-break for equal amounts in the
//! indicator reports. All mutation goes through the methods here; callers
//! only ever see read-only views or owned copies.

use crate::error::{LedgerResult, ValidationError};
use crate::models::Expense;

/// The fixed demonstration set loaded by [`Ledger::load_sample`]
const SAMPLE_EXPENSES: [(&str, f64); 6] = [
    ("Groceries", 15000.0),
    ("Rent", 40000.0),
    ("Transportation", 5000.0),
    ("Entertainment", 10000.0),
    ("Communication", 2000.0),
    ("Gym", 3000.0),
];

/// An ordered collection of expenses
///
/// Starts empty. The only mutations are `add`, `remove_at`, `clear`, and
/// `load_sample`; each either completes or leaves the ledger untouched.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new expense to the end of the ledger
    ///
    /// Fails with [`ValidationError::EmptyCategory`] if the category is
    /// empty after trimming, or [`ValidationError::InvalidAmount`] if the
    /// amount is negative or not finite. On failure the ledger is
    /// unchanged.
    pub fn add(&mut self, category: &str, amount: f64) -> LedgerResult<()> {
        let expense = Expense::new(category, amount)?;
        self.expenses.push(expense);
        Ok(())
    }

    /// Remove the expense at `index`, shifting later entries down
    ///
    /// Removal is positional, not identity-based, so an index is only
    /// valid immediately before the call; any intervening mutation may
    /// re-point it at a different expense. Fails with
    /// [`ValidationError::IndexOutOfRange`] outside `[0, len)`. Returns
    /// the removed expense.
    pub fn remove_at(&mut self, index: usize) -> LedgerResult<Expense> {
        if index >= self.expenses.len() {
            return Err(ValidationError::IndexOutOfRange {
                index,
                len: self.expenses.len(),
            });
        }
        Ok(self.expenses.remove(index))
    }

    /// Remove all expenses
    pub fn clear(&mut self) {
        self.expenses.clear();
    }

    /// Replace the contents with a fresh copy of the sample set
    ///
    /// Previous contents are discarded. Each call produces independent
    /// copies, so mutating the ledger afterwards never affects a later
    /// `load_sample`.
    pub fn load_sample(&mut self) {
        self.expenses = SAMPLE_EXPENSES
            .iter()
            .map(|(category, amount)| Expense::from_parts(category, *amount))
            .collect();
    }

    /// An owned copy of the current contents, in insertion order
    pub fn snapshot(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    /// A read-only view of the current contents
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of expenses in the ledger
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
