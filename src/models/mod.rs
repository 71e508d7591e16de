//! Core data models for outlay
//!
//! This module contains the expense value type and the amount-string parser
//! that callers run over raw user input before adding to the ledger.

pub mod amount;
pub mod expense;

pub use amount::parse_amount;
pub use expense::Expense;
