//! Display formatting for terminal output
//!
//! Formats expenses and indicators for terminal display. Everything here
//! is presentation only; the core never formats or prints.

pub mod currency;
pub mod expense;

pub use currency::format_currency;
pub use expense::{format_expense_table, format_indicators};
