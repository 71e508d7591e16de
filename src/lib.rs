//! outlay - Terminal-based personal expense tracker
//!
//! This library provides the core functionality for the outlay expense
//! tracker: an in-memory ledger of category/amount line items and the
//! derived spending indicators computed over it. The core is independent
//! of any presentation; the CLI and interactive session live at the edge.
//!
//! # Architecture
//!
//! - `error`: Custom error types
//! - `models`: The expense value type and amount-string parsing
//! - `ledger`: The ordered, mutable expense collection
//! - `reports`: Indicator computation (total, average per day, top 3)
//! - `display`: Terminal formatting for tables and summaries
//! - `export`: CSV snapshot export
//! - `cli`: Command handlers and the interactive session
//!
//! # Example
//!
//! ```rust
//! use outlay::{Indicators, Ledger};
//!
//! let mut ledger = Ledger::new();
//! ledger.add("Groceries", 120.0)?;
//! let indicators = Indicators::compute(&ledger.snapshot());
//! assert_eq!(indicators.total, 120.0);
//! # Ok::<(), outlay::ValidationError>(())
//! ```

pub mod cli;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;

pub use error::{OutlayError, OutlayResult, ParseError, ValidationError};
pub use ledger::Ledger;
pub use models::Expense;
pub use reports::Indicators;
