//! Derived reports over ledger snapshots
//!
//! Reports never hold a reference into the ledger beyond one call; they
//! take a snapshot, compute, and return plain values.

pub mod indicators;

pub use indicators::{top_expenses, Indicators, DAYS_IN_MONTH};
