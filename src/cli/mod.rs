//! CLI command handlers
//!
//! Bridges clap argument parsing (in `main.rs`) with the ledger, report,
//! and display layers.

pub mod session;

pub use session::run_session;

use serde::Serialize;

use crate::display::{format_expense_table, format_indicators};
use crate::error::OutlayResult;
use crate::ledger::Ledger;
use crate::models::{parse_amount, Expense};
use crate::reports::Indicators;

/// JSON shape emitted by `outlay sample --json`
#[derive(Serialize)]
struct SampleOutput {
    expenses: Vec<Expense>,
    indicators: Indicators,
}

/// Handle `outlay sample`: load the sample set and report on it
pub fn handle_sample_command(json: bool) -> OutlayResult<()> {
    let mut ledger = Ledger::new();
    ledger.load_sample();

    let expenses = ledger.snapshot();
    let indicators = Indicators::compute(&expenses);

    if json {
        let output = SampleOutput {
            expenses,
            indicators,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", format_expense_table(&expenses));
        println!();
        print!("{}", format_indicators(&indicators));
    }

    Ok(())
}

/// Handle `outlay parse`: run the amount parser over raw text
pub fn handle_parse_command(raw: &str) -> OutlayResult<()> {
    let value = parse_amount(raw)?;
    println!("{}", value);
    Ok(())
}
