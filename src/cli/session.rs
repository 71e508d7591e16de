//! Interactive session
//!
//! A line-oriented read-eval-render loop over the ledger. The table is
//! re-rendered after every mutation here, at the call site; the ledger
//! itself never prints. Invalid input reports the error and the loop
//! keeps going, so no user mistake ends the session.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::display::{format_expense_table, format_indicators};
use crate::error::OutlayResult;
use crate::export::export_snapshot_to_path;
use crate::ledger::Ledger;
use crate::models::parse_amount;
use crate::reports::Indicators;

const HELP: &str = "\
Commands:
  add <category> <amount>   Add an expense (amount accepts $ and , formats)
  del <index>               Delete the expense at a table index
  list                      Show the expense table
  calc                      Compute total, average per day, and top 3
  clear                     Remove all expenses
  sample                    Load the six-entry sample set
  export <path>             Write the current expenses to a CSV file
  help                      Show this help
  quit                      Exit
";

enum Flow {
    Continue,
    Quit,
}

/// Run the interactive session until `quit` or end of input
pub fn run_session<R: BufRead, W: Write>(input: R, output: &mut W) -> OutlayResult<()> {
    let mut ledger = Ledger::new();

    writeln!(output, "outlay interactive session. Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match execute(&mut ledger, trimmed, output)? {
            Flow::Continue => {}
            Flow::Quit => break,
        }
    }

    writeln!(output, "Bye.")?;
    Ok(())
}

fn execute<W: Write>(ledger: &mut Ledger, line: &str, output: &mut W) -> OutlayResult<Flow> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (command, args) = match tokens.split_first() {
        Some((command, args)) => (*command, args),
        None => return Ok(Flow::Continue),
    };

    match command {
        "add" => handle_add(ledger, args, output)?,

        "del" | "rm" => handle_delete(ledger, args, output)?,

        "list" => write!(output, "{}", format_expense_table(ledger.expenses()))?,

        "calc" => {
            let indicators = Indicators::compute(ledger.expenses());
            write!(output, "{}", format_indicators(&indicators))?;
        }

        "clear" => {
            ledger.clear();
            write!(output, "{}", format_expense_table(ledger.expenses()))?;
        }

        "sample" => {
            ledger.load_sample();
            write!(output, "{}", format_expense_table(ledger.expenses()))?;
        }

        "export" => handle_export(ledger, args, output)?,

        "help" => write!(output, "{}", HELP)?,

        "quit" | "exit" | "q" => return Ok(Flow::Quit),

        other => writeln!(output, "Unknown command '{}'. Type 'help'.", other)?,
    }

    Ok(Flow::Continue)
}

fn handle_add<W: Write>(ledger: &mut Ledger, args: &[&str], output: &mut W) -> OutlayResult<()> {
    // The last token is the amount; everything before it is the category,
    // so multi-word categories need no quoting.
    let (amount_raw, category_words) = match args.split_last() {
        Some(split) if args.len() >= 2 => split,
        _ => {
            writeln!(output, "Usage: add <category> <amount>")?;
            return Ok(());
        }
    };

    let amount = match parse_amount(amount_raw) {
        Ok(amount) => amount,
        Err(err) => {
            writeln!(output, "{}", err)?;
            return Ok(());
        }
    };

    match ledger.add(&category_words.join(" "), amount) {
        Ok(()) => write!(output, "{}", format_expense_table(ledger.expenses()))?,
        Err(err) => writeln!(output, "{}", err)?,
    }

    Ok(())
}

fn handle_delete<W: Write>(ledger: &mut Ledger, args: &[&str], output: &mut W) -> OutlayResult<()> {
    let index = match args.first().map(|raw| raw.parse::<usize>()) {
        Some(Ok(index)) => index,
        _ => {
            writeln!(output, "Usage: del <index>")?;
            return Ok(());
        }
    };

    match ledger.remove_at(index) {
        Ok(removed) => {
            writeln!(output, "Deleted {}.", removed.category())?;
            write!(output, "{}", format_expense_table(ledger.expenses()))?;
        }
        Err(err) => writeln!(output, "{}", err)?,
    }

    Ok(())
}

fn handle_export<W: Write>(ledger: &Ledger, args: &[&str], output: &mut W) -> OutlayResult<()> {
    let path = match args.first() {
        Some(path) => Path::new(path),
        None => {
            writeln!(output, "Usage: export <path>")?;
            return Ok(());
        }
    };

    match export_snapshot_to_path(ledger.expenses(), path) {
        Ok(()) => writeln!(
            output,
            "Exported {} expenses to {}.",
            ledger.len(),
            path.display()
        )?,
        Err(err) => writeln!(output, "{}", err)?,
    }

    Ok(())
}
