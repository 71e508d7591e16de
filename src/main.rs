use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;

use outlay::cli::{handle_parse_command, handle_sample_command, run_session};

#[derive(Parser)]
#[command(
    name = "outlay",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "outlay is a terminal-based personal expense tracker. Enter labeled \
                  expense line items, view them in a table, and compute spending \
                  indicators: total, average per day, and the top 3 expenses."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive session
    #[command(alias = "ui")]
    Interactive,

    /// Load the sample expenses and show the indicator report
    Sample {
        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Parse an amount string and print the numeric value
    Parse {
        /// Raw amount text, e.g. "$1,200.50"
        raw: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Interactive) => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_session(stdin.lock(), &mut stdout)?;
        }
        Some(Commands::Sample { json }) => {
            handle_sample_command(json)?;
        }
        Some(Commands::Parse { raw }) => {
            handle_parse_command(&raw)?;
        }
        None => {
            println!("outlay - Terminal-based personal expense tracker");
            println!();
            println!("Run 'outlay --help' for usage information.");
            println!("Run 'outlay interactive' to start tracking expenses.");
        }
    }

    Ok(())
}
