//! Main entry point for the courtbook CLI.
//!
//! This is the command-line interface for the courtbook reservation system.
//! It provides commands for managing court reservations:
//! - `book`: Book a court slot
//! - `cancel`: Cancel an existing reservation
//! - `schedule`: Print the schedule for a date range
//! - `export`: Export the schedule to CSV or JSON

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = courtbook::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Book(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::Schedule(cmd) => cmd.execute(&global),
        cli::Command::Export(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
