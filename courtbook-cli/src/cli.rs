//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{BookCommand, CancelCommand, ExportCommand, ScheduleCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing court reservations.
#[derive(Parser)]
#[command(name = "courtbook")]
#[command(version, about = "Manage court reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "COURTBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(
        long,
        value_name = "SECONDS",
        global = true,
        env = "COURTBOOK_BUSY_TIMEOUT"
    )]
    pub busy_timeout: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Book a court slot
    Book(BookCommand),

    /// Cancel an existing reservation
    Cancel(CancelCommand),

    /// Print the schedule for a date range
    Schedule(ScheduleCommand),

    /// Export the schedule to CSV or JSON
    Export(ExportCommand),
}
