use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rShiftGrid
/// Shift grid engine: replay edits over a base roster and inspect the totals
#[derive(Parser)]
#[command(
    name = "rshiftgrid",
    version = env!("CARGO_PKG_VERSION"),
    about = "Staff shift grid: resolve edits, audit status changes, count headcount and earnings",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.rshiftgrid/rshiftgrid.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Staff roster file (.csv, .json, .yaml); overrides `staff_file`
    #[arg(global = true, long = "staff", value_name = "FILE")]
    pub staff: Option<String>,

    /// Base shift records file (.csv, .json, .yaml); overrides `records_file`
    #[arg(global = true, long = "records", value_name = "FILE")]
    pub records: Option<String>,

    /// Edit script (.yaml, .json) replayed over the base records
    #[arg(global = true, long = "edits", value_name = "FILE")]
    pub edits: Option<String>,

    /// Actor recorded in the audit log for edits without one
    #[arg(global = true, long = "actor")]
    pub actor: Option<String>,

    /// Print debug diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Per-day headcount: available and unassigned staff for each role
    Grid {
        /// Period: YYYY, YYYY-MM, YYYY-MM-DD or a start:end range of those.
        /// Defaults to the current month.
        #[arg(long, short)]
        period: Option<String>,

        /// Show a single role
        #[arg(long)]
        role: Option<String>,
    },

    /// Worked days and earnings per staff member, per role and overall
    Staff {
        /// Period: YYYY, YYYY-MM, YYYY-MM-DD or a start:end range of those.
        /// Defaults to the current month.
        #[arg(long, short)]
        period: Option<String>,

        /// Show a single role
        #[arg(long)]
        role: Option<String>,
    },

    /// Show the resolved values and status history of one cell
    History {
        /// Cell as STAFF@YYYY-MM-DD
        cell: String,
    },

    /// Jump through the unassigned cells of a day and role
    Next {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Role tag, e.g. closer
        role: String,

        /// Number of consecutive jumps
        #[arg(long, short = 'n', default_value_t = 1)]
        times: usize,
    },

    /// Export the grid totals
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Period to export; defaults to the current month
        #[arg(long, short)]
        period: Option<String>,

        /// Overwrite output files without asking
        #[arg(long, short = 'f')]
        force: bool,
    },
}
