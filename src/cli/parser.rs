use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftcal
/// CLI shift calendar: net worked hours per day, week and month using SQLite
#[derive(Parser)]
#[command(
    name = "shiftcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Shift calendar calculator: enter shift codes per day, get net hours per week and month",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage shift codes (the legend)
    Code {
        #[command(subcommand)]
        action: CodeAction,
    },

    /// Edit one day: codes, training hours, overtime minutes
    Day {
        /// Date of the day (YYYY-MM-DD)
        date: String,

        /// Shift codes, e.g. "n10" or "vroeg+bijs" (comma or + separated)
        #[arg(long = "codes", short = 'c')]
        codes: Option<String>,

        /// Training hours entered by hand (e.g. 2.5)
        #[arg(long = "training", short = 't')]
        training: Option<f64>,

        /// Overtime in minutes
        #[arg(long = "overtime", short = 'o')]
        overtime: Option<u32>,
    },

    /// Show a month: days per ISO week with week and month totals
    Show {
        /// Month (YYYY-MM), default: current month
        month: Option<String>,

        #[arg(long = "prev", conflicts_with = "next", help = "Month before the given one")]
        prev: bool,

        #[arg(long = "next", help = "Month after the given one")]
        next: bool,

        #[arg(long = "recalc", help = "Recompute totals instead of using cached ones")]
        recalc: bool,
    },

    /// Regenerate all days of a month as blank
    Reset {
        /// Month (YYYY-MM)
        month: String,
    },

    /// Export the computed days of a month
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "YYYY-MM", help = "Month to export (default: current)")]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum CodeAction {
    /// Print the legend of all shift codes
    List,

    /// Create or update a shift code
    Set {
        /// Code name (case-insensitive)
        code: String,

        #[arg(long = "start", help = "Start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "end", help = "End time (HH:MM); at or before start means next day")]
        end: Option<String>,

        #[arg(long = "break", help = "Unpaid break in minutes")]
        break_minutes: Option<u32>,

        #[arg(long = "label", help = "Description shown in the legend")]
        label: Option<String>,

        #[arg(
            long = "variable",
            conflicts_with_all = ["start", "end"],
            help = "Remove the time range (code worth 0 hours by itself)"
        )]
        variable: bool,
    },

    /// Delete a shift code
    Del {
        code: String,
    },
}
