use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timetally
#[derive(Parser)]
#[command(
    name = "timetally",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time tracking CLI: record work intervals and tally billable hours",
    long_about = None
)]
pub struct Cli {
    /// Override data file path (useful for tests or custom locations)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and data files
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Run a live timing session (Enter stops and records the entry)
    Track {
        /// Hourly rate for this session (default: the saved rate)
        #[arg(long = "rate")]
        rate: Option<f64>,
    },

    /// Record a work interval with explicit start and end times
    Add {
        /// Start time (YYYY-MM-DDTHH:mm); prompted for when omitted
        #[arg(long = "start", value_name = "START")]
        start: Option<String>,

        /// End time (YYYY-MM-DDTHH:mm); prompted for when omitted
        #[arg(long = "end", value_name = "END")]
        end: Option<String>,

        /// Hourly rate (default: the saved rate)
        #[arg(long = "rate", allow_hyphen_values = true)]
        rate: Option<f64>,
    },

    /// List recorded entries and totals
    List,

    /// Delete an entry by id (or unique id prefix)
    Del {
        /// Entry id, as shown by `list`
        id: String,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Show or set the saved hourly rate
    Rate {
        #[arg(long = "set", value_name = "RATE", allow_hyphen_values = true)]
        set: Option<f64>,
    },

    /// Delete every recorded entry
    Reset {
        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Export recorded entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
