use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rTimeline
/// CLI application to turn a markdown milestone table into calendar events
#[derive(Parser)]
#[command(
    name = "rtimeline",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert a markdown milestone timeline into calendar events (iCalendar, JSON, CSV)",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Print the normalized events as a table
    List {
        /// Markdown file with the timeline table ("-" for stdin)
        input: String,

        #[arg(
            long = "tz",
            value_name = "ZONE",
            help = "IANA timezone for the markers (e.g. Asia/Kolkata); defaults to the configured one"
        )]
        tz: Option<String>,
    },

    /// Export the normalized events
    Export {
        /// Markdown file with the timeline table ("-" for stdin)
        input: String,

        #[arg(
            long = "tz",
            value_name = "ZONE",
            help = "IANA timezone for the markers (e.g. Asia/Kolkata); defaults to the configured one"
        )]
        tz: Option<String>,

        #[arg(long, value_enum, default_value = "ics")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (stdout when omitted)"
        )]
        out: Option<PathBuf>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}
