//! CLI argument definitions for the DangerMap replay tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use dmap_model::ViewSelector;

#[derive(Parser)]
#[command(
    name = "dmap",
    version,
    about = "DangerMap core - replay incident reporting sessions",
    long_about = "Replay a scripted incident reporting session and print the\n\
                  visible reports, or list the category/kind taxonomy.\n\
                  Session scripts are JSON event files; see the replay command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow precise reporter positions in log output.
    #[arg(long = "log-position", global = true)]
    pub log_position: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay a session event file and print the visible reports.
    Replay(ReplayArgs),

    /// List the incident categories and their kind vocabularies.
    Kinds,
}

#[derive(Parser)]
pub struct ReplayArgs {
    /// Path to the JSON session event file.
    #[arg(value_name = "EVENTS_FILE")]
    pub events_file: PathBuf,

    /// View selector applied after the replay, before rendering.
    #[arg(long = "selector", value_enum)]
    pub selector: Option<SelectorArg>,
}

/// CLI view selector choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SelectorArg {
    All,
    Crime,
    Disaster,
}

impl From<SelectorArg> for ViewSelector {
    fn from(arg: SelectorArg) -> Self {
        match arg {
            SelectorArg::All => ViewSelector::All,
            SelectorArg::Crime => ViewSelector::Crime,
            SelectorArg::Disaster => ViewSelector::Disaster,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
