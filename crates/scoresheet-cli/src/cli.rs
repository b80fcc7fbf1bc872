//! CLI argument definitions for the score sheet encoder.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "scoresheet",
    version,
    about = "Score sheet encoder - assemble exam score sheets from enrollment records",
    long_about = "Assemble printable score sheet documents from exam enrollment,\n\
                  attribution, deadline and organizational-entity records.\n\
                  Input is a JSON record snapshot; output is the nested score\n\
                  sheet document consumed by the rendering layer."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Assemble the score sheet document from a record snapshot.
    Build(BuildArgs),

    /// List every course offering with its resolved score sheet address.
    Addresses(AddressesArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Path to the JSON record snapshot.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Write the document to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Publication date, YYYY-MM-DD (default: today).
    #[arg(long = "as-of", value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Locale file overriding the built-in date format and country names.
    #[arg(long = "locale", value_name = "PATH")]
    pub locale: Option<PathBuf>,
}

#[derive(Parser)]
pub struct AddressesArgs {
    /// Path to the JSON record snapshot.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Resolution date, YYYY-MM-DD (default: today).
    #[arg(long = "as-of", value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Locale file overriding the built-in date format and country names.
    #[arg(long = "locale", value_name = "PATH")]
    pub locale: Option<PathBuf>,
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
