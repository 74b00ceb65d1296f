//! CLI argument definitions for the layout tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "uilayout",
    version,
    about = "Compact and inspect UI layout documents",
    long_about = "Load UI layout documents against the stock style sheet and re-save them.\n\n\
                  Attributes equal to a declared default or to the value the active style\n\
                  already supplies are left out of the saved document."
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
    /// Re-save a layout without redundant attributes.
    Compact(CompactArgs),

    /// Load a layout and report what it contains.
    Check(CheckArgs),

    /// List the registered layout types.
    Types(TypesArgs),
}

#[derive(Parser)]
pub struct CompactArgs {
    /// Layout document to read.
    #[arg(value_name = "LAYOUT")]
    pub input: PathBuf,

    /// Write the result here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the whole document on a single line.
    #[arg(long = "single-line")]
    pub single_line: bool,

    /// Only drop attributes equal to declared defaults.
    ///
    /// Objects are still constructed against the stock style sheet; style
    /// values are just not treated as redundant.
    #[arg(long = "no-stylesheet")]
    pub no_stylesheet: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Layout document to read.
    #[arg(value_name = "LAYOUT")]
    pub input: PathBuf,

    /// Print the report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct TypesArgs {
    /// Print the type list as JSON.
    #[arg(long = "json")]
    pub json: bool,
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
