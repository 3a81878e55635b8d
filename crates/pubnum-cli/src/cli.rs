//! CLI argument definitions for the publication number converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use pubnum_cli::types::{
    DEFAULT_KIND_COLUMN, DEFAULT_NUMBER_COLUMN, DEFAULT_OUTPUT_COLUMN, DEFAULT_PREVIEW_ROWS,
};

#[derive(Parser)]
#[command(
    name = "pubnum",
    version,
    about = "Convert search-service publication numbers to DI publication numbers",
    long_about = "Convert the publication number and kind columns of a search-service CSV export\n\
                  into DI publication numbers.\n\n\
                  Era/type prefixes are rewritten to JP or JP1, spaces and hyphens are removed,\n\
                  and the parenthesized kind code (e.g. （Ｂ２）) is appended as a suffix."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Include timestamps in log lines.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a CSV export and write it with the derived column in front.
    Convert(ConvertArgs),

    /// Convert a single publication number and kind description.
    Normalize(NormalizeArgs),

    /// List the prefix rewrite rules in evaluation order.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// CSV export to convert (`-` reads stdin).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV path (default: <INPUT stem>_di_numbers.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Column holding the publication number.
    #[arg(long = "number-column", value_name = "NAME", default_value = DEFAULT_NUMBER_COLUMN)]
    pub number_column: String,

    /// Column holding the publication kind description.
    #[arg(long = "kind-column", value_name = "NAME", default_value = DEFAULT_KIND_COLUMN)]
    pub kind_column: String,

    /// Name of the derived column.
    #[arg(long = "output-column", value_name = "NAME", default_value = DEFAULT_OUTPUT_COLUMN)]
    pub output_column: String,

    /// Number of converted rows to preview.
    #[arg(long = "preview", value_name = "N", default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub preview: usize,

    /// Skip the preview table.
    #[arg(long = "no-preview")]
    pub no_preview: bool,

    /// Convert and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the run summary as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Publication number, e.g. 特開平10-123456.
    #[arg(value_name = "NUMBER")]
    pub number: String,

    /// Publication kind description, e.g. 公開特許公報（Ａ）.
    #[arg(value_name = "KIND", default_value = "")]
    pub kind: String,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// Print the rules as JSON.
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
