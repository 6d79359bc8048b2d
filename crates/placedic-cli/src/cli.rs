//! CLI argument definitions for the place-name dictionary builder.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "placedic",
    version,
    about = "Build a Mozc place-name dictionary from Japan Post registry CSV files",
    long_about = "Build a Mozc place-name dictionary from Japan Post registry CSV files.\n\n\
                  Reads the nationwide address table (KEN_ALL.CSV) and the business\n\
                  address table (JIGYOSYO.CSV), both in Shift_JIS, and writes a sorted,\n\
                  tab-separated dictionary of hiragana readings and place names."
)]
pub struct Cli {
    /// Path to the nationwide address CSV (KEN_ALL.CSV).
    #[arg(value_name = "KEN_ALL")]
    pub address_csv: PathBuf,

    /// Path to the business address CSV (JIGYOSYO.CSV).
    #[arg(value_name = "JIGYOSYO")]
    pub business_csv: PathBuf,

    /// Output dictionary file (default: mozcdic-ut-place-names.txt).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Word cost written on every line (default: 8000).
    #[arg(long = "cost", allow_negative_numbers = true)]
    pub cost: Option<i32>,

    /// Part-of-speech ID used for both the left and right context (default: 1847).
    #[arg(long = "pos-id", value_name = "ID")]
    pub pos_id: Option<u16>,

    /// Address combinations to emit for each registry row.
    #[arg(long = "combinations", value_enum)]
    pub combinations: Option<CombinationArg>,

    /// Keep entries whose reading is not pure hiragana.
    #[arg(long = "no-validate")]
    pub no_validate: bool,

    /// Log unreadable source files and continue instead of aborting.
    ///
    /// WARNING: the dictionary may silently miss a whole source.
    #[arg(long = "lenient-inputs")]
    pub lenient_inputs: bool,

    /// Minimum character count of a business name (0 disables the check).
    #[arg(long = "min-surface-chars", value_name = "N")]
    pub min_surface_chars: Option<usize>,

    /// TOML configuration file; command-line flags take precedence.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Build and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI address combination choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum CombinationArg {
    /// Prefecture + city + town only.
    Full,
    /// Full combination plus city + town.
    CityTown,
    /// Every level alone, cumulative prefixes, and city + town.
    Hierarchical,
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
