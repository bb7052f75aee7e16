//! CLI argument definitions for the staycast dashboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "staycast",
    version,
    about = "Staycast - explore hotel bookings and score cancellation risk",
    long_about = "Explore a hotel-booking dataset and score cancellation risk.\n\n\
                  Predictions use a pre-trained random-forest classifier and its\n\
                  input schema, loaded from a model directory or remote artifact\n\
                  store."
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
    /// Summarize the dataset: dimensions and a per-column profile.
    Overview(OverviewArgs),

    /// Explore the dataset: preview, distributions, cancellation rates.
    Explore(ExploreArgs),

    /// Score a booking against the trained classifier.
    Predict(PredictArgs),

    /// Print the expected input columns of the model schema.
    Schema(SchemaArgs),
}

#[derive(Parser)]
pub struct OverviewArgs {
    /// Path to the bookings CSV file.
    #[arg(value_name = "DATA_CSV")]
    pub data: PathBuf,
}

#[derive(Parser)]
pub struct ExploreArgs {
    /// Path to the bookings CSV file.
    #[arg(value_name = "DATA_CSV")]
    pub data: PathBuf,

    /// Number of preview rows to print.
    #[arg(long = "rows", value_name = "N", default_value_t = 5)]
    pub rows: usize,

    /// Numeric column to summarize (repeatable; defaults to the well-known
    /// booking measures present in the dataset).
    #[arg(long = "numeric", value_name = "COLUMN")]
    pub numeric: Vec<String>,

    /// Categorical column to count (repeatable; defaults to the well-known
    /// booking categories present in the dataset).
    #[arg(long = "categorical", value_name = "COLUMN")]
    pub categorical: Vec<String>,

    /// Maximum category levels to print per column.
    #[arg(long = "top", value_name = "N", default_value_t = 10)]
    pub top: usize,
}

/// Where to find the model artifacts.
#[derive(Parser)]
pub struct ModelArgs {
    /// Directory holding schema.json and forest.json
    /// (default: $STAYCAST_MODEL_DIR).
    #[arg(long = "model-dir", value_name = "DIR")]
    pub model_dir: Option<PathBuf>,

    /// Schema artifact path or URL (overrides --model-dir).
    #[arg(long = "schema", value_name = "SRC")]
    pub schema: Option<String>,

    /// Forest artifact path or URL (overrides --model-dir).
    #[arg(long = "forest", value_name = "SRC")]
    pub forest: Option<String>,
}

#[derive(Parser)]
pub struct PredictArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Days between booking and arrival.
    #[arg(long = "lead-time", value_name = "DAYS")]
    pub lead_time: Option<u32>,

    /// Average daily rate.
    #[arg(long = "adr", value_name = "RATE")]
    pub adr: Option<f64>,

    /// Number of adults.
    #[arg(long = "adults", value_name = "N")]
    pub adults: Option<u32>,

    /// Number of children.
    #[arg(long = "children", value_name = "N")]
    pub children: Option<u32>,

    /// Number of babies.
    #[arg(long = "babies", value_name = "N")]
    pub babies: Option<u32>,

    /// Deposit type (e.g. "No Deposit", "Non Refund", "Refundable").
    #[arg(long = "deposit-type", value_name = "TYPE")]
    pub deposit_type: Option<String>,

    /// Market segment (e.g. "Online TA", "Direct", "Groups").
    #[arg(long = "market-segment", value_name = "SEGMENT")]
    pub market_segment: Option<String>,

    /// Additional input field as NAME=VALUE (repeatable). Numeric values
    /// are taken as numbers, everything else as a category level.
    #[arg(long = "field", value_name = "NAME=VALUE")]
    pub fields: Vec<String>,
}

#[derive(Parser)]
pub struct SchemaArgs {
    #[command(flatten)]
    pub model: ModelArgs,
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
