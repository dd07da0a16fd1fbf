pub mod cycle;
pub mod dates;
pub mod due;
pub mod schema;
pub mod series;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use workcadence::CadenceMode;

#[derive(Parser)]
#[command(name = "workcadence")]
#[command(
    author,
    version,
    about = "Working-day due dates for recurring task series"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (defaults are used if it does not exist)
    #[arg(
        short,
        long,
        global = true,
        env = "WORKCADENCE_CONFIG",
        default_value = "workcadence.yaml"
    )]
    pub config: PathBuf,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the due date of a single cycle
    Due(DueArgs),

    /// Generate the due dates of a whole series
    Series(SeriesArgs),

    /// Print the cycle number encoded in task names
    Cycle(CycleArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct DueArgs {
    /// Series start date (YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS])
    #[arg(long, value_parser = dates::parse_date)]
    pub anchor: NaiveDateTime,

    /// Cycle number; fractional and non-positive values are normalized
    #[arg(long, allow_negative_numbers = true, conflicts_with = "name")]
    pub cycle: Option<f64>,

    /// Read the cycle number from a task name like "Medium - 3"
    #[arg(long)]
    pub name: Option<String>,

    /// Cadence mode (initial or renewal); overrides config
    #[arg(short, long)]
    pub mode: Option<CadenceMode>,
}

#[derive(Parser, Clone)]
pub struct SeriesArgs {
    /// Series start date (YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS])
    #[arg(long, value_parser = dates::parse_date)]
    pub anchor: NaiveDateTime,

    /// Number of cycles to generate
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Contract end; cycles due after it are dropped
    #[arg(long, value_parser = dates::parse_date)]
    pub until: Option<NaiveDateTime>,

    /// Cadence mode (initial or renewal); overrides config
    #[arg(short, long)]
    pub mode: Option<CadenceMode>,

    /// Task label; overrides config
    #[arg(short, long)]
    pub label: Option<String>,

    /// Output format for stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write JSON and Markdown reports to the report directory
    #[arg(long)]
    pub write: bool,

    /// Override report directory
    #[arg(long)]
    pub report_dir: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct CycleArgs {
    /// Task names to parse
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}
