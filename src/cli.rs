use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// A tool to filter an entity dataset and cross-tabulate property values
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The data file to be processed
    #[arg(short, long, default_value = "entities.json")]
    pub input: PathBuf,

    /// Model(s) to include, as one comma-separated list (e.g. -m Person,Org)
    #[arg(short, long)]
    pub models: Vec<String>,

    /// Properties to filter on, format slug:value1,value2
    #[arg(short, long)]
    pub properties: Vec<String>,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the rendered output to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Reorder each property's value counts in the rendered output
    #[arg(long, value_enum, default_value_t = SortOrder::None)]
    pub sort: SortOrder,

    /// Control colored console output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Increase diagnostic output on stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress warnings and summary chatter
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Text,
    /// Machine-readable JSON
    Json,
}

/// How value counts are ordered within each property
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// First-encounter order, as aggregated
    None,
    /// Highest count first, ties by value
    Count,
    /// Lexical by value
    Value,
}

/// Color output control
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Let the terminal decide
    Auto,
    /// Force colors on
    Always,
    /// Disable colors
    Never,
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
