use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CadenceError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Spacing '{0}' must be at least one working day")]
    ZeroSpacing(&'static str),

    #[error("max_cycles must be at least 1")]
    NoCycles,

    #[error("Task label must not be empty")]
    EmptyLabel,

    #[error("Invalid date format '{0}'")]
    DateFormat(String),
}

/// Bad values supplied on the command line. The calculator itself never
/// rejects input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid date '{input}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Series length must be at least 1")]
    EmptySeries,

    #[error("Contract end {end} is before anchor {anchor}")]
    EndBeforeAnchor { anchor: String, end: String },
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write report: {0}")]
    WriteReport(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
