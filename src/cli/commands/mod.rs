//! CLI commands module

pub mod patterns;
pub mod scan;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Report output formats
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Machine-readable JSON report
    Json,
    /// Colored human-readable report
    Terminal,
}

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// File to scan for leaked tokens
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// GitHub API token configuration (checked at startup)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Override the high-risk scope list (comma-separated scope names)
    #[arg(long, value_name = "SCOPES", value_delimiter = ',')]
    pub high_risk_scopes: Option<Vec<String>>,
}

/// Arguments for the patterns command
#[derive(Args, Debug)]
pub struct PatternsArgs {
    /// Output format
    #[arg(short, long, default_value = "terminal")]
    pub format: OutputFormat,
}
