//! TokenLens - A CLI tool to detect leaked GitHub tokens in text and assess their risk
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod analysis;
mod cli;
mod detector;
mod error;
mod providers;

use error::TokenLensError;

/// Exit codes for the CLI
pub mod exit_codes {
    /// Success - no tokens detected
    pub const SUCCESS: i32 = 0;
    /// One or more tokens detected
    pub const TOKENS_FOUND: i32 = 1;
    /// Configuration or usage error (missing input file, missing credential)
    pub const CONFIG_ERROR: i32 = 2;
    /// Internal runtime error
    pub const ERROR: i32 = 3;
}

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), TokenLensError> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    // Execute the appropriate command
    let result = match cli.command {
        Commands::Scan(args) => cli::commands::scan::execute(args).await,
        Commands::Patterns(args) => cli::commands::patterns::execute(args),
    };

    // Handle exit codes for CI integration
    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
