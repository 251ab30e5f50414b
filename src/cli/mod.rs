//! # CLI Module
//!
//! This module defines the command-line interface for TokenLens using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `scan` | Scan a file for leaked GitHub tokens and assess their risk |
//! | `patterns` | List the token shapes the detector knows about |
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//!
//! ## Examples
//!
//! ```bash
//! # Scan a file, JSON report on stdout
//! tokenlens scan ./build.log
//!
//! # Colored terminal report written to a file
//! tokenlens scan ./build.log --format terminal -o findings.txt
//!
//! # Show supported token shapes
//! tokenlens patterns
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use commands::{PatternsArgs, ScanArgs};

/// TokenLens - Detect leaked GitHub tokens in text and assess their risk
#[derive(Parser, Debug)]
#[command(name = "tokenlens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a file for leaked GitHub tokens and assess their risk
    Scan(ScanArgs),

    /// List the token shapes the detector knows about
    Patterns(PatternsArgs),
}
