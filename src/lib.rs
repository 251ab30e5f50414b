//! TokenLens Library
//!
//! This crate provides the core functionality for detecting leaked GitHub
//! tokens in arbitrary text and assessing the risk of each discovered token
//! by querying the GitHub identity endpoint.

pub mod analysis;
pub mod cli;
pub mod detector;
pub mod error;
pub mod providers;

pub use error::TokenLensError;

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
