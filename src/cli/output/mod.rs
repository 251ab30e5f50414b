//! Output formatting module for CLI

pub mod json;
mod terminal;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

use crate::analysis::ScanReport;
use crate::error::TokenLensError;

/// Trait for rendering a scan report
pub trait ReportRenderer {
    fn render_report(&self, report: &ScanReport) -> Result<String, TokenLensError>;
}
