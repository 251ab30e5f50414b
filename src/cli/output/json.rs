//! JSON output formatting

use super::ReportRenderer;
use crate::analysis::ScanReport;
use crate::error::TokenLensError;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for JsonOutput {
    fn render_report(&self, report: &ScanReport) -> Result<String, TokenLensError> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
