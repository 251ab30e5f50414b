//! Terminal output formatting with colors

use colored::Colorize;

use super::ReportRenderer;
use crate::analysis::{RiskLevel, ScanReport, TokenAnalysis};
use crate::error::TokenLensError;

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn format_header(&self, report: &ScanReport) -> String {
        format!(
            r#"
{} v{}

{} {}
{} {}
"#,
            "tokenlens".cyan().bold(),
            env!("CARGO_PKG_VERSION"),
            "Source:".dimmed(),
            report.scanned_source.white().bold(),
            "Tokens found:".dimmed(),
            report.tokens_found.to_string().yellow()
        )
    }

    fn format_results(&self, report: &ScanReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  SCAN RESULTS".bold()
        ));

        if let Some(message) = &report.message {
            output.push_str(&format!("  {}\n", message.green()));
            return output;
        }

        for analysis in &report.results {
            output.push_str(&self.format_analysis(analysis));
        }

        output
    }

    fn format_analysis(&self, analysis: &TokenAnalysis) -> String {
        // Tokens are masked in terminal output; the JSON report carries
        // them verbatim for tooling that needs the full value.
        let mut output = format!(
            "  {} {}\n",
            "•".dimmed(),
            analysis.redacted_token().cyan()
        );

        if analysis.token_valid {
            if let Some(user) = &analysis.user {
                output.push_str(&format!(
                    "    {} owner: {} ({})\n",
                    "└─".dimmed(),
                    user.login.as_deref().unwrap_or("<unknown>"),
                    user.account_type.as_deref().unwrap_or("<unknown>")
                ));
            }

            if let Some(scopes) = &analysis.scopes {
                let rendered = if scopes.is_empty() {
                    "(none)".to_string()
                } else {
                    scopes.join(", ")
                };
                output.push_str(&format!("    {} scopes: {}\n", "└─".dimmed(), rendered));
            }

            if let Some(classification) = &analysis.classification {
                let risk = match classification.risk_level {
                    RiskLevel::High => "HIGH RISK".red().bold(),
                    RiskLevel::Low => "low risk".green(),
                };
                output.push_str(&format!("    {} {}\n", "└─".dimmed(), risk));
                for reason in &classification.justification {
                    output.push_str(&format!("       {}\n", reason.dimmed()));
                }
            }
        } else {
            let detail = match (&analysis.http_status, &analysis.error) {
                (Some(status), _) => format!("HTTP {}", status),
                (None, Some(error)) => error.clone(),
                (None, None) => "unknown failure".to_string(),
            };
            output.push_str(&format!(
                "    {} {} ({})\n",
                "└─".dimmed(),
                "invalid or revoked".yellow(),
                detail.dimmed()
            ));
            if let Some(action) = &analysis.recommended_action {
                output.push_str(&format!("       {}\n", action.dimmed()));
            }
        }

        output.push('\n');
        output
    }

    fn format_summary(&self, report: &ScanReport) -> String {
        let mut output = String::new();

        if report.results.is_empty() {
            return output;
        }

        let valid = report.results.iter().filter(|r| r.token_valid).count();
        let invalid = report.results.len() - valid;

        output.push_str(&format!(
            "{}\nLive: {} │ Invalid: {}\n",
            "━".repeat(50).dimmed(),
            valid.to_string().red().bold(),
            invalid.to_string().yellow().bold()
        ));

        if valid > 0 {
            output.push_str(&format!(
                "\n{} {} live token(s) must be rotated immediately.\n",
                "⚠️ ".yellow(),
                valid
            ));
        }

        output
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TerminalOutput {
    fn render_report(&self, report: &ScanReport) -> Result<String, TokenLensError> {
        let mut output = self.format_header(report);
        output.push_str(&self.format_results(report));
        output.push_str(&self.format_summary(report));
        Ok(output)
    }
}
