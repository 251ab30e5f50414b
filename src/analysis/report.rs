//! # Scan Report Structures
//!
//! This module defines the data structures for representing per-token
//! analysis outcomes and the aggregated scan report.
//!
//! ## Overview
//!
//! - [`TokenAnalysis`] - Outcome of analyzing one candidate token
//! - [`ScanReport`] - Aggregated, immutable result of one scan run
//!
//! Both are created once and never mutated afterwards; the report is the
//! pipeline's terminal artifact and is handed to a renderer as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::classifier::Classification;
use crate::providers::{Identity, ResolutionFailure};

/// Fixed annotation attached to every invalid token
pub const INVALID_ASSESSMENT: &str = "invalid_or_revoked";

/// Fixed remediation attached to every invalid token
pub const INVALID_RECOMMENDED_ACTION: &str = "rotate_and_investigate_origin";

/// Message used when a scan finds nothing
pub const NO_TOKENS_MESSAGE: &str = "No GitHub tokens detected";

/// Outcome of analyzing a single candidate token.
///
/// A valid token carries the owning identity, its scopes and a risk
/// classification. An invalid token carries the failure detail plus fixed
/// assessment/remediation annotations instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenAnalysis {
    /// The candidate token this analysis is about
    pub token: String,

    /// Whether the issuing service accepted the token
    pub token_valid: bool,

    /// Verbatim transport error, when resolution failed below HTTP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// HTTP status, when the service rejected the token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,

    /// Owning identity, for valid tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Identity>,

    /// Granted scope names, for valid tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,

    /// Risk verdict, for valid tokens. Flattened so the verdict fields sit
    /// next to the validity flag in the serialized result.
    #[serde(flatten)]
    pub classification: Option<Classification>,

    /// Fixed interpretation, for invalid tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<String>,

    /// Fixed remediation, for invalid tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_action: Option<String>,
}

impl TokenAnalysis {
    /// Build the analysis for a token the service accepted
    pub fn valid(
        token: impl Into<String>,
        identity: Identity,
        scopes: Vec<String>,
        classification: Classification,
    ) -> Self {
        Self {
            token: token.into(),
            token_valid: true,
            error: None,
            http_status: None,
            user: Some(identity),
            scopes: Some(scopes),
            classification: Some(classification),
            assessment: None,
            recommended_action: None,
        }
    }

    /// Build the analysis for a token that failed to resolve, with the
    /// fixed invalid-token annotations attached
    pub fn invalid(token: impl Into<String>, failure: ResolutionFailure) -> Self {
        let (error, http_status) = match failure {
            ResolutionFailure::Network(msg) => (Some(msg), None),
            ResolutionFailure::Status(code) => (None, Some(code)),
        };

        Self {
            token: token.into(),
            token_valid: false,
            error,
            http_status,
            user: None,
            scopes: None,
            classification: None,
            assessment: Some(INVALID_ASSESSMENT.to_string()),
            recommended_action: Some(INVALID_RECOMMENDED_ACTION.to_string()),
        }
    }

    /// Token with all but the prefix and last four characters masked,
    /// for terminal display
    pub fn redacted_token(&self) -> String {
        redact(&self.token)
    }
}

/// Mask the middle of a token so reports do not re-leak it verbatim in
/// terminal scrollback. Short strings are fully masked.
pub fn redact(token: &str) -> String {
    // Matched tokens are always ASCII; anything else is fully masked.
    if token.is_ascii() && token.len() > 12 {
        format!("{}...{}", &token[..8], &token[token.len() - 4..])
    } else {
        "*".repeat(token.chars().count())
    }
}

/// Aggregated result of scanning one source.
///
/// Invariant: when tokens were found, `tokens_found == results.len()` and
/// `message` is `None`; when none were found, `results` is empty and
/// `message` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Tool version that produced the report
    pub version: String,

    /// When the scan ran
    pub generated_at: DateTime<Utc>,

    /// Identifier of the scanned source (usually a file path)
    pub scanned_source: String,

    /// Number of candidate tokens found
    pub tokens_found: usize,

    /// One analysis per candidate, in processing order
    pub results: Vec<TokenAnalysis>,

    /// Human-readable note, present only when no tokens were found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ScanReport {
    /// Build a report for a scan that found no candidates
    pub fn empty(source: impl Into<String>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            scanned_source: source.into(),
            tokens_found: 0,
            results: Vec::new(),
            message: Some(NO_TOKENS_MESSAGE.to_string()),
        }
    }

    /// Build a report from per-candidate analyses
    pub fn with_results(source: impl Into<String>, results: Vec<TokenAnalysis>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            scanned_source: source.into(),
            tokens_found: results.len(),
            results,
            message: None,
        }
    }

    /// Whether any candidate resolved to a live token
    pub fn has_valid_tokens(&self) -> bool {
        self.results.iter().any(|r| r.token_valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classifier::{IdentityType, RiskLevel};
    use pretty_assertions::assert_eq;

    fn sample_identity() -> Identity {
        Identity {
            login: Some("octocat".to_string()),
            id: Some(583231),
            account_type: Some("User".to_string()),
            email: None,
            company: Some("GitHub".to_string()),
        }
    }

    fn sample_classification() -> Classification {
        Classification {
            identity_type: IdentityType::Human,
            risk_level: RiskLevel::Low,
            justification: vec!["Token owned by GitHub User".to_string()],
        }
    }

    #[test]
    fn test_valid_analysis_carries_no_annotations() {
        let analysis = TokenAnalysis::valid(
            "ghp_x",
            sample_identity(),
            vec!["read:user".to_string()],
            sample_classification(),
        );

        assert!(analysis.token_valid);
        assert!(analysis.assessment.is_none());
        assert!(analysis.recommended_action.is_none());
        assert!(analysis.classification.is_some());
    }

    #[test]
    fn test_invalid_analysis_is_annotated() {
        let analysis =
            TokenAnalysis::invalid("ghp_x", ResolutionFailure::Status(401));

        assert!(!analysis.token_valid);
        assert_eq!(analysis.http_status, Some(401));
        assert!(analysis.error.is_none());
        assert_eq!(analysis.assessment.as_deref(), Some(INVALID_ASSESSMENT));
        assert_eq!(
            analysis.recommended_action.as_deref(),
            Some(INVALID_RECOMMENDED_ACTION)
        );
        assert!(analysis.user.is_none());
        assert!(analysis.classification.is_none());
    }

    #[test]
    fn test_network_failure_keeps_message_verbatim() {
        let analysis = TokenAnalysis::invalid(
            "ghp_x",
            ResolutionFailure::Network("connection refused".to_string()),
        );

        assert_eq!(analysis.error.as_deref(), Some("connection refused"));
        assert!(analysis.http_status.is_none());
    }

    #[test]
    fn test_empty_report_invariant() {
        let report = ScanReport::empty("leaky.env");

        assert_eq!(report.tokens_found, 0);
        assert!(report.results.is_empty());
        assert_eq!(report.message.as_deref(), Some(NO_TOKENS_MESSAGE));
    }

    #[test]
    fn test_report_count_matches_results() {
        let results = vec![
            TokenAnalysis::invalid("ghp_a", ResolutionFailure::Status(401)),
            TokenAnalysis::invalid("ghp_b", ResolutionFailure::Status(403)),
        ];
        let report = ScanReport::with_results("leaky.env", results);

        assert_eq!(report.tokens_found, report.results.len());
        assert!(report.message.is_none());
        assert!(!report.has_valid_tokens());
    }

    #[test]
    fn test_redaction_keeps_prefix_and_suffix() {
        let token = format!("ghp_{}", "A".repeat(36));
        assert_eq!(redact(&token), format!("ghp_AAAA...{}", "A".repeat(4)));
        assert_eq!(redact("short"), "*****");
    }

    #[test]
    fn test_json_shape_of_invalid_result() {
        let analysis = TokenAnalysis::invalid("ghp_x", ResolutionFailure::Status(401));
        let value = serde_json::to_value(&analysis).unwrap();

        assert_eq!(value["token_valid"], false);
        assert_eq!(value["http_status"], 401);
        assert_eq!(value["assessment"], "invalid_or_revoked");
        // Valid-only fields must be absent, not null
        assert!(value.get("user").is_none());
        assert!(value.get("scopes").is_none());
    }

    #[test]
    fn test_json_shape_of_valid_result() {
        let analysis = TokenAnalysis::valid(
            "ghp_x",
            sample_identity(),
            vec!["read:user".to_string()],
            sample_classification(),
        );
        let value = serde_json::to_value(&analysis).unwrap();

        assert_eq!(value["token_valid"], true);
        assert_eq!(value["user"]["login"], "octocat");
        // Classification flattens into the result, matching the report shape
        assert_eq!(value["identity_type"], "human");
        assert_eq!(value["risk_level"], "low");
        assert!(value.get("assessment").is_none());
    }
}
