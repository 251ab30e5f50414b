//! Pipeline orchestrator - detection, resolution and classification
//!
//! Candidates are independent: the resolver is called once per candidate in
//! candidate-set order, and one candidate's failure never aborts the run or
//! skips the remaining candidates.

use crate::analysis::classifier::Classifier;
use crate::analysis::report::{ScanReport, TokenAnalysis};
use crate::detector;
use crate::providers::{IdentityResolver, Resolution};

/// Composes the detector, an identity resolver and the risk classifier into
/// a single scan run.
pub struct Pipeline<R: IdentityResolver> {
    resolver: R,
    classifier: Classifier,
}

impl<R: IdentityResolver> Pipeline<R> {
    pub fn new(resolver: R, classifier: Classifier) -> Self {
        Self {
            resolver,
            classifier,
        }
    }

    /// Scan `text` for token candidates and analyze each one.
    ///
    /// `source` only labels the report; text acquisition is the caller's
    /// concern. An input with zero candidates is a normal outcome, not an
    /// error.
    pub async fn run(&self, source: &str, text: &str) -> ScanReport {
        let candidates = detector::find_tokens(text);

        if candidates.is_empty() {
            tracing::info!(source, "no token candidates found");
            return ScanReport::empty(source);
        }

        tracing::info!(source, count = candidates.len(), "analyzing candidates");

        let mut results = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            results.push(self.analyze(candidate).await);
        }

        ScanReport::with_results(source, results)
    }

    async fn analyze(&self, candidate: &str) -> TokenAnalysis {
        match self.resolver.resolve(candidate).await {
            Resolution::Valid { identity, scopes } => {
                let classification = self.classifier.classify(&identity, &scopes);
                TokenAnalysis::valid(
                    candidate,
                    identity,
                    scopes.into_iter().collect(),
                    classification,
                )
            }
            Resolution::Invalid(failure) => {
                tracing::debug!(?failure, "candidate failed to resolve");
                TokenAnalysis::invalid(candidate, failure)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classifier::{IdentityType, RiskLevel};
    use crate::analysis::report::NO_TOKENS_MESSAGE;
    use crate::providers::{Identity, ResolutionFailure, ScopeSet};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    /// Test double: resolves tokens from a fixed script instead of the
    /// network.
    struct ScriptedResolver {
        fail_tokens: Vec<String>,
        account_type: &'static str,
        scopes: Vec<&'static str>,
    }

    impl ScriptedResolver {
        fn human_with_scopes(scopes: Vec<&'static str>) -> Self {
            Self {
                fail_tokens: Vec::new(),
                account_type: "User",
                scopes,
            }
        }
    }

    #[async_trait]
    impl IdentityResolver for ScriptedResolver {
        async fn resolve(&self, token: &str) -> Resolution {
            if self.fail_tokens.iter().any(|t| t == token) {
                return Resolution::Invalid(ResolutionFailure::Network(
                    "connection timed out".to_string(),
                ));
            }

            let identity = Identity {
                login: Some("octocat".to_string()),
                id: Some(583231),
                account_type: Some(self.account_type.to_string()),
                email: None,
                company: None,
            };
            let scopes: ScopeSet = self.scopes.iter().map(|s| s.to_string()).collect();

            Resolution::Valid { identity, scopes }
        }
    }

    fn token(prefix: &str, fill: char) -> String {
        format!("{}_{}", prefix, fill.to_string().repeat(36))
    }

    #[tokio::test]
    async fn test_empty_input_yields_message_report() {
        let pipeline = Pipeline::new(
            ScriptedResolver::human_with_scopes(vec![]),
            Classifier::new(),
        );

        let report = pipeline.run("empty.txt", "").await;

        assert_eq!(report.tokens_found, 0);
        assert!(report.results.is_empty());
        assert_eq!(report.message.as_deref(), Some(NO_TOKENS_MESSAGE));
    }

    #[tokio::test]
    async fn test_valid_candidates_are_classified() {
        let pipeline = Pipeline::new(
            ScriptedResolver::human_with_scopes(vec!["read:user"]),
            Classifier::new(),
        );

        let text = format!("leak: {}", token("ghp", 'a'));
        let report = pipeline.run("leaky.env", &text).await;

        assert_eq!(report.tokens_found, 1);
        let analysis = &report.results[0];
        assert!(analysis.token_valid);
        let classification = analysis.classification.as_ref().unwrap();
        assert_eq!(classification.identity_type, IdentityType::Human);
        assert_eq!(classification.risk_level, RiskLevel::Low);
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_the_run() {
        // Three candidates, resolver fails for the middle one (candidate
        // order is lexicographic: a < b < c).
        let failing = token("ghp", 'b');
        let resolver = ScriptedResolver {
            fail_tokens: vec![failing.clone()],
            account_type: "User",
            scopes: vec!["read:user"],
        };
        let pipeline = Pipeline::new(resolver, Classifier::new());

        let text = format!(
            "{} {} {}",
            token("ghp", 'a'),
            failing,
            token("ghp", 'c')
        );
        let report = pipeline.run("leaky.env", &text).await;

        assert_eq!(report.tokens_found, 3);
        assert_eq!(report.results.len(), 3);

        assert!(report.results[0].token_valid);
        assert!(report.results[2].token_valid);

        let middle = &report.results[1];
        assert!(!middle.token_valid);
        assert_eq!(middle.token, failing);
        assert_eq!(middle.error.as_deref(), Some("connection timed out"));
        assert_eq!(middle.assessment.as_deref(), Some("invalid_or_revoked"));
        assert_eq!(
            middle.recommended_action.as_deref(),
            Some("rotate_and_investigate_origin")
        );
    }

    #[tokio::test]
    async fn test_results_follow_candidate_set_order() {
        let pipeline = Pipeline::new(
            ScriptedResolver::human_with_scopes(vec![]),
            Classifier::new(),
        );

        // Text order z, a; candidate-set order is lexicographic
        let text = format!("{} {}", token("ghp", 'z'), token("ghp", 'a'));
        let report = pipeline.run("leaky.env", &text).await;

        assert_eq!(report.results[0].token, token("ghp", 'a'));
        assert_eq!(report.results[1].token, token("ghp", 'z'));
    }

    #[tokio::test]
    async fn test_duplicate_tokens_analyzed_once() {
        let pipeline = Pipeline::new(
            ScriptedResolver::human_with_scopes(vec![]),
            Classifier::new(),
        );

        let t = token("ghp", 'a');
        let text = format!("{} and {} again", t, t);
        let report = pipeline.run("leaky.env", &text).await;

        assert_eq!(report.tokens_found, 1);
    }
}
