//! Risk classification of resolved token identities
//!
//! Classification is a pure, total function over (identity, scopes): it
//! never fails and never touches I/O, so it can be tested in isolation from
//! the network. Rules live in an explicit ordered list; the first matching
//! rule wins, and precedence is part of the contract:
//!
//! 1. Non-human account -> non-human / high
//! 2. Human account with automation-level scopes -> non-human / high
//! 3. Anything else -> human / low

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::providers::{Identity, ScopeSet};

/// Scopes typically granted to automation, CI, or high-privilege tooling
const DEFAULT_HIGH_RISK_SCOPES: [&str; 5] = ["repo", "workflow", "packages", "admin", "write"];

/// Whether a token's owner behaves like a person or a machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentityType {
    Human,
    NonHuman,
}

/// Risk verdict for a leaked token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    High,
}

/// Verdict produced by the classifier.
///
/// Justifications are ordered by rule evaluation order so identical input
/// always reproduces the identical verdict text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub identity_type: IdentityType,
    pub risk_level: RiskLevel,
    pub justification: Vec<String>,
}

/// Risk-scoring policy.
///
/// The high-risk scope set defaults to the fixed automation-level list but
/// can be overridden, e.g. from a CLI flag.
pub struct Classifier {
    high_risk_scopes: BTreeSet<String>,
}

impl Classifier {
    /// Create a classifier with the default high-risk scope set
    pub fn new() -> Self {
        Self::with_high_risk_scopes(DEFAULT_HIGH_RISK_SCOPES.iter().map(|s| s.to_string()))
    }

    /// Create a classifier with a custom high-risk scope set
    pub fn with_high_risk_scopes(scopes: impl IntoIterator<Item = String>) -> Self {
        Self {
            high_risk_scopes: scopes.into_iter().collect(),
        }
    }

    /// Classify a resolved identity and its granted scopes.
    ///
    /// Rules are evaluated top-down; they are not commutative. An empty
    /// scope set can never match the scope rule, so it always falls through
    /// to the low-risk default (provided the account is human).
    pub fn classify(&self, identity: &Identity, scopes: &ScopeSet) -> Classification {
        // Rule 1: not a human GitHub account
        if !identity.is_human_account() {
            return Classification {
                identity_type: IdentityType::NonHuman,
                risk_level: RiskLevel::High,
                justification: vec![
                    "Token not associated with a human GitHub account".to_string()
                ],
            };
        }

        // Rule 2: human account, but automation-level scopes
        if scopes.iter().any(|s| self.high_risk_scopes.contains(s)) {
            return Classification {
                identity_type: IdentityType::NonHuman,
                risk_level: RiskLevel::High,
                justification: vec![
                    "Token owned by a human but granted automation-level scopes".to_string(),
                ],
            };
        }

        // Rule 3: default low-risk human token
        Classification {
            identity_type: IdentityType::Human,
            risk_level: RiskLevel::Low,
            justification: vec![
                "Token owned by GitHub User".to_string(),
                "Scopes limited to read-only user access".to_string(),
            ],
        }
    }

    /// The scope names this classifier treats as high risk
    pub fn high_risk_scopes(&self) -> impl Iterator<Item = &str> {
        self.high_risk_scopes.iter().map(String::as_str)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
