//! # Providers Module
//!
//! Integrations with the external identity service that issued the tokens
//! (GitHub). The resolver sits behind the [`IdentityResolver`] trait so the
//! pipeline can be exercised with a test double instead of the network.
//!
//! ## GitHub Integration
//!
//! The [`github`] module resolves a candidate token by calling the
//! `GET /user` endpoint with the candidate as the authorization material:
//!
//! - a valid token yields the owning [`Identity`] and its granted scopes
//! - a revoked/expired token yields the HTTP status GitHub returned
//! - a transport failure yields the error message verbatim
//!
//! One outbound request per resolution; no caching, retries, or backoff.

pub mod github;

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use github::GitHubResolver;

/// Set of OAuth scope names granted to a token.
///
/// Empty is valid and means "no elevated scopes".
pub type ScopeSet = BTreeSet<String>;

/// The identity that owns a token, as reported by the issuing service.
///
/// Any field the service omits defaults instead of erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Account login name
    #[serde(default)]
    pub login: Option<String>,

    /// Numeric account id
    #[serde(default)]
    pub id: Option<u64>,

    /// Account type tag. GitHub reports `"User"` for human accounts;
    /// anything else (`"Organization"`, `"Bot"`, ...) is a machine identity.
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,

    /// Public email, if any
    #[serde(default)]
    pub email: Option<String>,

    /// Company/organization, if any
    #[serde(default)]
    pub company: Option<String>,
}

impl Identity {
    /// Whether the issuing service reports this as a human account
    pub fn is_human_account(&self) -> bool {
        self.account_type.as_deref() == Some("User")
    }
}

/// Why a token failed to resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionFailure {
    /// Transport-level failure reaching the identity service
    /// (timeout, DNS, connection refused, TLS). Message kept verbatim.
    Network(String),
    /// The identity service answered with a non-200 status
    /// (revoked or expired token, typically 401).
    Status(u16),
}

/// Outcome of resolving one candidate token
#[derive(Debug, Clone)]
pub enum Resolution {
    /// The token is live: the service identified its owner and scopes
    Valid {
        identity: Identity,
        scopes: ScopeSet,
    },
    /// The token could not be validated
    Invalid(ResolutionFailure),
}

/// Resolves a candidate token against the issuing service's identity
/// endpoint.
///
/// Implementations make exactly one attempt per call; retry policy, if any,
/// belongs to the caller.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> Resolution;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_human_account_detection() {
        let identity = Identity {
            login: Some("octocat".to_string()),
            id: Some(1),
            account_type: Some("User".to_string()),
            email: None,
            company: None,
        };
        assert!(identity.is_human_account());
    }

    #[test]
    fn test_identity_machine_account_detection() {
        let identity = Identity {
            login: Some("ci-bot".to_string()),
            id: Some(2),
            account_type: Some("Bot".to_string()),
            email: None,
            company: None,
        };
        assert!(!identity.is_human_account());
    }

    #[test]
    fn test_identity_missing_type_is_not_human() {
        let identity: Identity = serde_json::from_str("{}").unwrap();
        assert!(!identity.is_human_account());
        assert!(identity.login.is_none());
        assert!(identity.id.is_none());
    }
}
