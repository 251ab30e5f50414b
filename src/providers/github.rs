//! GitHub resolver - Validates candidate tokens against the GitHub API

use std::time::Duration;

use async_trait::async_trait;

use super::{Identity, IdentityResolver, Resolution, ResolutionFailure, ScopeSet};

const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Response header carrying the comma-separated OAuth scope list
const SCOPES_HEADER: &str = "x-oauth-scopes";

/// Per-request timeout for the identity endpoint
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves tokens by calling `GET /user` with the candidate token as the
/// authorization material.
pub struct GitHubResolver {
    client: reqwest::Client,
    api_base: String,
}

impl GitHubResolver {
    /// Create a resolver against the public GitHub API
    pub fn new() -> Self {
        Self::with_api_base(DEFAULT_API_BASE)
    }

    /// Create a resolver against a custom API base URL (test servers,
    /// GitHub Enterprise)
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        // Client construction only fails on TLS backend misconfiguration,
        // which is a build problem, not a runtime one.
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("tokenlens/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_base: api_base.into(),
        }
    }

    fn user_endpoint(&self) -> String {
        format!("{}/user", self.api_base.trim_end_matches('/'))
    }
}

impl Default for GitHubResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityResolver for GitHubResolver {
    async fn resolve(&self, token: &str) -> Resolution {
        let response = match self
            .client
            .get(self.user_endpoint())
            .header("Authorization", format!("token {}", token))
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::debug!("identity endpoint unreachable: {}", e);
                return Resolution::Invalid(ResolutionFailure::Network(e.to_string()));
            }
        };

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::debug!("identity endpoint returned {}", status);
            return Resolution::Invalid(ResolutionFailure::Status(status.as_u16()));
        }

        // Scopes come from a response header, not the body; grab them before
        // the body consumes the response.
        let scopes = response
            .headers()
            .get(SCOPES_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(parse_scope_header)
            .unwrap_or_default();

        let identity: Identity = match response.json().await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::debug!("identity response body unreadable: {}", e);
                return Resolution::Invalid(ResolutionFailure::Network(e.to_string()));
            }
        };

        tracing::debug!(
            login = identity.login.as_deref().unwrap_or("<unknown>"),
            scope_count = scopes.len(),
            "token resolved"
        );

        Resolution::Valid { identity, scopes }
    }
}

/// Parse the scope header value: comma-separated tokens, trimmed, empty
/// tokens discarded.
fn parse_scope_header(value: &str) -> ScopeSet {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
