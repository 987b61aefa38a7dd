//! Credential types and the credential source trait.
//!
//! Collectors never read key files themselves; the caller loads credentials
//! once and passes them in by value.

use crate::error::{OutreachError, Result};

/// API keys and tokens for the external services, loaded once at startup.
///
/// Error messages must never contain the secret values themselves.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Personal access token for the GitHub API. Optional: absent, calls
    /// go out unauthenticated (subject to stricter rate limits).
    pub github_token: Option<String>,
    /// Proxycurl API key. Required for LinkedIn collection.
    pub proxycurl_api_key: Option<String>,
    /// Gemini API key. Required for the compose step.
    pub gemini_api_key: Option<String>,
}

impl Credentials {
    /// Returns the Proxycurl key or a NotFound error naming the secret.
    pub fn require_proxycurl(&self) -> Result<&str> {
        self.proxycurl_api_key
            .as_deref()
            .ok_or_else(|| OutreachError::not_found("credential", "proxycurl_api"))
    }

    /// Returns the Gemini key or a NotFound error naming the secret.
    pub fn require_gemini(&self) -> Result<&str> {
        self.gemini_api_key
            .as_deref()
            .ok_or_else(|| OutreachError::not_found("credential", "gemini_api"))
    }
}

/// Source of credentials.
///
/// # Security Note
///
/// Implementations should ensure that secrets are never logged or exposed
/// in error messages.
pub trait CredentialStore: Send + Sync {
    /// Loads all credentials. A missing optional secret is `None`, not an
    /// error.
    fn load(&self) -> Result<Credentials>;
}
