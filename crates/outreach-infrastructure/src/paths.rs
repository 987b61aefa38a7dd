//! Unified path management for outreach configuration files.
//!
//! All configuration, secrets, and the context cache live in one
//! application directory resolved per platform via the `dirs` crate.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find configuration directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for outreach.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/outreach/          # Config directory
/// ├── config.toml              # Application configuration
/// ├── github_token.txt         # GitHub personal access token (optional)
/// ├── proxycurl_api.txt        # Proxycurl API key
/// ├── gemini_api.txt           # Gemini API key
/// └── cache.txt                # Cached aggregated context
/// ```
#[derive(Clone)]
pub struct OutreachPaths {
    base: PathBuf,
}

impl OutreachPaths {
    /// Resolves the platform config directory (e.g. `~/.config/outreach/`).
    pub fn resolve() -> Result<Self, PathError> {
        let base = dirs::config_dir()
            .ok_or(PathError::ConfigDirNotFound)?
            .join("outreach");
        Ok(Self { base })
    }

    /// Uses an explicit base directory instead of the platform default.
    /// Primarily for tests.
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The application config directory itself.
    pub fn config_dir(&self) -> &PathBuf {
        &self.base
    }

    /// Path to the main configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.base.join("config.toml")
    }

    /// Path to the GitHub token file.
    pub fn github_token_file(&self) -> PathBuf {
        self.base.join("github_token.txt")
    }

    /// Path to the Proxycurl API key file.
    pub fn proxycurl_key_file(&self) -> PathBuf {
        self.base.join("proxycurl_api.txt")
    }

    /// Path to the Gemini API key file.
    pub fn gemini_key_file(&self) -> PathBuf {
        self.base.join("gemini_api.txt")
    }

    /// Path to the cached aggregated context.
    pub fn context_cache_file(&self) -> PathBuf {
        self.base.join("cache.txt")
    }
}
