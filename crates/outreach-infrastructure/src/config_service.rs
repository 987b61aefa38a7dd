//! Configuration loading.
//!
//! Loads [`OutreachConfig`] from `config.toml` in the application config
//! directory. A missing file yields the defaults; a malformed file is a
//! typed serialization error rather than a silent fallback.

use std::fs;
use std::path::PathBuf;

use outreach_core::config::OutreachConfig;
use outreach_core::error::Result;
use tracing::debug;

/// Loads the application configuration from disk.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads and parses the config file, defaulting when it is absent.
    pub fn load(&self) -> Result<OutreachConfig> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(OutreachConfig::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        let config: OutreachConfig = toml::from_str(&raw)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let service = ConfigService::new(dir.path().join("config.toml"));
        assert_eq!(service.load().unwrap(), OutreachConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("config.toml");
        fs::write(&path, "model = \"gemini-2.5-flash\"\npage_size = 50\n").unwrap();

        let config = ConfigService::new(path).load().unwrap();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.commit_limit, 5);
    }

    #[test]
    fn test_malformed_file_is_a_typed_error() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("config.toml");
        fs::write(&path, "model = [not toml").unwrap();

        let err = ConfigService::new(path).load().unwrap_err();
        assert!(matches!(
            err,
            outreach_core::OutreachError::Serialization { .. }
        ));
    }
}
