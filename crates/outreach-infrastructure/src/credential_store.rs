//! Flat-file credential store.
//!
//! Each secret lives in its own one-line file under the application config
//! directory, mirroring the layout the CLI documents: `github_token.txt`,
//! `proxycurl_api.txt`, `gemini_api.txt`.

use std::fs;
use std::path::Path;

use outreach_core::credential::{CredentialStore, Credentials};
use outreach_core::error::Result;
use tracing::debug;

use crate::paths::OutreachPaths;

/// Reads credentials from flat one-key-per-file storage.
///
/// Files are read once per `load` call; a missing file simply yields `None`
/// for that credential. Whether a given credential is required is the
/// caller's decision ([`Credentials::require_proxycurl`] and friends).
pub struct FileCredentialStore {
    paths: OutreachPaths,
}

impl FileCredentialStore {
    pub fn new(paths: OutreachPaths) -> Self {
        Self { paths }
    }

    /// Reads a single secret file, trimming surrounding whitespace.
    ///
    /// Returns `None` when the file does not exist or holds only
    /// whitespace. Other IO failures propagate.
    fn read_secret(path: &Path) -> Result<Option<String>> {
        if !path.exists() {
            debug!(path = %path.display(), "secret file not present");
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        Ok(Some(trimmed.to_string()))
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Credentials> {
        Ok(Credentials {
            github_token: Self::read_secret(&self.paths.github_token_file())?,
            proxycurl_api_key: Self::read_secret(&self.paths.proxycurl_key_file())?,
            gemini_api_key: Self::read_secret(&self.paths.gemini_key_file())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_load_as_none() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let store = FileCredentialStore::new(OutreachPaths::with_base(dir.path()));

        let credentials = store.load().unwrap();
        assert!(credentials.github_token.is_none());
        assert!(credentials.proxycurl_api_key.is_none());
        assert!(credentials.gemini_api_key.is_none());
    }

    #[test]
    fn test_secret_files_are_trimmed() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let paths = OutreachPaths::with_base(dir.path());
        fs::write(paths.github_token_file(), "ghp_token123\n").unwrap();
        fs::write(paths.gemini_key_file(), "  gm-key  \n").unwrap();

        let store = FileCredentialStore::new(paths);
        let credentials = store.load().unwrap();
        assert_eq!(credentials.github_token.as_deref(), Some("ghp_token123"));
        assert_eq!(credentials.gemini_api_key.as_deref(), Some("gm-key"));
        assert!(credentials.proxycurl_api_key.is_none());
    }

    #[test]
    fn test_whitespace_only_file_is_none() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let paths = OutreachPaths::with_base(dir.path());
        fs::write(paths.proxycurl_key_file(), "   \n").unwrap();

        let store = FileCredentialStore::new(paths);
        assert!(store.load().unwrap().proxycurl_api_key.is_none());
    }
}
