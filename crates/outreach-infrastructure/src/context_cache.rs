//! Flat-file cache for the aggregated context.
//!
//! One run's aggregated context can be persisted so later runs skip
//! re-collection. The cache is a single text file written and read
//! verbatim.

use std::fs;
use std::path::PathBuf;

use outreach_core::context::AggregatedContext;
use outreach_core::error::Result;
use tracing::info;

/// Load/store access to the context cache file.
pub struct ContextCache {
    path: PathBuf,
}

impl ContextCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the cached context, or `None` when no cache exists yet.
    pub fn load(&self) -> Result<Option<AggregatedContext>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(Some(AggregatedContext::from_cached(text)))
    }

    /// Persists the context, replacing any previous cache.
    pub fn store(&self, context: &AggregatedContext) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, context.as_str())?;
        info!(path = %self.path.display(), bytes = context.as_str().len(), "context cache written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_cache_is_none() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let cache = ContextCache::new(dir.path().join("cache.txt"));
        assert!(cache.load().unwrap().is_none());
    }

    #[test]
    fn test_store_then_load_round_trips_verbatim() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let cache = ContextCache::new(dir.path().join("cache.txt"));
        let context = AggregatedContext::aggregate(["github\n", "linkedin\n", "resume"]);

        cache.store(&context).unwrap();
        let loaded = cache.load().unwrap().expect("cache should exist");
        assert_eq!(loaded, context);
    }

    #[test]
    fn test_store_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let cache = ContextCache::new(dir.path().join("nested").join("cache.txt"));
        cache
            .store(&AggregatedContext::from_cached("blob"))
            .unwrap();
        assert!(cache.load().unwrap().is_some());
    }
}
