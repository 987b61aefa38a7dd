//! Aggregated generation context.

use serde::{Deserialize, Serialize};

/// The single knowledge-base string handed to the generation backend.
///
/// Created once per run from the collector outputs (or restored verbatim
/// from the cache file) and never mutated afterward. Aggregation is plain
/// concatenation in source order; no separators or other transformation is
/// applied, so `aggregate([a, b, c])` is textually `a + b + c`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedContext {
    text: String,
}

impl AggregatedContext {
    /// Concatenates the given source texts in order.
    pub fn aggregate<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for source in sources {
            text.push_str(source.as_ref());
        }
        Self { text }
    }

    /// Wraps a previously cached context string as-is.
    pub fn from_cached(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.text
    }
}

impl std::fmt::Display for AggregatedContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_is_plain_concatenation() {
        let a = "github report\n";
        let b = "linkedin report\n";
        let c = "resume text";
        let context = AggregatedContext::aggregate([a, b, c]);
        assert_eq!(context.as_str(), format!("{a}{b}{c}"));
    }

    #[test]
    fn test_aggregate_preserves_source_order() {
        let forward = AggregatedContext::aggregate(["x", "y"]);
        let reverse = AggregatedContext::aggregate(["y", "x"]);
        assert_ne!(forward, reverse);
    }

    #[test]
    fn test_from_cached_is_verbatim() {
        let cached = "  previously cached blob  ";
        assert_eq!(AggregatedContext::from_cached(cached).as_str(), cached);
    }

    #[test]
    fn test_aggregate_of_nothing_is_empty() {
        let context = AggregatedContext::aggregate(Vec::<String>::new());
        assert!(context.is_empty());
    }
}
