//! Application configuration.

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_page_size() -> u32 {
    100
}

fn default_commit_limit() -> usize {
    5
}

fn default_event_limit() -> usize {
    10
}

/// Tunable settings loaded from `config.toml`.
///
/// Every field is defaulted so a missing or partial file still yields a
/// working configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutreachConfig {
    /// Generation backend model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Page size for paginated GitHub collections.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Number of most-recent commits kept per repository.
    #[serde(default = "default_commit_limit")]
    pub commit_limit: usize,
    /// Number of events shown in the rendered report.
    #[serde(default = "default_event_limit")]
    pub event_limit: usize,
}

impl Default for OutreachConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            page_size: default_page_size(),
            commit_limit: default_commit_limit(),
            event_limit: default_event_limit(),
        }
    }
}
