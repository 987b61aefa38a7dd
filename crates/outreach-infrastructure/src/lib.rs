//! File-system services for the outreach workflow: path resolution,
//! flat-file credential storage, the context cache, configuration loading,
//! and résumé text extraction.

pub mod config_service;
pub mod context_cache;
pub mod credential_store;
pub mod document;
pub mod paths;

pub use config_service::ConfigService;
pub use context_cache::ContextCache;
pub use credential_store::FileCredentialStore;
pub use document::DocumentExtractor;
pub use paths::OutreachPaths;
