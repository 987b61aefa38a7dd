pub mod collect;
pub mod compose;
pub mod github;
pub mod linkedin;
pub mod resume;
mod prompt;

use anyhow::{Context, Result};
use outreach_core::config::OutreachConfig;
use outreach_core::credential::{CredentialStore, Credentials};
use outreach_infrastructure::{ConfigService, FileCredentialStore, OutreachPaths};

/// Configuration, credentials, and paths shared by every subcommand.
pub(crate) struct App {
    pub config: OutreachConfig,
    pub credentials: Credentials,
    pub paths: OutreachPaths,
}

/// Loads configuration and credentials once, at startup.
pub(crate) fn load_app() -> Result<App> {
    let paths = OutreachPaths::resolve().context("failed to resolve config directory")?;
    let config = ConfigService::new(paths.config_file())
        .load()
        .context("failed to load config.toml")?;
    let credentials = FileCredentialStore::new(paths.clone())
        .load()
        .context("failed to load credentials")?;
    Ok(App {
        config,
        credentials,
        paths,
    })
}
