//! `outreach collect` - run the collectors, aggregate, and cache.
//!
//! Sources are gathered in a fixed order (GitHub, LinkedIn, resume). A
//! skipped or failed collector is left out of the aggregate with a logged
//! error and the remaining sources still go through; a resume that cannot
//! be extracted aborts the run, since the user explicitly pointed at it.

use std::path::PathBuf;

use anyhow::{Result, bail};
use outreach_core::context::AggregatedContext;
use outreach_core::report::{ReportRenderer, TextRenderer};
use outreach_infrastructure::{ContextCache, DocumentExtractor};
use outreach_interaction::{GithubCollector, LinkedInCollector};
use tracing::{error, info};

use super::{App, prompt};

pub async fn run(
    username: Option<String>,
    url: Option<String>,
    resume: Option<PathBuf>,
) -> Result<()> {
    let app = super::load_app()?;
    let renderer = TextRenderer::new(app.config.event_limit);

    let username =
        prompt::or_ask_optional(username, "GitHub username (leave blank to skip):")?;
    let url = prompt::or_ask_optional(url, "LinkedIn profile URL (leave blank to skip):")?;
    let resume = match resume {
        Some(path) => Some(path),
        None => prompt::optional("Path to a resume file (leave blank to skip):")?
            .map(PathBuf::from),
    };

    let mut sources: Vec<String> = Vec::new();

    if let Some(username) = username {
        match collect_github(&app, &renderer, &username).await {
            Ok(text) => sources.push(text),
            Err(err) => error!(%username, error = %err, "GitHub collection failed, skipping"),
        }
    }

    if let Some(url) = url {
        match collect_linkedin(&app, &renderer, &url).await {
            Ok(text) => sources.push(text),
            Err(err) => error!(%url, error = %err, "LinkedIn collection failed, skipping"),
        }
    }

    if let Some(path) = resume {
        match DocumentExtractor::extract(&path) {
            Ok(text) => sources.push(format!("{text}\n\n")),
            Err(err) => return Err(err.into()),
        }
    }

    if sources.is_empty() {
        bail!("no sources collected; nothing to aggregate");
    }

    let context = AggregatedContext::aggregate(&sources);
    println!("{context}");

    let cache = ContextCache::new(app.paths.context_cache_file());
    cache.store(&context)?;
    info!("context cached for the compose step");
    Ok(())
}

async fn collect_github(app: &App, renderer: &TextRenderer, username: &str) -> Result<String> {
    let collector =
        GithubCollector::from_config(&app.config, app.credentials.github_token.clone());
    let report = collector.collect(username).await?;
    Ok(format!("{}\n\n", renderer.render_github(&report)))
}

async fn collect_linkedin(app: &App, renderer: &TextRenderer, url: &str) -> Result<String> {
    let api_key = app.credentials.require_proxycurl()?;
    let profile = LinkedInCollector::new(api_key).collect(url).await?;
    Ok(format!("{}\n\n", renderer.render_linkedin(&profile)))
}
