//! `outreach github` - collect and print a GitHub profile report.

use anyhow::Result;
use outreach_core::report::{ReportRenderer, TextRenderer};
use outreach_interaction::GithubCollector;
use tracing::info;

use super::prompt;

pub async fn run(username: Option<String>) -> Result<()> {
    let app = super::load_app()?;
    let username = prompt::or_ask(username, "Enter the GitHub username:")?;

    let collector =
        GithubCollector::from_config(&app.config, app.credentials.github_token.clone());
    info!(%username, "collecting GitHub profile");
    let report = collector.collect(&username).await?;

    let renderer = TextRenderer::new(app.config.event_limit);
    println!("{}", renderer.render_github(&report));
    Ok(())
}
