//! `outreach linkedin` - collect and print a LinkedIn profile report.

use anyhow::Result;
use outreach_core::report::{ReportRenderer, TextRenderer};
use outreach_interaction::LinkedInCollector;
use tracing::info;

use super::prompt;

pub async fn run(url: Option<String>) -> Result<()> {
    let app = super::load_app()?;
    let url = prompt::or_ask(url, "Enter the LinkedIn profile URL:")?;
    let api_key = app.credentials.require_proxycurl()?;

    let collector = LinkedInCollector::new(api_key);
    info!(%url, "collecting LinkedIn profile");
    let profile = collector.collect(&url).await?;

    let renderer = TextRenderer::new(app.config.event_limit);
    println!("{}", renderer.render_linkedin(&profile));
    Ok(())
}
