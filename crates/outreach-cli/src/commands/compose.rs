//! `outreach compose` - generate the email from the cached context.

use anyhow::{Context, Result};
use colored::Colorize;
use outreach_core::composer::EmailComposer;
use outreach_infrastructure::ContextCache;
use outreach_interaction::GeminiBackend;
use tracing::info;

use super::prompt;

pub async fn run(intent: Option<String>) -> Result<()> {
    let app = super::load_app()?;

    let cache = ContextCache::new(app.paths.context_cache_file());
    let context = cache
        .load()?
        .context("no cached context found; run `outreach collect` first")?;

    let intent = prompt::or_ask(intent, "What do you need?")?;
    let api_key = app.credentials.require_gemini()?;

    let backend = GeminiBackend::new(api_key, app.config.model.as_str());
    let mut composer = EmailComposer::new(backend);

    info!(model = %app.config.model, "starting compose session");
    let result = composer.compose(&intent, &context).await?;

    println!("{}", result.acknowledgement);
    println!("\n{}", result.email);

    println!("\n{}", "--- Transcript ---".bold());
    for message in composer.transcript() {
        println!("role - {}: {}", message.role.as_str(), message.content);
    }
    Ok(())
}
