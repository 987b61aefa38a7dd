use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "outreach")]
#[command(about = "Outreach CLI - Personalized Outreach Email Composer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect and print a GitHub profile report
    Github {
        /// GitHub username (prompted for when omitted)
        username: Option<String>,
    },
    /// Collect and print a LinkedIn profile report
    Linkedin {
        /// LinkedIn profile URL (prompted for when omitted)
        url: Option<String>,
    },
    /// Extract and print resume text
    Resume {
        /// Path to a .pdf, .docx, or .txt resume
        file: PathBuf,
    },
    /// Run the collectors, aggregate their reports, and cache the context
    Collect {
        /// GitHub username (prompted for when omitted)
        #[arg(long)]
        username: Option<String>,
        /// LinkedIn profile URL (prompted for when omitted)
        #[arg(long)]
        url: Option<String>,
        /// Path to a resume file (prompted for when omitted)
        #[arg(long)]
        resume: Option<PathBuf>,
    },
    /// Compose the outreach email from the cached context
    Compose {
        /// What the email should accomplish (prompted for when omitted)
        #[arg(long)]
        intent: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only report and email text.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("outreach=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Github { username } => commands::github::run(username).await?,
        Commands::Linkedin { url } => commands::linkedin::run(url).await?,
        Commands::Resume { file } => commands::resume::run(&file)?,
        Commands::Collect {
            username,
            url,
            resume,
        } => commands::collect::run(username, url, resume).await?,
        Commands::Compose { intent } => commands::compose::run(intent).await?,
    }

    Ok(())
}
