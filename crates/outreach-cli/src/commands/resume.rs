//! `outreach resume` - extract and print resume text.

use std::path::Path;

use anyhow::Result;
use outreach_infrastructure::DocumentExtractor;

pub fn run(file: &Path) -> Result<()> {
    let text = DocumentExtractor::extract(file)?;
    println!("{text}");
    Ok(())
}
