//! `wmlctl text`: extract plain text from a document part.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use wml::Document;

pub fn run(file: &Path, json: bool) -> Result<()> {
    let xml = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let doc = Document::from_xml(&xml)
        .with_context(|| format!("parsing {}", file.display()))?;
    let text = doc.plain_text().context("extracting text")?;
    debug!(bytes = xml.len(), chars = text.len(), "extracted text");
    if json {
        let lines: Vec<&str> = text.lines().collect();
        println!("{}", serde_json::to_string_pretty(&lines)?);
    } else {
        print!("{text}");
    }
    Ok(())
}
