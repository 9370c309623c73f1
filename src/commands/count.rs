use anyhow::Result;
use std::path::Path;

use crate::pdf::SourceDocument;

pub fn run<P: AsRef<Path>>(path: P) -> Result<()> {
    let doc = SourceDocument::read(&path)?;

    // Unreadable documents report 0 rather than failing; the caller can
    // still attempt a split without a page-accurate preview.
    println!("File: {}", path.as_ref().display());
    println!("Pages: {}", doc.page_count());

    Ok(())
}
