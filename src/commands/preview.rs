use anyhow::Result;
use std::path::Path;

use crate::page_range::parse_selection;
use crate::pdf::SourceDocument;

/// Show which pages a range expression would select, without touching the
/// document beyond counting its pages.
pub fn run<P: AsRef<Path>>(path: P, pages: &str) -> Result<()> {
    let doc = SourceDocument::read(&path)?;
    let total = doc.page_count();

    let selection = parse_selection(pages, total);

    println!("File: {}", path.as_ref().display());
    println!("Total pages: {total}");
    if selection.is_empty() {
        println!("Selection: (no valid pages)");
    } else {
        let list = selection
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("Selection: {} ({} page(s))", list, selection.len());
    }

    Ok(())
}
