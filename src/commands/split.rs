use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;

use crate::history::{HistoryEntry, HistoryStore};
use crate::page_range::parse_selection;
use crate::pdf::{split_document, SourceDocument};

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    pages: &str,
    output: Q,
    history: &dyn HistoryStore,
) -> Result<()> {
    let doc = SourceDocument::read(&input)?;
    let total = doc.page_count();

    let selection = parse_selection(pages, total);

    let bytes = split_document(doc.bytes(), &selection)?;
    std::fs::write(&output, &bytes)
        .with_context(|| format!("Failed to write {}", output.as_ref().display()))?;

    let message = format!(
        "Extracted {} of {} page(s) into {}",
        selection.len(),
        total,
        output.as_ref().display()
    );
    println!("{message}");

    let file_name = input.as_ref().display().to_string();
    if let Err(err) = history.record(&HistoryEntry::new("split_pdf", &file_name, &message)) {
        warn!("failed to record history: {err:#}");
    }

    Ok(())
}
