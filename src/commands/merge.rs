use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;

use crate::history::{HistoryEntry, HistoryStore};
use crate::pdf::{inspect_page_count, merge_documents};

pub fn run<P: AsRef<Path>>(inputs: &[P], output: P, history: &dyn HistoryStore) -> Result<()> {
    if inputs.is_empty() {
        anyhow::bail!("No input files specified");
    }

    let mut buffers = Vec::with_capacity(inputs.len());
    for input in inputs {
        let bytes = std::fs::read(input)
            .with_context(|| format!("Failed to read {}", input.as_ref().display()))?;
        buffers.push(bytes);
    }

    let merged = merge_documents(&buffers)?;
    let page_count = inspect_page_count(&merged);

    std::fs::write(&output, &merged)
        .with_context(|| format!("Failed to write {}", output.as_ref().display()))?;

    let message = format!(
        "Merged {} files ({} pages) into {}",
        inputs.len(),
        page_count,
        output.as_ref().display()
    );
    println!("{message}");

    // Only the status line is persisted, never the output bytes.
    let file_names = inputs
        .iter()
        .map(|p| p.as_ref().display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if let Err(err) = history.record(&HistoryEntry::new("merge_pdf", &file_names, &message)) {
        warn!("failed to record history: {err:#}");
    }

    Ok(())
}
