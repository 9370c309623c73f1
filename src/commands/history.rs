use anyhow::Result;

use crate::history::HistoryStore;

pub fn run(store: &dyn HistoryStore, limit: usize) -> Result<()> {
    let entries = store.recent(limit)?;

    if entries.is_empty() {
        println!("No history recorded.");
        return Ok(());
    }

    for entry in entries {
        println!(
            "{}  {:<10}  {}  {}",
            entry.created_at.format("%Y-%m-%d %H:%M:%S"),
            entry.tool,
            entry.file_name,
            entry.content
        );
    }

    Ok(())
}
