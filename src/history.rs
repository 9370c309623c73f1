use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::Config;

/// Stored content is capped so a pathological caller cannot grow a record
/// without bound.
const MAX_CONTENT_LEN: usize = 100_000;

/// One completed operation. Only human-readable text is ever stored;
/// binary output is summarized into a status message by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub tool: String,
    pub file_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(tool: &str, file_name: &str, content: &str) -> Self {
        let mut content = content.to_string();
        if content.len() > MAX_CONTENT_LEN {
            let mut cut = MAX_CONTENT_LEN;
            while !content.is_char_boundary(cut) {
                cut -= 1;
            }
            content.truncate(cut);
        }
        HistoryEntry {
            tool: tool.to_string(),
            file_name: file_name.to_string(),
            content,
            created_at: Utc::now(),
        }
    }
}

/// Persistence for completed operations. One live implementation and one
/// no-op stub share this interface; which one runs is decided once at
/// startup from configuration presence.
pub trait HistoryStore {
    fn record(&self, entry: &HistoryEntry) -> Result<()>;

    /// Most recent entries first.
    fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>>;
}

/// Select the store variant for the given configuration.
pub fn from_config(config: &Config) -> Box<dyn HistoryStore> {
    match &config.history_path {
        Some(path) => Box::new(FileHistory::new(path.clone())),
        None => {
            warn!("PAGEDECK_HISTORY not set; history is disabled");
            Box::new(DisabledHistory)
        }
    }
}

/// Appends one JSON line per entry to a plain file.
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    pub fn new(path: PathBuf) -> Self {
        FileHistory { path }
    }
}

impl HistoryStore for FileHistory {
    fn record(&self, entry: &HistoryEntry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let line = serde_json::to_string(entry)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        let file = match std::fs::File::open(&self.path) {
            Ok(f) => f,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read {}", self.path.display()))
            }
        };

        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<HistoryEntry>(&line) {
                Ok(entry) => entries.push(entry),
                // A damaged line loses one record, not the whole log.
                Err(err) => warn!("skipping unreadable history line: {err}"),
            }
        }

        entries.reverse();
        entries.truncate(limit);
        Ok(entries)
    }
}

/// No-op variant used when no history path is configured.
pub struct DisabledHistory;

impl HistoryStore for DisabledHistory {
    fn record(&self, _entry: &HistoryEntry) -> Result<()> {
        Ok(())
    }

    fn recent(&self, _limit: usize) -> Result<Vec<HistoryEntry>> {
        Ok(Vec::new())
    }
}
