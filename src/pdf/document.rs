use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use lopdf::Document;
use tracing::warn;

/// Report the number of pages in a PDF byte buffer.
///
/// Counting only walks the page tree, so documents that carry an
/// encryption dictionary still report their structural page count.
/// A buffer that cannot be parsed at all yields 0 rather than an error:
/// callers use the count for selection previews and must not be blocked
/// by an unreadable file.
pub fn inspect_page_count(bytes: &[u8]) -> u32 {
    match Document::load_mem(bytes) {
        Ok(doc) => doc.get_pages().len() as u32,
        Err(err) => {
            warn!("could not inspect page count: {err}");
            0
        }
    }
}

/// An immutable PDF byte buffer with a lazily computed page count.
///
/// The buffer is never mutated; assembly operations read it and produce
/// fresh output buffers.
pub struct SourceDocument {
    bytes: Vec<u8>,
    page_count: OnceLock<u32>,
}

impl SourceDocument {
    pub fn new(bytes: Vec<u8>) -> Self {
        SourceDocument {
            bytes,
            page_count: OnceLock::new(),
        }
    }

    /// Read a document from disk.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(&path)
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
        Ok(Self::new(bytes))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Page count, computed once per buffer and cached. 0 for unreadable
    /// documents (see [`inspect_page_count`]).
    pub fn page_count(&self) -> u32 {
        *self
            .page_count
            .get_or_init(|| inspect_page_count(&self.bytes))
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
