//! PDF page selection and document assembly.
//!
//! The core is three small pieces: [`page_range`] turns a user-entered
//! range expression into a canonical page selection, [`pdf::document`]
//! inspects page counts, and [`pdf::assemble`] builds new documents by
//! merging several sources or splitting pages out of one. Everything else
//! (CLI, MCP server, favorites, history) is a thin calling surface over
//! those functions.

pub mod bookmarks;
pub mod cli;
pub mod commands;
pub mod config;
pub mod history;
pub mod mcp;
pub mod page_range;
pub mod pdf;

pub use page_range::parse_selection;
pub use pdf::{inspect_page_count, merge_documents, split_document, AssemblyError, SourceDocument};
