use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagedeck")]
#[command(about = "PDF page selection and assembly tool with MCP server support")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server
    Mcp,

    /// Report the page count of a PDF (0 if unreadable)
    Count {
        /// PDF file to inspect
        path: PathBuf,
    },

    /// Show which pages a range expression selects
    Preview {
        /// PDF file to inspect
        path: PathBuf,

        /// Page range expression (e.g., "1-3, 5, 8-10")
        pages: String,
    },

    /// Combine multiple PDFs into one, in argument order
    Merge {
        /// PDF files to merge
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Extract a page selection into a new PDF
    Split {
        /// PDF file to split
        path: PathBuf,

        /// Page range expression (e.g., "1-3, 5, 8-10")
        pages: String,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List recent operations
    History {
        /// Maximum number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// List favorite tools, or toggle one
    Favorites {
        /// Tool identifier to add or remove (e.g., "merge_pdf")
        #[arg(short, long)]
        toggle: Option<String>,
    },
}
