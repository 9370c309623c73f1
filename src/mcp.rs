use anyhow::Result;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::page_range::parse_selection;
use crate::pdf::{merge_documents, split_document, SourceDocument};

// Request structs for tools

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PathRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PreviewRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
    #[schemars(description = "Page range expression (e.g., '1-3, 5, 8-10')")]
    pub pages: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MergeRequest {
    #[schemars(description = "Paths of the PDF files to merge, in output order")]
    pub inputs: Vec<String>,
    #[schemars(description = "Output file path")]
    pub output: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SplitRequest {
    #[schemars(description = "Path to the source PDF file")]
    pub path: String,
    #[schemars(description = "Page range expression (e.g., '1-3, 5, 8-10')")]
    pub pages: String,
    #[schemars(description = "Output file path")]
    pub output: String,
}

#[derive(Debug, Clone)]
pub struct PageServer {
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
}

impl PageServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for PageServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl PageServer {
    #[tool(
        description = "Get the page count of a PDF. Returns 0 for documents that cannot be parsed."
    )]
    fn pdf_page_count(&self, Parameters(PathRequest { path }): Parameters<PathRequest>) -> String {
        match SourceDocument::read(&path) {
            Ok(doc) => {
                let result = PageCountResult {
                    path,
                    page_count: doc.page_count(),
                };
                serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(
        description = "Preview which pages a range expression like '1-3, 5, 8-10' selects in a PDF. Invalid tokens are dropped silently."
    )]
    fn pdf_preview_selection(
        &self,
        Parameters(PreviewRequest { path, pages }): Parameters<PreviewRequest>,
    ) -> String {
        let doc = match SourceDocument::read(&path) {
            Ok(d) => d,
            Err(e) => return format!("Error: {}", e),
        };
        let total = doc.page_count();

        let selection = parse_selection(&pages, total);
        let result = PreviewResult {
            path,
            total_pages: total,
            selected_count: selection.len() as u32,
            selection,
        };
        serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
    }

    #[tool(
        description = "Merge multiple PDFs into one output file, concatenating all pages in input order."
    )]
    fn pdf_merge(
        &self,
        Parameters(MergeRequest { inputs, output }): Parameters<MergeRequest>,
    ) -> String {
        let mut buffers = Vec::with_capacity(inputs.len());
        for input in &inputs {
            match std::fs::read(input) {
                Ok(bytes) => buffers.push(bytes),
                Err(e) => return format!("Error: Failed to read {}: {}", input, e),
            }
        }

        let merged = match merge_documents(&buffers) {
            Ok(bytes) => bytes,
            Err(e) => return format!("Error: {}", e),
        };
        let page_count = crate::pdf::inspect_page_count(&merged);

        if let Err(e) = std::fs::write(&output, &merged) {
            return format!("Error: Failed to write {}: {}", output, e);
        }

        let result = AssembleResult {
            output_path: output,
            page_count,
        };
        serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
    }

    #[tool(
        description = "Extract the pages selected by a range expression into a new PDF. Fails if the expression selects no valid pages."
    )]
    fn pdf_split(
        &self,
        Parameters(SplitRequest {
            path,
            pages,
            output,
        }): Parameters<SplitRequest>,
    ) -> String {
        let doc = match SourceDocument::read(&path) {
            Ok(d) => d,
            Err(e) => return format!("Error: {}", e),
        };
        let total = doc.page_count();

        let selection = parse_selection(&pages, total);

        let bytes = match split_document(doc.bytes(), &selection) {
            Ok(b) => b,
            Err(e) => return format!("Error: {}", e),
        };

        if let Err(e) = std::fs::write(&output, &bytes) {
            return format!("Error: Failed to write {}: {}", output, e);
        }

        let result = AssembleResult {
            output_path: output,
            page_count: selection.len() as u32,
        };
        serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
    }
}

// Result types for MCP tools

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PageCountResult {
    pub path: String,
    pub page_count: u32,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PreviewResult {
    pub path: String,
    pub total_pages: u32,
    pub selection: Vec<u32>,
    pub selected_count: u32,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AssembleResult {
    pub output_path: String,
    pub page_count: u32,
}

impl ServerHandler for PageServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF page selection and assembly tools. Use pdf_page_count to inspect a \
                 document, pdf_preview_selection to see which pages a range expression picks, \
                 pdf_merge to concatenate documents, and pdf_split to extract a page selection \
                 into a new file."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server() -> Result<()> {
    let server = PageServer::new();

    // Serve using stdin/stdout as a tuple
    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}
