use thiserror::Error;

/// Failures raised by document assembly. Every variant names the operation
/// it belongs to so callers can present an actionable message.
#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("merge failed: no input documents")]
    NoInputs,

    #[error("merge failed: could not read input {index}: {source}")]
    MergeLoad {
        index: usize,
        #[source]
        source: lopdf::Error,
    },

    #[error("split failed: no valid pages selected")]
    EmptySelection,

    #[error("split failed: could not read source document: {0}")]
    SplitLoad(#[source] lopdf::Error),

    #[error("split failed: page {page} is out of range (1-{total})")]
    PageOutOfRange { page: u32, total: u32 },

    #[error("{operation} failed: could not write output: {source}")]
    Serialize {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("merge failed: malformed page tree: {0}")]
    PageTree(String),
}
