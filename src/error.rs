//! Error types for the extraction pipeline.

use crate::page_range::PageRangeError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between opening the input and saving
/// the output. All of these are terminal; the binary maps them to a
/// message on stderr and a non-zero exit.
#[derive(Error, Debug)]
pub enum Error {
    /// Input PDF could not be loaded
    #[error("failed to open PDF {}: {source}", .path.display())]
    OpenSource {
        path: PathBuf,
        source: lopdf::Error,
    },

    /// Input PDF has no pages
    #[error("PDF has no pages: {}", .0.display())]
    EmptyPdf(PathBuf),

    /// Page selection string does not parse
    #[error("invalid page selection: {0}")]
    PageRange(#[from] PageRangeError),

    /// Selection names no page that exists in the document
    #[error("no pages selected: the selection matches no page in the document")]
    NoPagesSelected,

    /// A resolved page number has no page object behind it
    #[error("page {page} is out of range (1-{total})")]
    PageOutOfRange { page: u32, total: u32 },

    /// PDF structure error while assembling the output document
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Output PDF could not be written
    #[error("failed to save PDF {}: {source}", .path.display())]
    SaveOutput {
        path: PathBuf,
        source: lopdf::Error,
    },
}
