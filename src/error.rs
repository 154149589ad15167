//! Error types for the PDF merger

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the PDF merger library
#[derive(Error, Debug)]
pub enum Error {
    /// Remove was requested with no rows selected
    #[error("No file selected to remove.")]
    NoSelection,

    /// Merge was requested with fewer than two files in the list
    #[error("You need to add at least two PDF files to merge (have {0}).")]
    InsufficientFiles(usize),

    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Invalid PDF (no pages)
    #[error("PDF has no pages: {}", .0.display())]
    EmptyPdf(PathBuf),
}

impl Error {
    /// True for failures reading an input or writing the output.
    ///
    /// These are reported as errors; the remaining variants are user
    /// mistakes and only warrant a warning.
    pub fn is_merge_failure(&self) -> bool {
        matches!(
            self,
            Error::Pdf(_) | Error::Io(_) | Error::FileNotFound(_) | Error::EmptyPdf(_)
        )
    }
}
