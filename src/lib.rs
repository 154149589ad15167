//! PDF Merger Library
//!
//! The pieces behind the PDF merger window:
//! - An ordered, editable list of input PDFs fed by drops and a file picker
//! - A controller that applies user events to that list
//! - Merging the listed files, in order, into a single PDF
//!
//! # Example
//!
//! ```no_run
//! use pdf_merger::pdf::{MergeOptions, merge_pdfs};
//! use std::path::PathBuf;
//!
//! let options = MergeOptions::new(
//!     vec![PathBuf::from("intro.pdf"), PathBuf::from("advanced.pdf")],
//!     PathBuf::from("merged.pdf"),
//! );
//!
//! merge_pdfs(&options).expect("Failed to merge PDFs");
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod file_list;
pub mod merge;
pub mod pdf;

// Re-export commonly used items
pub use config::Settings;
pub use controller::{Controller, Dialogs, Event, Level, MergeState, Notice, Notifier};
pub use error::{Error, Result};
pub use file_list::FileList;
pub use merge::{MergeOutcome, MergeReport};
