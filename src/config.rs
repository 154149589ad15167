//! Runtime settings

use std::path::PathBuf;

/// Default name offered in the save dialog
pub const DEFAULT_FILE_NAME: &str = "merged.pdf";

/// Settings shared by the controller and the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Warn when a drop contained files that are not PDFs
    pub warn_on_ignored_drops: bool,
    /// Compress streams in the merged output
    pub compress: bool,
    /// File name pre-filled in the save dialog
    pub default_file_name: String,
    /// Files to load into the list at startup, treated like a drop
    pub initial_files: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            warn_on_ignored_drops: false,
            compress: true,
            default_file_name: DEFAULT_FILE_NAME.to_string(),
            initial_files: Vec::new(),
        }
    }
}
