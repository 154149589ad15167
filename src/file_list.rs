//! The ordered list of PDFs waiting to be merged

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use url::Url;

use crate::error::{Error, Result};

/// Ordered, user-editable sequence of input PDF paths.
///
/// Insertion order is merge order. Duplicates are allowed, and nothing is
/// checked on disk until merge time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    entries: Vec<PathBuf>,
}

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append dropped paths, skipping anything without a `.pdf` extension.
    ///
    /// Returns the number of paths appended.
    pub fn add_dropped<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let before = self.entries.len();
        for path in paths {
            let path = path.into();
            if has_pdf_extension(&path) {
                trace!("Accepted dropped file: {}", path.display());
                self.entries.push(path);
            } else {
                debug!("Ignoring dropped non-PDF: {}", path.display());
            }
        }
        self.entries.len() - before
    }

    /// Append paths chosen in the file picker. The picker already filters by
    /// extension, so every path is taken as-is.
    pub fn add_picked<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let before = self.entries.len();
        self.entries.extend(paths.into_iter().map(Into::into));
        self.entries.len() - before
    }

    /// Remove the selected rows, keeping the rest in order.
    ///
    /// Indices past the end are ignored. A selection naming no existing row
    /// is `Error::NoSelection` and leaves the list untouched.
    pub fn remove(&mut self, selection: &BTreeSet<usize>) -> Result<usize> {
        let len = self.entries.len();
        if !selection.iter().any(|&i| i < len) {
            return Err(Error::NoSelection);
        }

        let before = len;
        let mut row = 0;
        self.entries.retain(|_| {
            let keep = !selection.contains(&row);
            row += 1;
            keep
        });
        Ok(before - self.entries.len())
    }

    /// Whether there are enough files to merge.
    pub fn can_merge(&self) -> bool {
        self.entries.len() >= 2
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.entries
    }
}

/// Check for a `.pdf` extension, ignoring ASCII case.
///
/// A file named just `.pdf` is a hidden file with no extension and does
/// not count.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Parse a drag-and-drop payload in `text/uri-list` form into local paths.
///
/// Blank lines and `#` comments are skipped. `file://` URIs are decoded to
/// local paths, other schemes are dropped, and anything that is not a URI at
/// all is taken as a plain path.
pub fn paths_from_uri_list(text: &str) -> Vec<PathBuf> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(path_from_uri)
        .collect()
}

fn path_from_uri(item: &str) -> Option<PathBuf> {
    match Url::parse(item) {
        // Windows drive letters ("C:\...") parse as a one-letter scheme
        Ok(url) if url.scheme().len() == 1 => Some(PathBuf::from(item)),
        Ok(url) if url.scheme() == "file" => match url.to_file_path() {
            Ok(path) => Some(path),
            Err(()) => {
                debug!("Ignoring non-local file URI: {}", item);
                None
            }
        },
        Ok(url) => {
            debug!("Ignoring {} URI: {}", url.scheme(), item);
            None
        }
        Err(_) => Some(PathBuf::from(item)),
    }
}
