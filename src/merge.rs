//! Merge invocation: precondition, destination prompt, and the merge itself

use std::path::PathBuf;

use log::debug;

use crate::controller::Dialogs;
use crate::error::{Error, Result};
use crate::file_list::FileList;
use crate::pdf::{merge_pdfs, MergeOptions};

/// What a successful merge wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Destination chosen by the user
    pub output: PathBuf,
    /// Number of input files merged
    pub inputs: usize,
    /// Number of pages written
    pub pages: usize,
}

/// Result of a merge request that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    Written(MergeReport),
    /// The user dismissed the save dialog
    Cancelled,
}

/// Merge every file in `files`, in order, into a destination picked through
/// `dialogs`.
///
/// The list is only read, so after a failure the user can fix things up and
/// try again.
pub fn merge<D: Dialogs>(
    files: &FileList,
    dialogs: &mut D,
    compress: bool,
) -> Result<MergeOutcome> {
    if !files.can_merge() {
        return Err(Error::InsufficientFiles(files.len()));
    }

    let Some(output) = dialogs.pick_destination() else {
        debug!("Save dialog cancelled, nothing written");
        return Ok(MergeOutcome::Cancelled);
    };

    let options = MergeOptions {
        input_paths: files.paths().to_vec(),
        output_path: output.clone(),
        compress,
    };

    let pages = merge_pdfs(&options)?;
    Ok(MergeOutcome::Written(MergeReport {
        output,
        inputs: files.len(),
        pages,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Dialogs that must never be asked for a destination
    struct NoDialogs;

    impl Dialogs for NoDialogs {
        fn pick_inputs(&mut self) -> Vec<PathBuf> {
            Vec::new()
        }

        fn pick_destination(&mut self) -> Option<PathBuf> {
            panic!("destination requested before precondition check");
        }
    }

    struct CancelDialogs;

    impl Dialogs for CancelDialogs {
        fn pick_inputs(&mut self) -> Vec<PathBuf> {
            Vec::new()
        }

        fn pick_destination(&mut self) -> Option<PathBuf> {
            None
        }
    }

    #[test]
    fn test_single_file_is_insufficient() {
        let mut files = FileList::new();
        files.add_picked(["only.pdf"]);

        let result = merge(&files, &mut NoDialogs, true);
        assert!(matches!(result, Err(Error::InsufficientFiles(1))));
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_cancelled_destination_is_not_an_error() {
        let mut files = FileList::new();
        files.add_picked(["missing-a.pdf", "missing-b.pdf"]);

        let outcome = merge(&files, &mut CancelDialogs, true).unwrap();
        assert_eq!(outcome, MergeOutcome::Cancelled);
    }
}
