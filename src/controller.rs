//! Event dispatch for the merger window
//!
//! The window turns clicks, drops and dialog results into [`Event`]s and
//! hands them to a single [`Controller`], which owns the [`FileList`] and
//! decides what the user is told through a [`Notifier`].

use std::collections::BTreeSet;
use std::path::PathBuf;

use log::{debug, info};

use crate::config::Settings;
use crate::error::Error;
use crate::file_list::FileList;
use crate::merge::{merge, MergeOutcome};

/// Something the user did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// "Upload Files" was clicked; the input dialog supplies the paths
    Upload,
    /// Files were dropped onto the window
    DropFiles(Vec<PathBuf>),
    /// "Remove Selected" was clicked with these rows selected
    Remove(BTreeSet<usize>),
    /// "Merge PDFs" was clicked
    Merge,
}

/// Interactive file dialogs
pub trait Dialogs {
    /// Ask for input PDFs. Empty when cancelled.
    fn pick_inputs(&mut self) -> Vec<PathBuf>;

    /// Ask where to save the merged PDF. `None` when cancelled.
    fn pick_destination(&mut self) -> Option<PathBuf>;
}

/// Severity of a [`Notice`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: Level, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&Error> for Notice {
    fn from(e: &Error) -> Self {
        match e {
            Error::NoSelection => Notice::new(Level::Warning, "No Selection", e.to_string()),
            Error::InsufficientFiles(_) => {
                Notice::new(Level::Warning, "Not Enough Files", e.to_string())
            }
            _ => Notice::new(
                Level::Error,
                "Error",
                format!("Failed to save merged PDF: {e}"),
            ),
        }
    }
}

/// Where user-facing messages go
pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}

/// State of the merge action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeState {
    /// Fewer than two files
    Disabled,
    Ready,
    /// A merge is in progress. The merge blocks the thread that owns the
    /// controller, so callers on that thread never observe this state.
    Running,
}

/// Owns the file list and applies events to it
#[derive(Debug, Default)]
pub struct Controller {
    files: FileList,
    settings: Settings,
    /// Only true inside `on_merge`
    running: bool,
}

impl Controller {
    pub fn new(settings: Settings) -> Self {
        Self {
            files: FileList::new(),
            settings,
            running: false,
        }
    }

    pub fn files(&self) -> &FileList {
        &self.files
    }

    pub fn merge_state(&self) -> MergeState {
        if self.running {
            MergeState::Running
        } else if self.files.can_merge() {
            MergeState::Ready
        } else {
            MergeState::Disabled
        }
    }

    /// Apply one event. Every failure becomes exactly one notice; nothing
    /// here is fatal.
    pub fn dispatch<D, N>(&mut self, event: Event, dialogs: &mut D, notifier: &mut N)
    where
        D: Dialogs,
        N: Notifier,
    {
        debug!("Dispatching {:?}", event);
        match event {
            Event::Upload => {
                let picked = dialogs.pick_inputs();
                let added = self.files.add_picked(picked);
                debug!("Added {} picked files", added);
            }
            Event::DropFiles(paths) => self.on_drop(paths, notifier),
            Event::Remove(selection) => match self.files.remove(&selection) {
                Ok(removed) => debug!("Removed {} files", removed),
                Err(e) => self.report(&e, notifier),
            },
            Event::Merge => self.on_merge(dialogs, notifier),
        }
        debug!(
            "{} files listed, merge {:?}",
            self.files.len(),
            self.merge_state()
        );
    }

    fn on_drop<N: Notifier>(&mut self, paths: Vec<PathBuf>, notifier: &mut N) {
        let offered = paths.len();
        let added = self.files.add_dropped(paths);
        let ignored = offered - added;
        debug!("Drop added {} files, ignored {}", added, ignored);

        if ignored > 0 && self.settings.warn_on_ignored_drops {
            let noun = if ignored == 1 { "file" } else { "files" };
            notifier.notify(&Notice::new(
                Level::Warning,
                "Ignored Files",
                format!("{ignored} dropped {noun} ignored: only PDF files can be merged."),
            ));
        }
    }

    fn on_merge<D: Dialogs, N: Notifier>(&mut self, dialogs: &mut D, notifier: &mut N) {
        self.running = true;
        let result = merge(&self.files, dialogs, self.settings.compress);
        self.running = false;

        match result {
            Ok(MergeOutcome::Written(report)) => {
                info!("Wrote {} pages from {} files", report.pages, report.inputs);
                notifier.notify(&Notice::new(
                    Level::Info,
                    "Success",
                    format!("Merged PDF saved to: {}", report.output.display()),
                ));
            }
            Ok(MergeOutcome::Cancelled) => {}
            Err(e) => self.report(&e, notifier),
        }
    }

    /// The notifier logs what it shows, so nothing is logged here
    fn report<N: Notifier>(&self, e: &Error, notifier: &mut N) {
        notifier.notify(&Notice::from(e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct ScriptedDialogs {
        inputs: Vec<PathBuf>,
        destination: Option<PathBuf>,
    }

    impl Dialogs for ScriptedDialogs {
        fn pick_inputs(&mut self) -> Vec<PathBuf> {
            std::mem::take(&mut self.inputs)
        }

        fn pick_destination(&mut self) -> Option<PathBuf> {
            self.destination.clone()
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<Notice>);

    impl Notifier for Recorder {
        fn notify(&mut self, notice: &Notice) {
            self.0.push(notice.clone());
        }
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_upload_adds_in_order() {
        let mut controller = Controller::default();
        let mut dialogs = ScriptedDialogs {
            inputs: paths(&["b.pdf", "a.pdf"]),
            ..Default::default()
        };
        let mut notes = Recorder::default();

        controller.dispatch(Event::Upload, &mut dialogs, &mut notes);

        assert_eq!(controller.files().paths(), paths(&["b.pdf", "a.pdf"]).as_slice());
        assert_eq!(controller.merge_state(), MergeState::Ready);
        assert!(notes.0.is_empty());
    }

    #[test]
    fn test_cancelled_upload_changes_nothing() {
        let mut controller = Controller::default();
        let mut notes = Recorder::default();

        controller.dispatch(Event::Upload, &mut ScriptedDialogs::default(), &mut notes);

        assert!(controller.files().is_empty());
        assert_eq!(controller.merge_state(), MergeState::Disabled);
        assert!(notes.0.is_empty());
    }

    #[test]
    fn test_remove_without_selection_warns() {
        let mut controller = Controller::default();
        let mut dialogs = ScriptedDialogs::default();
        let mut notes = Recorder::default();
        controller.dispatch(
            Event::DropFiles(paths(&["a.pdf", "b.pdf"])),
            &mut dialogs,
            &mut notes,
        );

        controller.dispatch(Event::Remove(BTreeSet::new()), &mut dialogs, &mut notes);

        assert_eq!(controller.files().len(), 2);
        assert_eq!(notes.0.len(), 1);
        assert_eq!(notes.0[0].level, Level::Warning);
        assert_eq!(notes.0[0].title, "No Selection");
    }

    #[test]
    fn test_merge_with_one_file_warns() {
        let mut controller = Controller::default();
        let mut dialogs = ScriptedDialogs {
            destination: Some(PathBuf::from("never-written.pdf")),
            ..Default::default()
        };
        let mut notes = Recorder::default();
        controller.dispatch(Event::DropFiles(paths(&["a.pdf"])), &mut dialogs, &mut notes);

        controller.dispatch(Event::Merge, &mut dialogs, &mut notes);

        assert_eq!(controller.files().len(), 1);
        assert_eq!(notes.0.len(), 1);
        assert_eq!(notes.0[0].level, Level::Warning);
        assert_eq!(notes.0[0].title, "Not Enough Files");
        assert!(!PathBuf::from("never-written.pdf").exists());
    }

    #[test]
    fn test_merge_failure_reports_error_and_keeps_list() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("out.pdf");
        let mut controller = Controller::default();
        let mut dialogs = ScriptedDialogs {
            destination: Some(output.clone()),
            ..Default::default()
        };
        let mut notes = Recorder::default();
        let missing = paths(&["/definitely/missing/a.pdf", "/definitely/missing/b.pdf"]);
        controller.dispatch(Event::DropFiles(missing.clone()), &mut dialogs, &mut notes);

        controller.dispatch(Event::Merge, &mut dialogs, &mut notes);

        assert_eq!(controller.files().paths(), missing.as_slice());
        assert_eq!(controller.merge_state(), MergeState::Ready);
        assert_eq!(notes.0.len(), 1);
        assert_eq!(notes.0[0].level, Level::Error);
        assert!(notes.0[0].message.contains("a.pdf"));
        assert!(!output.exists());
    }

    #[test]
    fn test_ignored_drops_silent_by_default() {
        let mut controller = Controller::default();
        let mut notes = Recorder::default();

        controller.dispatch(
            Event::DropFiles(paths(&["a.pdf", "b.png", "c.pdf"])),
            &mut ScriptedDialogs::default(),
            &mut notes,
        );

        assert_eq!(controller.files().paths(), paths(&["a.pdf", "c.pdf"]).as_slice());
        assert!(notes.0.is_empty());
    }

    #[test]
    fn test_ignored_drops_warn_when_enabled() {
        let mut controller = Controller::new(Settings {
            warn_on_ignored_drops: true,
            ..Default::default()
        });
        let mut notes = Recorder::default();

        controller.dispatch(
            Event::DropFiles(paths(&["a.pdf", "b.png", "c.txt"])),
            &mut ScriptedDialogs::default(),
            &mut notes,
        );

        assert_eq!(controller.files().len(), 1);
        assert_eq!(notes.0.len(), 1);
        assert_eq!(notes.0[0].level, Level::Warning);
        assert!(notes.0[0].message.starts_with("2 dropped files"));
    }

    #[test]
    fn test_merge_state_follows_list() {
        let mut controller = Controller::default();
        let mut dialogs = ScriptedDialogs::default();
        let mut notes = Recorder::default();

        let events = [
            Event::DropFiles(paths(&["a.pdf"])),
            Event::DropFiles(paths(&["b.pdf", "c.pdf"])),
            Event::Remove(BTreeSet::from([0])),
            Event::Remove(BTreeSet::from([0])),
            Event::Remove(BTreeSet::new()),
        ];
        for event in events {
            controller.dispatch(event, &mut dialogs, &mut notes);
            let expected = if controller.files().len() >= 2 {
                MergeState::Ready
            } else {
                MergeState::Disabled
            };
            assert_eq!(controller.merge_state(), expected);
        }
        assert_eq!(controller.files().paths(), paths(&["c.pdf"]).as_slice());
    }
}
