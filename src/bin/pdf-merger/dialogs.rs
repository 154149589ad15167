//! Native dialogs backing the controller's collaborators

use std::path::PathBuf;

use log::{error, info, warn};
use pdf_merger::{Dialogs, Level, Notice, Notifier};

/// File dialogs via `rfd`, remembering the last folder used
pub struct RfdDialogs {
    default_file_name: String,
    last_dir: Option<PathBuf>,
}

impl RfdDialogs {
    pub fn new(default_file_name: String) -> Self {
        Self {
            default_file_name,
            last_dir: None,
        }
    }

    fn dialog(&self, title: &str) -> rfd::FileDialog {
        let dialog = rfd::FileDialog::new()
            .set_title(title)
            .add_filter("PDF Files", &["pdf"]);
        match &self.last_dir {
            Some(dir) => dialog.set_directory(dir),
            None => dialog,
        }
    }

    fn remember(&mut self, path: &std::path::Path) {
        if let Some(dir) = path.parent() {
            self.last_dir = Some(dir.to_path_buf());
        }
    }
}

impl Dialogs for RfdDialogs {
    fn pick_inputs(&mut self) -> Vec<PathBuf> {
        let picked = self
            .dialog("Open PDF Files")
            .pick_files()
            .unwrap_or_default();
        if let Some(first) = picked.first() {
            self.remember(first);
        }
        picked
    }

    fn pick_destination(&mut self) -> Option<PathBuf> {
        let output = self
            .dialog("Save Merged PDF")
            .set_file_name(self.default_file_name.clone())
            .save_file()?;
        self.remember(&output);
        Some(output)
    }
}

/// Message boxes via `rfd`
pub struct RfdNotifier;

impl Notifier for RfdNotifier {
    fn notify(&mut self, notice: &Notice) {
        let level = match notice.level {
            Level::Info => {
                info!("{}: {}", notice.title, notice.message);
                rfd::MessageLevel::Info
            }
            Level::Warning => {
                warn!("{}: {}", notice.title, notice.message);
                rfd::MessageLevel::Warning
            }
            Level::Error => {
                error!("{}: {}", notice.title, notice.message);
                rfd::MessageLevel::Error
            }
        };

        rfd::MessageDialog::new()
            .set_level(level)
            .set_title(notice.title.as_str())
            .set_description(notice.message.as_str())
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
