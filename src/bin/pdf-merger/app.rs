use std::collections::BTreeSet;
use std::path::PathBuf;

use log::{debug, trace};
use pdf_merger::{Controller, Event, MergeState, Settings};

use crate::dialogs::{RfdDialogs, RfdNotifier};

/// The merger window. Widgets only produce events; the controller owns the
/// file list.
pub struct MergerApp {
    controller: Controller,
    /// Selected rows in the file list
    selection: BTreeSet<usize>,
    dialogs: RfdDialogs,
    notifier: RfdNotifier,
}

impl MergerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let initial = settings.initial_files.clone();
        let mut app = Self {
            dialogs: RfdDialogs::new(settings.default_file_name.clone()),
            controller: Controller::new(settings),
            selection: BTreeSet::new(),
            notifier: RfdNotifier,
        };
        if !initial.is_empty() {
            debug!("Listing {} files from the command line", initial.len());
            app.apply(Event::DropFiles(initial));
        }
        app
    }

    fn apply(&mut self, event: Event) {
        let clears_selection = matches!(event, Event::Remove(_));
        self.controller.dispatch(event, &mut self.dialogs, &mut self.notifier);
        if clears_selection {
            self.selection.clear();
        }
        let len = self.controller.files().len();
        self.selection.retain(|&row| row < len);
    }

    fn file_list(&mut self, ui: &mut egui::Ui) {
        let multi = ui.input(|i| i.modifiers.command);
        let rows: Vec<String> = self
            .controller
            .files()
            .iter()
            .map(|path| path.display().to_string())
            .collect();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (row, label) in rows.into_iter().enumerate() {
                    let selected = self.selection.contains(&row);
                    if ui.selectable_label(selected, label).clicked() {
                        if multi {
                            if !self.selection.remove(&row) {
                                self.selection.insert(row);
                            }
                        } else {
                            self.selection = BTreeSet::from([row]);
                        }
                        trace!("Selection now {:?}", self.selection);
                    }
                }
            });
    }
}

impl eframe::App for MergerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        // dnd
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            events.push(Event::DropFiles(dropped));
        }
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered_justified(|ui| {
                if ui.button("Upload Files").clicked() {
                    events.push(Event::Upload);
                }
                if ui.button("Remove Selected File").clicked() {
                    events.push(Event::Remove(self.selection.clone()));
                }
                let ready = self.controller.merge_state() == MergeState::Ready;
                if ui
                    .add_enabled(ready, egui::Button::new("Merge PDFs"))
                    .clicked()
                {
                    events.push(Event::Merge);
                }
            });
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.heading(if hovering {
                        "Release to add PDF files"
                    } else {
                        "Drop PDF files here"
                    });
                });
                ui.add_space(20.0);
            });
            ui.add_space(8.0);
            self.file_list(ui);
        });

        for event in events {
            self.apply(event);
        }
    }
}
