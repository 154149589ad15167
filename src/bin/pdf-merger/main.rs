//! PDF Merger desktop tool
//!
//! Opens a window where PDFs can be dropped or picked, reordered by removal,
//! and merged into one file.

mod app;
mod dialogs;

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use clap::Parser;
use glob::glob;
use log::{debug, warn};

use pdf_merger::config::{Settings, DEFAULT_FILE_NAME};
use pdf_merger::file_list::paths_from_uri_list;

use crate::app::MergerApp;

/// PDF Merger - Combine PDF files into one
#[derive(Parser)]
#[command(name = "pdf-merger")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Open an empty window
    pdf-merger

    # Start with some files already listed
    pdf-merger intro.pdf \"chapters/*.pdf\"

    # Desktop launchers may pass file URIs
    pdf-merger file:///home/me/My%20Report.pdf")]
struct Cli {
    /// PDF files to list at startup. Accepts paths, glob patterns and file:// URIs
    files: Vec<String>,

    /// Show a warning when dropped files are ignored because they are not PDFs
    #[arg(long)]
    warn_ignored_drops: bool,

    /// Write the merged PDF without compressing its streams
    #[arg(long)]
    no_compress: bool,

    /// File name suggested in the save dialog
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    file_name: String,

    /// Log filter, e.g. "debug" or "pdf_merger=trace" (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(filter) = &cli.log_level {
        logger.parse_filters(filter);
    }
    logger.init();

    let settings = Settings {
        warn_on_ignored_drops: cli.warn_ignored_drops,
        compress: !cli.no_compress,
        default_file_name: cli.file_name,
        initial_files: expand_inputs(cli.files),
    };
    debug!("Starting with {:?}", settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PDF Merger")
            .with_inner_size([600.0, 500.0])
            .with_drag_and_drop(true),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "PDF Merger",
        options,
        Box::new(move |cc| Ok(Box::new(MergerApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow!("Failed to open window: {e}"))
}

/// Turn command-line file arguments into paths, keeping argument order.
///
/// Existing files are taken literally even when their names contain glob
/// characters. Other glob patterns expand to their sorted matches, and a
/// pattern that matches nothing is reported and skipped rather than
/// stopping startup.
fn expand_inputs(args: Vec<String>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for arg in args {
        if arg.starts_with("file:") {
            paths.extend(paths_from_uri_list(&arg));
        } else if Path::new(&arg).exists() {
            paths.push(PathBuf::from(arg));
        } else if arg.contains('*') || arg.contains('?') || arg.contains('[') {
            let entries = match glob(&arg) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Invalid glob pattern {}: {}", arg, e);
                    continue;
                }
            };
            let mut matched: Vec<PathBuf> = entries
                .filter_map(|entry| match entry {
                    Ok(path) => Some(path),
                    Err(e) => {
                        warn!("Glob error for {}: {}", arg, e);
                        None
                    }
                })
                .collect();
            if matched.is_empty() {
                warn!("No files matched pattern: {}", arg);
            }
            matched.sort();
            paths.extend(matched);
        } else {
            paths.push(PathBuf::from(arg));
        }
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_inputs_keeps_argument_order() {
        let dir = tempfile::TempDir::new().unwrap();
        for name in ["2.pdf", "1.pdf", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        let pattern = dir.path().join("*.pdf").display().to_string();

        let paths = expand_inputs(vec!["z.pdf".to_string(), pattern, "a.pdf".to_string()]);

        assert_eq!(
            paths,
            vec![
                PathBuf::from("z.pdf"),
                dir.path().join("1.pdf"),
                dir.path().join("2.pdf"),
                PathBuf::from("a.pdf"),
            ]
        );
    }

    #[test]
    fn test_expand_inputs_existing_file_with_brackets() {
        let dir = tempfile::TempDir::new().unwrap();
        let scan = dir.path().join("Scan [1].pdf");
        std::fs::write(&scan, b"").unwrap();

        let paths = expand_inputs(vec![scan.display().to_string()]);

        assert_eq!(paths, vec![scan]);
    }

    #[test]
    fn test_expand_inputs_unmatched_glob_is_skipped() {
        let dir = tempfile::TempDir::new().unwrap();
        let pattern = dir.path().join("*.pdf").display().to_string();

        assert!(expand_inputs(vec![pattern]).is_empty());
    }
}
