use crate::constants::PROGRESS_SPINNER_TEMPLATE;
use crate::error::{Result, TidyError};
use crate::formats::is_image_file;
use crate::logger;
use crate::processing::{recompress_file, CompressionOptions};
use crate::report::{calculate_reduction_percent, print_file_error, print_file_result, CompressionResult};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use walkdir::WalkDir;

/// What happened to one file during a directory pass.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Compressed(CompressionResult),
    /// Not smaller after re-encoding, including files that grew.
    Skipped(CompressionResult),
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub compressed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub total_before: u64,
    pub total_after: u64,
}

impl BatchSummary {
    pub fn processed(&self) -> usize {
        self.compressed + self.skipped + self.failed
    }

    pub fn overall_reduction_percent(&self) -> f64 {
        calculate_reduction_percent(self.total_before, self.total_after)
    }

    fn record(&mut self, outcome: &FileOutcome) {
        let result = match outcome {
            FileOutcome::Compressed(result) => {
                self.compressed += 1;
                result
            }
            FileOutcome::Skipped(result) => {
                self.skipped += 1;
                result
            }
            FileOutcome::Failed(_) => {
                self.failed += 1;
                return;
            }
        };
        self.total_before += result.original_size;
        self.total_after += result.compressed_size;
    }
}

/// Re-encodes a single file and classifies the result. Never fails: errors
/// become `FileOutcome::Failed` with the error message.
pub fn process_file(path: &Path, options: &CompressionOptions) -> FileOutcome {
    match recompress_file(path, options) {
        Ok(result) if result.is_reduced() => FileOutcome::Compressed(result),
        Ok(result) => FileOutcome::Skipped(result),
        Err(e) => FileOutcome::Failed(e.to_string()),
    }
}

fn create_progress_spinner() -> ProgressBar {
    if logger::is_quiet() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template(PROGRESS_SPINNER_TEMPLATE) {
        pb.set_style(style);
    }
    pb
}

/// Walks `root` depth-first and re-compresses every PNG/JPEG in place.
///
/// Each file is processed to completion before the walk moves on. Failures
/// on individual files or directory entries are reported and counted; only a
/// missing or non-directory root is returned as an error.
pub fn compress_directory(root: &Path, options: &CompressionOptions) -> Result<BatchSummary> {
    if !root.exists() {
        return Err(TidyError::FileNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(TidyError::NotADirectory(root.to_path_buf()));
    }

    let spinner = create_progress_spinner();
    let mut summary = BatchSummary::default();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                let err = TidyError::from(e);
                spinner.suspend(|| print_file_error(&path, &err));
                summary.record(&FileOutcome::Failed(err.to_string()));
                continue;
            }
        };

        // Symlinked files are followed here; linked directories are not
        // descended into.
        let path = entry.path();
        if !path.is_file() || !is_image_file(path) {
            continue;
        }

        spinner.set_message(path.display().to_string());
        spinner.tick();

        let outcome = process_file(path, options);
        spinner.suspend(|| match &outcome {
            FileOutcome::Compressed(result) | FileOutcome::Skipped(result) => {
                print_file_result(path, result)
            }
            FileOutcome::Failed(message) => print_file_error(path, message),
        });
        summary.record(&outcome);
    }

    spinner.finish_and_clear();

    crate::verbose!(
        "{} files: {} compressed, {} skipped, {} failed, {} -> {} bytes ({:.2}%)",
        summary.processed(),
        summary.compressed,
        summary.skipped,
        summary.failed,
        summary.total_before,
        summary.total_after,
        summary.overall_reduction_percent()
    );

    Ok(summary)
}
