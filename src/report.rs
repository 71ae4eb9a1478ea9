//! Per-file compression results and the lines printed for them.

use crate::constants::{BYTES_PER_KIB, COMPRESSED_PREFIX, ERROR_PREFIX, SKIPPED_PREFIX};
use std::fmt::Display;
use std::path::Path;

/// Sizes measured around one re-save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionResult {
    pub original_size: u64,
    pub compressed_size: u64,
    /// False when the re-encoded bytes were discarded and the file left untouched.
    pub committed: bool,
}

impl CompressionResult {
    pub fn new(original_size: u64, compressed_size: u64, committed: bool) -> Self {
        Self {
            original_size,
            compressed_size,
            committed,
        }
    }

    /// Bytes saved; negative when the re-encode grew the file.
    pub fn reduction(&self) -> i64 {
        self.original_size as i64 - self.compressed_size as i64
    }

    /// Reduction relative to the original size, as a percentage.
    ///
    /// Returns 0 for an empty original instead of dividing by zero.
    pub fn reduction_percent(&self) -> f64 {
        calculate_reduction_percent(self.original_size, self.compressed_size)
    }

    pub fn reduction_kib(&self) -> f64 {
        self.reduction() as f64 / BYTES_PER_KIB
    }

    pub fn is_reduced(&self) -> bool {
        self.reduction() > 0
    }
}

/// Calculate size reduction as a percentage of the original
///
/// # Returns
/// * Positive means reduction, negative means increase, 0 when `original_size` is 0
pub fn calculate_reduction_percent(original_size: u64, compressed_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - compressed_size as f64) / original_size as f64) * 100.0
}

/// Lines reported for a successfully processed file.
pub fn format_file_result(path: &Path, result: &CompressionResult) -> Vec<String> {
    if result.is_reduced() {
        vec![
            format!("{} {}", COMPRESSED_PREFIX, path.display()),
            format!(
                "  -> Reduced by {:.2} KB ({:.2}%)",
                result.reduction_kib(),
                result.reduction_percent()
            ),
        ]
    } else {
        vec![format!("{} {}", SKIPPED_PREFIX, path.display())]
    }
}

pub fn format_file_error(path: &Path, err: &dyn Display) -> String {
    format!("{} {}: {}", ERROR_PREFIX, path.display(), err)
}

pub fn print_file_result(path: &Path, result: &CompressionResult) {
    for line in format_file_result(path, result) {
        crate::info!("{}", line);
    }
    crate::verbose!(
        "{} -> {} bytes{}",
        result.original_size,
        result.compressed_size,
        if result.committed { "" } else { " (original kept)" }
    );
}

/// Per-file errors are part of the report, so they go to stdout and ignore quiet mode.
pub fn print_file_error(path: &Path, err: &dyn Display) {
    println!("{}", format_file_error(path, err));
}
