pub const DEFAULT_QUALITY: u8 = 80;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

pub const ZOPFLI_QUALITY_THRESHOLD: u8 = 90;
pub const HIGH_COMPRESSION_QUALITY_THRESHOLD: u8 = 70;
pub const OXIPNG_PRESET: u8 = 2;
pub const ZOPFLI_ITERATIONS: u8 = 15;
pub const LIBDEFLATER_HIGH_LEVEL: u8 = 12;
pub const LIBDEFLATER_LOW_LEVEL: u8 = 8;

pub const BYTES_PER_KIB: f64 = 1024.0;

/// Extensions (lowercase, without the dot) the compressor rewrites.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Markdown document the pipe fixer rewrites when no path is given.
pub const DEFAULT_PIPE_TARGET: &str = "tech-docs/undergrad_guide/index.md";

/// Replacement for `|` inside math spans.
pub const PIPE_ESCAPE: &str = r"\vert";

pub const TEMP_FILE_PREFIX: &str = ".repo-tidy-";
pub const TEMP_FILE_SUFFIX: &str = ".part";

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

// Report lines
pub const SCAN_START_PREFIX: &str = "Scanning for images in:";
pub const SCAN_COMPLETE_MESSAGE: &str = "Image compression scan complete.";
pub const COMPRESSED_PREFIX: &str = "Compressed:";
pub const SKIPPED_PREFIX: &str = "Skipped (already optimal):";
pub const ERROR_PREFIX: &str = "Error processing";
pub const PIPES_FIXED_MESSAGE: &str = "Fixed pipes in math expressions.";
pub const PIPES_UNCHANGED_MESSAGE: &str = "No changes needed or regex failed.";
