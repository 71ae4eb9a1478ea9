pub mod logger;

pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod formats;
pub mod fsio;
pub mod markdown;
pub mod processing;
pub mod report;

pub use batch::{compress_directory, process_file, BatchSummary, FileOutcome};
pub use error::{Result, TidyError};
pub use formats::{is_image_file, ImageKind};
pub use markdown::{escape_pipes, fix_math_pipes, fix_pipes_in_file, scan_spans, FixOutcome, Span, SpanKind};
pub use processing::{
    encode_image, load_image, prepare_for_format, recompress_file, CompressionOptions,
};
pub use report::CompressionResult;
