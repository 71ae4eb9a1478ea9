//! Image kind classification.
//!
//! The compressor only touches files whose name ends in one of the supported
//! suffixes; the suffix, not the file content, decides which encoder is used
//! when the file is written back. A bare dot-file such as `.png` counts: the
//! whole name after the last dot is the suffix.

use crate::constants::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{Result, TidyError};
use image::ImageFormat;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Image kinds the compressor re-encodes in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// `.jpg` / `.jpeg`, lossy, honours the quality setting
    Jpeg,
    /// `.png`, lossless, quality selects optimisation effort
    Png,
}

impl ImageKind {
    /// Classify a path by the suffix of its file name, case-insensitively.
    pub fn from_path(path: &Path) -> Option<ImageKind> {
        name_suffix(path).and_then(|suffix| ImageKind::from_str(&suffix).ok())
    }

    /// Whether the encoder for this kind can store an alpha channel.
    pub fn supports_alpha(&self) -> bool {
        match self {
            ImageKind::Jpeg => false,
            ImageKind::Png => true,
        }
    }

    /// Convert to the image crate's ImageFormat
    pub fn to_image_format(&self) -> ImageFormat {
        match self {
            ImageKind::Jpeg => ImageFormat::Jpeg,
            ImageKind::Png => ImageFormat::Png,
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageKind::Jpeg => "JPEG",
            ImageKind::Png => "PNG",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ImageKind {
    type Err = TidyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(ImageKind::Jpeg),
            "png" => Ok(ImageKind::Png),
            _ => Err(TidyError::UnsupportedFormat(s.to_string())),
        }
    }
}

// `Path::extension` yields nothing for `.png`, so split the name by hand.
fn name_suffix(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let (_, suffix) = name.rsplit_once('.')?;
    Some(suffix.to_lowercase())
}

/// Check if a file path names an image the compressor should process
pub fn is_image_file(path: &Path) -> bool {
    name_suffix(path)
        .map(|suffix| SUPPORTED_IMAGE_EXTENSIONS.contains(&suffix.as_str()))
        .unwrap_or(false)
}
