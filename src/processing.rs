use crate::constants::{
    DEFAULT_QUALITY, HIGH_COMPRESSION_QUALITY_THRESHOLD, LIBDEFLATER_HIGH_LEVEL,
    LIBDEFLATER_LOW_LEVEL, MAX_QUALITY, MIN_QUALITY, OXIPNG_PRESET, ZOPFLI_ITERATIONS,
    ZOPFLI_QUALITY_THRESHOLD,
};
use crate::error::{Result, TidyError};
use crate::formats::ImageKind;
use crate::fsio::write_atomically;
use crate::report::CompressionResult;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::{DynamicImage, ImageReader};
use oxipng::{Deflaters, Options};
use std::fs;
use std::io::ErrorKind;
use std::num::NonZeroU8;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionOptions {
    pub quality: u8,
    /// Leave a file untouched when re-encoding would not make it smaller.
    pub keep_larger: bool,
}

impl CompressionOptions {
    pub fn new(quality: Option<u8>, keep_larger: bool) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(TidyError::InvalidQuality(quality));
        }

        Ok(Self {
            quality,
            keep_larger,
        })
    }
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            keep_larger: false,
        }
    }
}

/// Decodes an image, sniffing the real format from its content.
///
/// A PNG that was renamed to `.jpg` still decodes as a PNG here; the
/// extension only matters again when the image is written back.
///
/// # Example
/// ```
/// use std::path::Path;
/// use repo_tidy::{load_image, TidyError};
///
/// let result = load_image(Path::new("nonexistent.jpg"));
/// assert!(matches!(result, Err(TidyError::FileNotFound(_))));
/// ```
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => TidyError::FileNotFound(path.to_path_buf()),
            _ => TidyError::Io(e),
        })?
        .with_guessed_format()?;
    if let (Some(detected), Some(kind)) = (reader.format(), ImageKind::from_path(path)) {
        if detected != kind.to_image_format() {
            crate::verbose!(
                "{} holds {:?} data, re-encoding as {}",
                path.display(),
                detected,
                kind
            );
        }
    }

    Ok(reader.decode()?)
}

/// Converts the pixel layout to one the target encoder accepts.
///
/// The JPEG encoder has no alpha channel and only takes 8-bit gray or RGB.
/// Palette images are already expanded to RGB(A) by the decoder, so they are
/// covered by the same rule. PNG keeps every layout as is.
pub fn prepare_for_format(img: DynamicImage, kind: ImageKind) -> DynamicImage {
    if kind.supports_alpha() {
        return img;
    }

    match img {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => img,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

/// Encodes an image in memory with optimizing settings for `kind`.
///
/// JPEG uses the quality value directly. PNG is written with the best zlib
/// level and then passed through oxipng, where the quality picks the deflater.
pub fn encode_image(
    img: &DynamicImage,
    kind: ImageKind,
    options: &CompressionOptions,
) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();

    match kind {
        ImageKind::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut buffer, options.quality);
            img.write_with_encoder(encoder)?;
        }
        ImageKind::Png => {
            let encoder = PngEncoder::new_with_quality(
                &mut buffer,
                CompressionType::Best,
                PngFilterType::Adaptive,
            );
            img.write_with_encoder(encoder)?;
            buffer = optimize_png(&buffer, options.quality)?;
        }
    }

    Ok(buffer)
}

fn deflater_for_quality(quality: u8) -> Deflaters {
    if quality >= ZOPFLI_QUALITY_THRESHOLD {
        if let Some(iterations) = NonZeroU8::new(ZOPFLI_ITERATIONS) {
            return Deflaters::Zopfli { iterations };
        }
    }

    if quality >= HIGH_COMPRESSION_QUALITY_THRESHOLD {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_HIGH_LEVEL,
        }
    } else {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_LOW_LEVEL,
        }
    }
}

fn optimize_png(data: &[u8], quality: u8) -> Result<Vec<u8>> {
    let mut oxipng_options = Options::from_preset(OXIPNG_PRESET);
    oxipng_options.deflate = deflater_for_quality(quality);

    oxipng::optimize_from_memory(data, &oxipng_options)
        .map_err(|e| TidyError::PngOptimization(e.to_string()))
}

/// Re-encodes one image file in place.
///
/// load -> convert for the target encoder -> measure -> save -> measure.
///
/// The save goes through a temporary file and an atomic rename, so a failure
/// at any step leaves the original bytes on disk.
///
/// # Returns
/// * `Ok(CompressionResult)` - Sizes before and after the save
/// * `Err(TidyError)` - If the file cannot be read, decoded, encoded or replaced
pub fn recompress_file(path: &Path, options: &CompressionOptions) -> Result<CompressionResult> {
    let kind = ImageKind::from_path(path)
        .ok_or_else(|| TidyError::UnsupportedFormat(path.display().to_string()))?;

    let img = prepare_for_format(load_image(path)?, kind);

    let original_size = fs::metadata(path)?.len();
    let encoded = encode_image(&img, kind, options)?;

    if options.keep_larger && encoded.len() as u64 >= original_size {
        return Ok(CompressionResult::new(original_size, original_size, false));
    }

    write_atomically(path, &encoded)?;

    let compressed_size = fs::metadata(path)?.len();
    Ok(CompressionResult::new(original_size, compressed_size, true))
}
