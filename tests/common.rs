#![allow(dead_code)]

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

fn noisy_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 31 % 256) as u8, (y * 17 % 256) as u8, ((x ^ y) % 256) as u8])
    })
}

/// A JPEG saved at maximum quality, so re-encoding at the default shrinks it.
pub fn create_large_jpeg(path: &Path) -> PathBuf {
    let file = File::create(path).unwrap();
    let encoder = JpegEncoder::new_with_quality(file, 100);
    DynamicImage::ImageRgb8(noisy_rgb(128, 128))
        .write_with_encoder(encoder)
        .unwrap();
    path.to_path_buf()
}

/// A JPEG saved at very low quality; re-encoding it at a high quality can only grow it.
pub fn create_low_quality_jpeg(path: &Path) -> PathBuf {
    let file = File::create(path).unwrap();
    let encoder = JpegEncoder::new_with_quality(file, 5);
    DynamicImage::ImageRgb8(noisy_rgb(128, 128))
        .write_with_encoder(encoder)
        .unwrap();
    path.to_path_buf()
}

/// A semi-transparent RGBA PNG written under `path`, whatever its extension.
pub fn create_rgba_png(path: &Path) -> PathBuf {
    RgbaImage::from_pixel(24, 24, Rgba([0, 128, 255, 90]))
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
    path.to_path_buf()
}

pub fn create_corrupt_image(path: &Path) -> PathBuf {
    fs::write(path, b"fake image data").unwrap();
    path.to_path_buf()
}

pub fn create_nested_directory_structure(temp_dir: &Path) -> PathBuf {
    let subdir = temp_dir.join("assets").join("img");
    fs::create_dir_all(&subdir).unwrap();
    fs::write(subdir.join("notes.txt"), b"nested text").unwrap();
    subdir
}

pub fn create_markdown(temp_dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = temp_dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}
