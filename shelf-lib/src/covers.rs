//! Cover image compression and storage.
//!
//! Covers are downscaled so the longest edge fits [`DEFAULT_MAX_EDGE`],
//! re-encoded as JPEG and stored in a content-addressed directory: the file
//! name is the SHA-256 of the compressed bytes, so storing the same cover
//! twice yields the same reference.

use std::io::Write;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use sha2::{Digest, Sha256};
use thiserror::Error;

pub const DEFAULT_MAX_EDGE: u32 = 800;
pub const DEFAULT_QUALITY: u8 = 80;

#[derive(Debug, Error)]
pub enum CoverError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cover worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverOptions {
    pub max_edge: u32,
    pub quality: u8,
}

impl Default for CoverOptions {
    fn default() -> Self {
        Self {
            max_edge: DEFAULT_MAX_EDGE,
            quality: DEFAULT_QUALITY,
        }
    }
}

/// Decode `bytes`, shrink to fit `options.max_edge` and encode as JPEG.
///
/// Images already within bounds are only re-encoded, never upscaled.
pub fn compress_cover(bytes: &[u8], options: CoverOptions) -> Result<Vec<u8>, CoverError> {
    let mut img = image::load_from_memory(bytes)?;
    let (w, h) = (img.width(), img.height());
    if w.max(h) > options.max_edge {
        img = img.resize(options.max_edge, options.max_edge, FilterType::Lanczos3);
        log::debug!(
            "Resized cover {}x{} -> {}x{}",
            w,
            h,
            img.width(),
            img.height()
        );
    }

    let rgb = img.to_rgb8();
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, options.quality.clamp(1, 100)).encode_image(&rgb)?;
    Ok(out)
}

/// File name for a compressed cover: hex SHA-256 plus `.jpg`.
pub fn cover_file_name(jpeg: &[u8]) -> String {
    let digest = Sha256::digest(jpeg);
    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    format!("{hex}.jpg")
}

/// Compress a cover on a blocking worker and store it under `dir`.
///
/// Returns the stored file name, which items keep as their cover reference.
pub async fn store_cover(
    bytes: Vec<u8>,
    dir: PathBuf,
    options: CoverOptions,
) -> Result<String, CoverError> {
    tokio::task::spawn_blocking(move || -> Result<String, CoverError> {
        let jpeg = compress_cover(&bytes, options)?;
        let name = cover_file_name(&jpeg);
        write_blob(&dir, &name, &jpeg)?;
        log::debug!("Stored cover {} ({} bytes)", name, jpeg.len());
        Ok(name)
    })
    .await?
}

/// Path of a stored cover reference.
pub fn cover_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

fn write_blob(dir: &Path, name: &str, bytes: &[u8]) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    let target = dir.join(name);
    if target.exists() {
        return Ok(());
    }
    let tmp = dir.join(format!(".{name}.tmp"));
    let result = (|| {
        let mut file = std::fs::File::create(&tmp)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        std::fs::rename(&tmp, &target)
    })();
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    result
}

#[cfg(test)]
#[path = "tests/covers_tests.rs"]
mod tests;
