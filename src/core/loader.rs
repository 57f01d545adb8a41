use image::imageops::{self, FilterType};
use image::RgbImage;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::error::ImageLoadError;

/// An image opened for one processing iteration
///
/// `original` is what the viewer displays and what image-pane clicks sample;
/// `resized` only bounds the cost of clustering.
pub struct LoadedImage {
    pub path: PathBuf,
    pub original: RgbImage,
    pub resized: RgbImage,
}

/// Height that keeps the aspect ratio of a `width x height` image scaled to `target_width`
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    let ratio = target_width as f64 / width as f64;
    ((height as f64 * ratio).round() as u32).max(1)
}

/// Open `path` and produce the full-resolution copy plus a Lanczos-resized copy
/// exactly `target_width` pixels wide
pub fn load_and_resize(path: &Path, target_width: u32) -> Result<LoadedImage, ImageLoadError> {
    if target_width == 0 {
        return Err(ImageLoadError::InvalidWidth);
    }
    if !path.is_file() {
        return Err(ImageLoadError::NotFound(path.to_path_buf()));
    }

    info!("Opening image: {:?}", path);
    let original = image::open(path)
        .map_err(|source| ImageLoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();

    ensure_has_pixels(path, &original)?;
    let (width, height) = original.dimensions();

    let target_height = scaled_height(width, height, target_width);
    debug!(
        "Resizing {}x{} -> {}x{} for clustering",
        width, height, target_width, target_height
    );
    let resized = imageops::resize(&original, target_width, target_height, FilterType::Lanczos3);

    Ok(LoadedImage {
        path: path.to_path_buf(),
        original,
        resized,
    })
}

/// Reject decoded images with a zero-length side
fn ensure_has_pixels(path: &Path, img: &RgbImage) -> Result<(), ImageLoadError> {
    if img.width() == 0 || img.height() == 0 {
        return Err(ImageLoadError::Empty(path.to_path_buf()));
    }
    Ok(())
}

/// Row-major list of the RGB triples in `img`
pub fn flatten_pixels(img: &RgbImage) -> Vec<[u8; 3]> {
    img.pixels().map(|p| p.0).collect()
}
