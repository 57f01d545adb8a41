use std::path::Path;
use tracing::info;

use crate::core::color::Palette;
use crate::core::error::PipelineError;
use crate::core::extractor::{extract_palette, KMeansOptions};
use crate::core::loader::{flatten_pixels, load_and_resize, LoadedImage};

/// Load `path` and extract `num_colors` palette entries from its resized copy
///
/// Either both the image and a full palette come back, or nothing does.
pub fn process_image(
    path: &Path,
    num_colors: usize,
    display_width: u32,
    kmeans: &KMeansOptions,
) -> Result<(LoadedImage, Palette), PipelineError> {
    let image = load_and_resize(path, display_width)?;
    let samples = flatten_pixels(&image.resized);
    let palette = extract_palette(&samples, num_colors, kmeans)?;
    info!(
        "Extracted {} colors from {:?}",
        palette.len(),
        image.path
    );
    Ok((image, palette))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{ImageLoadError, PaletteExtractionError};
    use image::{Rgb, RgbImage};

    fn options() -> KMeansOptions {
        KMeansOptions {
            seed: Some(7),
            runs: 3,
            ..KMeansOptions::default()
        }
    }

    #[test]
    fn test_solid_red_image_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        RgbImage::from_pixel(10, 10, Rgb([255, 0, 0])).save(&path).unwrap();

        let (image, palette) = process_image(&path, 1, 300, &options()).unwrap();
        assert_eq!(image.resized.width(), 300);
        assert_eq!(palette.len(), 1);
        let color = palette.get(0).unwrap();
        assert!((color.r - 1.0).abs() < 0.01);
        assert!(color.g.abs() < 0.01);
        assert!(color.b.abs() < 0.01);
    }

    #[test]
    fn test_flat_image_rejects_extra_colors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.png");
        RgbImage::from_pixel(10, 10, Rgb([0, 128, 0])).save(&path).unwrap();

        assert!(matches!(
            process_image(&path, 3, 300, &options()),
            Err(PipelineError::Extract(PaletteExtractionError::TooManyColors {
                requested: 3,
                distinct: 1
            }))
        ));
    }

    #[test]
    fn test_missing_image_stops_before_clustering() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            process_image(&dir.path().join("missing.jpg"), 3, 300, &options()),
            Err(PipelineError::Load(ImageLoadError::NotFound(_)))
        ));
    }
}
