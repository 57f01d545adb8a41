use kmeans_colors::{get_kmeans, Kmeans};
use palette::Srgb;
use std::collections::HashSet;
use tracing::{debug, info};

use crate::core::color::{NormalizedColor, Palette};
use crate::core::error::PaletteExtractionError;

/// Cluster indices are stored as `u8` by the k-means implementation
pub const MAX_COLORS: usize = u8::MAX as usize;

/// Tuning for the k-means restarts
#[derive(Debug, Clone)]
pub struct KMeansOptions {
    /// Independent restarts; the run with the lowest score is kept
    pub runs: usize,
    pub max_iter: usize,
    /// Score delta below which a run is considered converged (RGB in [0, 1])
    pub converge: f32,
    /// Fixed base seed, or `None` for a fresh random seed per extraction
    pub seed: Option<u64>,
}

impl Default for KMeansOptions {
    fn default() -> Self {
        Self {
            runs: 10,
            max_iter: 300,
            converge: 0.0025,
            seed: None,
        }
    }
}

/// Cluster `samples` into `num_colors` centroids and return them as a normalized palette
///
/// The palette always has exactly `num_colors` entries. Asking for more colors
/// than there are distinct samples is an error rather than a shorter palette.
pub fn extract_palette(
    samples: &[[u8; 3]],
    num_colors: usize,
    options: &KMeansOptions,
) -> Result<Palette, PaletteExtractionError> {
    if num_colors == 0 {
        return Err(PaletteExtractionError::ZeroColors);
    }
    if num_colors > MAX_COLORS {
        return Err(PaletteExtractionError::TooManyClusters {
            requested: num_colors,
            max: MAX_COLORS,
        });
    }
    if samples.is_empty() {
        return Err(PaletteExtractionError::NoSamples);
    }

    let distinct = samples.iter().collect::<HashSet<_>>().len();
    if num_colors > distinct {
        return Err(PaletteExtractionError::TooManyColors {
            requested: num_colors,
            distinct,
        });
    }

    let buf: Vec<Srgb> = samples
        .iter()
        .map(|[r, g, b]| Srgb::new(*r as f32 / 255.0, *g as f32 / 255.0, *b as f32 / 255.0))
        .collect();

    let base_seed = options.seed.unwrap_or_else(rand::random);
    info!(
        "Clustering {} samples ({} distinct) into {} colors, {} runs",
        buf.len(),
        distinct,
        num_colors,
        options.runs
    );

    let mut best: Kmeans<Srgb> = Kmeans::new();
    for run in 0..options.runs.max(1) {
        let seed = base_seed.wrapping_add(run as u64);
        let result = get_kmeans(
            num_colors,
            options.max_iter,
            options.converge,
            false,
            &buf,
            seed,
        );
        debug!("k-means run {} (seed {}): score {}", run, seed, result.score);
        if result.score < best.score {
            best = result;
        }
    }

    if best.centroids.len() != num_colors {
        return Err(PaletteExtractionError::WrongCentroidCount {
            expected: num_colors,
            got: best.centroids.len(),
        });
    }

    debug!("Best score: {}", best.score);
    Ok(Palette::new(
        best.centroids
            .iter()
            .map(|c| NormalizedColor::new(c.red, c.green, c.blue))
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> KMeansOptions {
        KMeansOptions {
            seed: Some(42),
            ..KMeansOptions::default()
        }
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_solid_red_single_color() {
        let samples = vec![[255, 0, 0]; 100];
        let palette = extract_palette(&samples, 1, &seeded()).unwrap();

        assert_eq!(palette.len(), 1);
        let color = palette.get(0).unwrap();
        assert!(close(color.r, 1.0));
        assert!(close(color.g, 0.0));
        assert!(close(color.b, 0.0));
    }

    #[test]
    fn test_two_flat_regions_give_both_colors() {
        let mut samples = vec![[0, 0, 255]; 50];
        samples.extend(vec![[255, 255, 0]; 50]);

        let palette = extract_palette(&samples, 2, &seeded()).unwrap();
        let mut rgb: Vec<[u8; 3]> = palette.iter().map(|c| c.to_rgb8()).collect();
        rgb.sort();
        assert_eq!(rgb, vec![[0, 0, 255], [255, 255, 0]]);
    }

    #[test]
    fn test_palette_size_and_range() {
        let samples: Vec<[u8; 3]> = (0..900u32)
            .map(|i| [(i % 256) as u8, (i * 7 % 256) as u8, (i * 13 % 256) as u8])
            .collect();

        for n in [1, 3, 7, 20] {
            let palette = extract_palette(&samples, n, &seeded()).unwrap();
            assert_eq!(palette.len(), n);
            for color in palette.iter() {
                for channel in color.channels() {
                    assert!((0.0..=1.0).contains(&channel));
                }
            }
        }
    }

    #[test]
    fn test_fixed_seed_is_repeatable() {
        let samples: Vec<[u8; 3]> = (0..300u32)
            .map(|i| [(i % 200) as u8, (i * 3 % 256) as u8, 40])
            .collect();
        let first = extract_palette(&samples, 4, &seeded()).unwrap();
        let second = extract_palette(&samples, 4, &seeded()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_more_colors_than_distinct_samples() {
        let samples = vec![[1, 2, 3], [4, 5, 6], [1, 2, 3]];
        assert_eq!(
            extract_palette(&samples, 3, &seeded()),
            Err(PaletteExtractionError::TooManyColors {
                requested: 3,
                distinct: 2
            })
        );
    }

    #[test]
    fn test_invalid_parameters() {
        let samples = vec![[9, 9, 9]];
        assert_eq!(
            extract_palette(&samples, 0, &seeded()),
            Err(PaletteExtractionError::ZeroColors)
        );
        assert_eq!(
            extract_palette(&[], 1, &seeded()),
            Err(PaletteExtractionError::NoSamples)
        );
        assert_eq!(
            extract_palette(&samples, 300, &seeded()),
            Err(PaletteExtractionError::TooManyClusters {
                requested: 300,
                max: MAX_COLORS
            })
        );
    }
}
