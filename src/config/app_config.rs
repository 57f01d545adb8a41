use std::ops::RangeInclusive;

use crate::core::extractor::KMeansOptions;

/// Cluster count used when `config.ini` doesn't provide one
pub const FALLBACK_NUM_COLORS: usize = 7;

/// Application configuration containing all hardcoded values
///
/// Values that the user may override at runtime live in
/// [`crate::state::Settings`] or `config.ini` instead.
#[derive(Clone)]
pub struct AppConfig {
    /// Width of the downsized copy fed to clustering
    pub display_width: u32,
    pub num_colors_range: RangeInclusive<usize>,
    /// Fraction of the viewer width given to the image pane
    pub image_pane_fraction: f32,
    pub toast_seconds: f64,
    pub kmeans: KMeansOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display_width: 300,
            num_colors_range: 1..=20,
            image_pane_fraction: 0.75,
            toast_seconds: 2.0,
            kmeans: KMeansOptions::default(),
        }
    }
}

impl AppConfig {
    /// Clamp a requested color count into the range the input form offers
    pub fn clamp_num_colors(&self, n: usize) -> usize {
        n.clamp(*self.num_colors_range.start(), *self.num_colors_range.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_num_colors() {
        let config = AppConfig::default();
        assert_eq!(config.clamp_num_colors(0), 1);
        assert_eq!(config.clamp_num_colors(7), 7);
        assert_eq!(config.clamp_num_colors(64), 20);
    }
}
