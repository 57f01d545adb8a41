/// An RGB color with every channel scaled to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl NormalizedColor {
    /// Build a color, clamping each channel into [0, 1]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::new(
            rgb[0] as f32 / 255.0,
            rgb[1] as f32 / 255.0,
            rgb[2] as f32 / 255.0,
        )
    }

    /// Integer form, rounding each channel x 255 to the nearest value
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        ]
    }

    pub fn channels(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Ordered list of representative colors; position defines the swatch slot
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palette {
    colors: Vec<NormalizedColor>,
}

impl Palette {
    pub fn new(colors: Vec<NormalizedColor>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NormalizedColor> {
        self.colors.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NormalizedColor> {
        self.colors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb8_conversion_rounds() {
        let color = NormalizedColor::new(1.0, 0.0, 128.0 / 255.0);
        assert_eq!(color.to_rgb8(), [255, 0, 128]);

        // 0.5 * 255 = 127.5 rounds away from zero
        assert_eq!(NormalizedColor::new(0.5, 0.5, 0.5).to_rgb8(), [128, 128, 128]);
        assert_eq!(NormalizedColor::from_rgb8([12, 34, 56]).to_rgb8(), [12, 34, 56]);
    }

    #[test]
    fn test_new_clamps_channels() {
        let color = NormalizedColor::new(-0.1, 1.2, 0.3);
        assert_eq!(color.channels(), [0.0, 1.0, 0.3]);
    }
}
