use image::RgbImage;

use crate::core::color::{NormalizedColor, Palette};

/// Display region a click landed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Image,
    Palette,
}

/// Mouse button, reduced to the three behaviors the copy action distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickButton {
    Primary,
    Secondary,
    Other,
}

/// A single pointer press, already converted to pane coordinates
///
/// For [`Pane::Image`], `x`/`y` are source pixel coordinates where pixel `i`
/// covers `[i, i + 1)`. For [`Pane::Palette`], `x` is the relative horizontal
/// position (0 = left edge, 1 = right edge) and `y` is unused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    pub pane: Option<Pane>,
    pub x: f64,
    pub y: f64,
    pub button: ClickButton,
}

/// Immutable view of the current iteration handed to the click handler
#[derive(Clone, Copy)]
pub struct ClickContext<'a> {
    pub original: &'a RgbImage,
    pub palette: &'a Palette,
}

/// The color under a click in both representations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickedColor {
    pub normalized: NormalizedColor,
    pub rgb: [u8; 3],
}

/// Swatch index for a relative position across a palette of `count` entries
pub fn palette_index(rel_x: f64, count: usize) -> Option<usize> {
    let index = (rel_x * count as f64).floor();
    if index >= 0.0 && index < count as f64 {
        Some(index as usize)
    } else {
        None
    }
}

/// Map a click to the color it selects, or `None` when the click is ignored
pub fn resolve_click(ctx: &ClickContext<'_>, event: &ClickEvent) -> Option<PickedColor> {
    match event.pane? {
        Pane::Image => {
            if event.x < 0.0 || event.y < 0.0 {
                return None;
            }
            let (x, y) = (event.x as u32, event.y as u32);
            if x >= ctx.original.width() || y >= ctx.original.height() {
                return None;
            }
            let rgb = ctx.original.get_pixel(x, y).0;
            Some(PickedColor {
                normalized: NormalizedColor::from_rgb8(rgb),
                rgb,
            })
        }
        Pane::Palette => {
            let normalized = ctx.palette.get(palette_index(event.x, ctx.palette.len())?)?;
            Some(PickedColor {
                normalized,
                rgb: normalized.to_rgb8(),
            })
        }
    }
}

/// Text copied for `button`: normalized decimals, hex, or integer triple
pub fn format_color(color: &PickedColor, button: ClickButton) -> String {
    let [r, g, b] = color.rgb;
    match button {
        ClickButton::Primary => {
            let n = color.normalized;
            format!("{:.2}, {:.2}, {:.2}", n.r, n.g, n.b)
        }
        ClickButton::Secondary => format!("#{:02x}{:02x}{:02x}", r, g, b),
        ClickButton::Other => format!("{}, {}, {}", r, g, b),
    }
}

/// Resolve and format a click in one step
pub fn handle_click(ctx: &ClickContext<'_>, event: &ClickEvent) -> Option<String> {
    resolve_click(ctx, event).map(|color| format_color(&color, event.button))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn five_color_palette() -> Palette {
        Palette::new(vec![
            NormalizedColor::new(1.0, 0.0, 0.0),
            NormalizedColor::new(0.0, 1.0, 0.0),
            NormalizedColor::new(0.0, 0.0, 1.0),
            NormalizedColor::new(1.0, 1.0, 1.0),
            NormalizedColor::new(0.0, 0.0, 0.0),
        ])
    }

    fn palette_click(x: f64, button: ClickButton) -> ClickEvent {
        ClickEvent {
            pane: Some(Pane::Palette),
            x,
            y: 0.5,
            button,
        }
    }

    #[test]
    fn test_palette_index_mapping() {
        assert_eq!(palette_index(0.0, 5), Some(0));
        assert_eq!(palette_index(0.199, 5), Some(0));
        assert_eq!(palette_index(0.2, 5), Some(1));
        assert_eq!(palette_index(0.999, 5), Some(4));
        assert_eq!(palette_index(1.0, 5), None);
        assert_eq!(palette_index(-0.01, 5), None);
        assert_eq!(palette_index(0.5, 0), None);
    }

    #[test]
    fn test_hex_format() {
        let color = PickedColor {
            normalized: NormalizedColor::new(1.0, 0.0, 0.501_960_8),
            rgb: NormalizedColor::new(1.0, 0.0, 0.501_960_8).to_rgb8(),
        };
        assert_eq!(format_color(&color, ClickButton::Secondary), "#ff0080");
        assert_eq!(format_color(&color, ClickButton::Primary), "1.00, 0.00, 0.50");
        assert_eq!(format_color(&color, ClickButton::Other), "255, 0, 128");
    }

    #[test]
    fn test_palette_click_formats() {
        let original = RgbImage::new(4, 4);
        let palette = Palette::new(vec![
            NormalizedColor::new(1.0, 0.0, 0.501_960_8),
            NormalizedColor::new(0.2, 0.4, 0.6),
        ]);
        let ctx = ClickContext {
            original: &original,
            palette: &palette,
        };

        assert_eq!(
            handle_click(&ctx, &palette_click(0.1, ClickButton::Secondary)).as_deref(),
            Some("#ff0080")
        );
        assert_eq!(
            handle_click(&ctx, &palette_click(0.75, ClickButton::Primary)).as_deref(),
            Some("0.20, 0.40, 0.60")
        );
        assert_eq!(
            handle_click(&ctx, &palette_click(0.75, ClickButton::Other)).as_deref(),
            Some("51, 102, 153")
        );
        assert_eq!(handle_click(&ctx, &palette_click(1.0, ClickButton::Primary)), None);
    }

    #[test]
    fn test_image_click_uses_original_pixels() {
        let mut original = RgbImage::from_pixel(8, 6, Rgb([0, 0, 0]));
        original.put_pixel(5, 2, Rgb([255, 0, 128]));
        let palette = five_color_palette();
        let ctx = ClickContext {
            original: &original,
            palette: &palette,
        };

        let event = ClickEvent {
            pane: Some(Pane::Image),
            x: 5.7,
            y: 2.2,
            button: ClickButton::Secondary,
        };
        assert_eq!(handle_click(&ctx, &event).as_deref(), Some("#ff0080"));

        let primary = ClickEvent {
            button: ClickButton::Primary,
            ..event
        };
        assert_eq!(handle_click(&ctx, &primary).as_deref(), Some("1.00, 0.00, 0.50"));
    }

    #[test]
    fn test_ignored_clicks() {
        let original = RgbImage::new(8, 6);
        let palette = five_color_palette();
        let ctx = ClickContext {
            original: &original,
            palette: &palette,
        };

        let outside = ClickEvent {
            pane: None,
            x: 1.0,
            y: 1.0,
            button: ClickButton::Primary,
        };
        assert_eq!(handle_click(&ctx, &outside), None);

        let past_edge = ClickEvent {
            pane: Some(Pane::Image),
            x: 8.0,
            y: 1.0,
            button: ClickButton::Primary,
        };
        assert_eq!(handle_click(&ctx, &past_edge), None);
    }

    #[test]
    fn test_repeated_click_is_stable() {
        let original = RgbImage::from_pixel(3, 3, Rgb([10, 200, 30]));
        let palette = five_color_palette();
        let ctx = ClickContext {
            original: &original,
            palette: &palette,
        };

        for event in [
            palette_click(0.45, ClickButton::Primary),
            ClickEvent {
                pane: Some(Pane::Image),
                x: 1.5,
                y: 2.5,
                button: ClickButton::Other,
            },
        ] {
            let first = handle_click(&ctx, &event);
            assert!(first.is_some());
            assert_eq!(first, handle_click(&ctx, &event));
        }
    }
}
