use eframe::egui::{self, Pos2, Rect, Vec2};

use crate::core::interaction::{ClickButton, ClickEvent, Pane};

/// Height reserved above each pane for its title
pub const TITLE_HEIGHT: f32 = 24.0;
/// Gap between the image pane and the palette pane
pub const PANE_SPACING: f32 = 12.0;

/// Scale that fits `img_size` inside `available_size` while keeping the aspect ratio
pub fn fit_scale(img_size: Vec2, available_size: Vec2) -> f32 {
    if img_size.x <= 0.0 || img_size.y <= 0.0 {
        return 0.0;
    }
    (available_size.x / img_size.x)
        .min(available_size.y / img_size.y)
        .max(0.0)
}

/// Texture size for a `width x height` image whose longer side may not exceed `max_side`
///
/// Only the displayed copy is shrunk; clicks still map to original pixels.
pub fn texture_size(width: u32, height: u32, max_side: usize) -> (u32, u32) {
    let max_side = max_side.max(1) as u64;
    let longest = width.max(height) as u64;
    if longest <= max_side {
        return (width, height);
    }
    let shrink = |side: u32| ((side as u64 * max_side + longest / 2) / longest).max(1) as u32;
    (shrink(width), shrink(height))
}

/// Screen placement of the image pane and the palette pane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneLayout {
    /// Where the original image is drawn
    pub image_rect: Rect,
    /// Where the swatch strip is drawn
    pub palette_rect: Rect,
    /// Source image size in pixels
    pub image_size: Vec2,
}

impl PaneLayout {
    /// Split `area` into an image column (`image_fraction` of the width) and a palette column
    pub fn compute(area: Rect, image_size: Vec2, image_fraction: f32) -> Self {
        let content = Rect::from_min_max(area.min + egui::vec2(0.0, TITLE_HEIGHT), area.max);
        let image_column_width = (content.width() - PANE_SPACING) * image_fraction.clamp(0.0, 1.0);

        let image_column = Rect::from_min_size(
            content.min,
            egui::vec2(image_column_width, content.height()),
        );
        let palette_column = Rect::from_min_max(
            egui::pos2(image_column.max.x + PANE_SPACING, content.min.y),
            content.max,
        );

        let scale = fit_scale(image_size, image_column.size());
        let image_rect = Rect::from_center_size(image_column.center(), image_size * scale);

        // Swatches share the image's vertical extent so the two panes line up
        let palette_rect = Rect::from_min_max(
            egui::pos2(palette_column.min.x, image_rect.min.y),
            egui::pos2(palette_column.max.x, image_rect.max.y),
        );

        Self {
            image_rect,
            palette_rect,
            image_size,
        }
    }

    /// Pane under `pos` and the pane-local coordinates of that point
    ///
    /// Image coordinates are source pixels, palette coordinates are relative (0..1).
    pub fn locate(&self, pos: Pos2) -> Option<(Pane, f64, f64)> {
        if self.image_rect.contains(pos) && self.image_rect.area() > 0.0 {
            let rel = (pos - self.image_rect.min) / self.image_rect.size();
            Some((
                Pane::Image,
                (rel.x * self.image_size.x) as f64,
                (rel.y * self.image_size.y) as f64,
            ))
        } else if self.palette_rect.contains(pos) && self.palette_rect.area() > 0.0 {
            let rel = (pos - self.palette_rect.min) / self.palette_rect.size();
            Some((Pane::Palette, rel.x as f64, rel.y as f64))
        } else {
            None
        }
    }

    pub fn click_event(&self, pos: Pos2, button: ClickButton) -> ClickEvent {
        match self.locate(pos) {
            Some((pane, x, y)) => ClickEvent {
                pane: Some(pane),
                x,
                y,
                button,
            },
            None => ClickEvent {
                pane: None,
                x: pos.x as f64,
                y: pos.y as f64,
                button,
            },
        }
    }

    /// Rectangle of swatch `index` out of `count`
    pub fn swatch_rect(&self, index: usize, count: usize) -> Rect {
        let width = self.palette_rect.width() / count.max(1) as f32;
        Rect::from_min_size(
            egui::pos2(self.palette_rect.min.x + width * index as f32, self.palette_rect.min.y),
            egui::vec2(width, self.palette_rect.height()),
        )
    }
}
