use eframe::egui::{self, Color32, ColorImage, Rect, TextureOptions};
use egui_phosphor::regular as Icon;
use image::imageops::{self, FilterType};
use image::RgbImage;
use std::borrow::Cow;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::core::interaction::{handle_click, ClickButton};
use crate::state::ViewerState;
use crate::ui::layout::{texture_size, PaneLayout};

const BUTTONS: [egui::PointerButton; 5] = [
    egui::PointerButton::Primary,
    egui::PointerButton::Secondary,
    egui::PointerButton::Middle,
    egui::PointerButton::Extra1,
    egui::PointerButton::Extra2,
];

/// Map a toolkit button onto the three copy behaviors
pub fn click_button(button: egui::PointerButton) -> ClickButton {
    match button {
        egui::PointerButton::Primary => ClickButton::Primary,
        egui::PointerButton::Secondary => ClickButton::Secondary,
        _ => ClickButton::Other,
    }
}

/// Pixels to upload for `original`, shrunk when a side exceeds the GPU texture limit
fn display_pixels(original: &RgbImage, max_texture_side: usize) -> Cow<'_, RgbImage> {
    let (width, height) = original.dimensions();
    let (w, h) = texture_size(width, height, max_texture_side);
    if (w, h) == (width, height) {
        return Cow::Borrowed(original);
    }
    info!(
        "Image {}x{} exceeds texture limit {}, displaying at {}x{}",
        width, height, max_texture_side, w, h
    );
    Cow::Owned(imageops::resize(original, w, h, FilterType::Triangle))
}

/// What the viewer asks the app to do after a frame
pub enum ViewerAction {
    None,
    /// Leave the viewer and return to the input form
    Back,
    /// A click produced this color string
    Copy(String),
}

/// Render the top bar with the file name and the way back to the input form
pub fn render_viewer_top_panel(viewer: &ViewerState, ctx: &egui::Context) -> bool {
    let mut back = false;
    egui::TopBottomPanel::top("viewer_top_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui
                .button(format!("{} New image", Icon::ARROW_LEFT))
                .clicked()
            {
                back = true;
            }

            ui.add_space(20.0);

            let name = viewer
                .image
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let (w, h) = viewer.image.original.dimensions();
            ui.label(format!("{} {} ({}x{})", Icon::IMAGE, name, w, h));

            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("Left: 0-1 RGB | Right: HEX | Other: 0-255 RGB")
                    .small()
                    .color(Color32::GRAY),
            );
        });
    });
    back
}

/// Render the image pane and palette pane and turn clicks into color strings
pub fn render_viewer(
    viewer: &mut ViewerState,
    config: &AppConfig,
    ctx: &egui::Context,
) -> ViewerAction {
    if render_viewer_top_panel(viewer, ctx) {
        return ViewerAction::Back;
    }

    let texture = viewer
        .texture
        .get_or_insert_with(|| {
            let max_side = ctx.input(|i| i.max_texture_side);
            let img = display_pixels(&viewer.image.original, max_side);
            let size = [img.width() as usize, img.height() as usize];
            let color_image = ColorImage::from_rgb(size, img.as_raw());
            ctx.load_texture("original_image", color_image, TextureOptions::LINEAR)
        })
        .clone();
    let (width, height) = viewer.image.original.dimensions();
    let original_size = egui::vec2(width as f32, height as f32);

    let mut action = ViewerAction::None;
    egui::CentralPanel::default().show(ctx, |ui| {
        let area = ui.available_rect_before_wrap();
        let layout = PaneLayout::compute(area, original_size, config.image_pane_fraction);
        let response = ui.allocate_rect(area, egui::Sense::click());
        let painter = ui.painter_at(area);

        painter.image(
            texture.id(),
            layout.image_rect,
            Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );
        draw_title(&painter, layout.image_rect, "Original Image");

        let count = viewer.palette.len();
        for (i, color) in viewer.palette.iter().enumerate() {
            let [r, g, b] = color.to_rgb8();
            painter.rect_filled(layout.swatch_rect(i, count), 0.0, Color32::from_rgb(r, g, b));
        }
        draw_title(&painter, layout.palette_rect, "Color Palette (Normalized)");

        if let Some(pos) = response.hover_pos() {
            if layout.locate(pos).is_some() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        }

        for button in BUTTONS {
            if !response.clicked_by(button) {
                continue;
            }
            if let Some(pos) = response.interact_pointer_pos() {
                let event = layout.click_event(pos, click_button(button));
                debug!("Click {:?}", event);
                if let Some(color) = handle_click(&viewer.click_context(), &event) {
                    action = ViewerAction::Copy(color);
                }
            }
        }
    });

    action
}

fn draw_title(painter: &egui::Painter, pane: Rect, title: &str) {
    painter.text(
        egui::pos2(pane.center().x, pane.min.y - 4.0),
        egui::Align2::CENTER_BOTTOM,
        title,
        egui::FontId::proportional(15.0),
        painter.ctx().style().visuals.text_color(),
    );
}
