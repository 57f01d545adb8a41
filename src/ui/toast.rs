use eframe::egui;
use egui_phosphor::regular as Icon;
use std::time::Duration;

use crate::state::ToastState;

/// Render the "copied" notification in the bottom-left corner until it expires
pub fn render_toast_notification(toast: &mut ToastState, duration: f64, ctx: &egui::Context) {
    let now = ctx.input(|i| i.time);
    let Some(message) = toast.active(now, duration) else {
        return;
    };
    let message = message.to_string();

    egui::Window::new("copy_toast")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .fixed_pos(egui::pos2(20.0, ctx.screen_rect().height() - 80.0))
        .show(ctx, |ui| {
            let frame = egui::Frame::none()
                .fill(egui::Color32::from_rgb(45, 45, 48))
                .stroke(egui::Stroke::new(
                    1.0,
                    egui::Color32::from_rgb(100, 100, 100),
                ))
                .rounding(6.0)
                .inner_margin(10.0);

            frame.show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(Icon::COPY).size(18.0));
                    ui.label(
                        egui::RichText::new(format!("Copied to clipboard: {}", message))
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                });
            });
        });

    // Wake up again so the toast disappears without further input
    ctx.request_repaint_after(Duration::from_secs_f64(duration));
}
