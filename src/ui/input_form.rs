use eframe::egui::{self, Color32};
use egui_phosphor::regular as Icon;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::AppConfig;
use crate::state::FormState;

pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpeg", "jpg", "png", "bmp", "gif"];
pub const EMPTY_PATH_MESSAGE: &str = "Please select an image or enter a path.";

/// What the input form asks the app to do after a frame
pub enum FormAction {
    None,
    Process { num_colors: usize, path: PathBuf },
    Quit,
}

/// Validate the form on Process; an empty path only produces the info message
pub fn submit(form: &mut FormState) -> FormAction {
    form.clear_messages();
    let path = form.image_path.trim();
    if path.is_empty() {
        form.info_message = Some(EMPTY_PATH_MESSAGE.to_string());
        return FormAction::None;
    }
    FormAction::Process {
        num_colors: form.num_colors,
        path: PathBuf::from(path),
    }
}

fn pick_image(start_dir: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Select image")
        .add_filter("Image Files", &IMAGE_EXTENSIONS)
        .add_filter("All Files", &["*"]);
    if let Some(dir) = start_dir.filter(|dir| dir.is_dir()) {
        dialog = dialog.set_directory(dir);
    }
    dialog.pick_file()
}

/// Render the settings form: color count, image path, Process
pub fn render_input_form(
    form: &mut FormState,
    config: &AppConfig,
    last_dir: Option<&Path>,
    ctx: &egui::Context,
) -> FormAction {
    let mut action = FormAction::None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(format!("{} Image and Palette Settings", Icon::PALETTE));
            ui.add_space(20.0);

            ui.label("Number of colors in the palette:");
            ui.add(
                egui::DragValue::new(&mut form.num_colors)
                    .range(config.num_colors_range.clone())
                    .speed(0.1),
            );
            ui.add_space(10.0);

            ui.label("Image path:");
            ui.horizontal(|ui| {
                // Center the row manually; vertical_centered doesn't reach into horizontal layouts
                let row_width = 360.0;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

                let response = ui.add(
                    egui::TextEdit::singleline(&mut form.image_path).desired_width(row_width - 40.0),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    action = submit(form);
                }

                if ui.button("...").on_hover_text("Browse for an image").clicked() {
                    if let Some(path) = pick_image(last_dir) {
                        info!("Selected image: {:?}", path);
                        form.image_path = path.display().to_string();
                    }
                }
            });
            ui.add_space(15.0);

            ui.horizontal(|ui| {
                ui.add_space(((ui.available_width() - 180.0) / 2.0).max(0.0));
                if ui.button(format!("{} Process", Icon::PLAY)).clicked() {
                    action = submit(form);
                }
                if ui.button(format!("{} Quit", Icon::X)).clicked() {
                    action = FormAction::Quit;
                }
            });
            ui.add_space(15.0);

            if let Some(message) = &form.info_message {
                ui.label(
                    egui::RichText::new(format!("{} {}", Icon::INFO, message))
                        .color(Color32::from_rgb(100, 149, 237)),
                );
            }
            if let Some(error) = &form.error {
                ui.label(
                    egui::RichText::new(format!("{} {}", Icon::WARNING, error))
                        .color(Color32::from_rgb(220, 80, 80)),
                );
            }
        });
    });

    action
}
