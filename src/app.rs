use eframe::egui;
use std::path::PathBuf;
use tracing::{error, info};

use crate::config::{config_path, default_num_colors, AppConfig};
use crate::core::pipeline::process_image;
use crate::state::{FormState, Screen, Settings, ToastState, ViewerState};
use crate::ui::{self, FormAction, Shortcut, ViewerAction};

/// Form default: the count used last time, else the `config.ini` value
fn initial_num_colors(settings: &Settings, from_config: impl FnOnce() -> usize) -> usize {
    match settings.last_num_colors {
        Some(n) => {
            info!("Using last color count: {}", n);
            n
        }
        None => from_config(),
    }
}

pub struct ColorCatcherApp {
    pub config: AppConfig,
    pub settings: Settings,
    pub screen: Screen,
    pub form: FormState,
    pub toast: ToastState,
}

impl ColorCatcherApp {
    pub fn new(config: AppConfig, settings: Settings) -> Self {
        let num_colors = config.clamp_num_colors(initial_num_colors(&settings, || {
            default_num_colors(config_path().as_deref())
        }));

        Self {
            config,
            settings,
            screen: Screen::Input,
            form: FormState::new(num_colors),
            toast: ToastState::default(),
        }
    }

    /// Run one iteration: load, cluster, and open the viewer, or report why not
    pub fn process(&mut self, num_colors: usize, path: PathBuf) {
        info!("Processing {:?} with {} colors", path, num_colors);

        match process_image(
            &path,
            num_colors,
            self.config.display_width,
            &self.config.kmeans,
        ) {
            Ok((image, palette)) => {
                self.settings.remember_image(&path, num_colors);
                self.settings.save();
                self.form.clear_messages();
                self.screen = Screen::Viewer(Box::new(ViewerState::new(image, palette)));
            }
            Err(e) => {
                error!("{}", e);
                self.form.error = Some(e.to_string());
                self.screen = Screen::Input;
            }
        }
    }

    /// Drop the current image and palette and show the input form again
    pub fn back_to_input(&mut self) {
        info!("Closing viewer");
        self.screen = Screen::Input;
        self.toast = ToastState::default();
    }

    fn copy_color(&mut self, ctx: &egui::Context, color: String) {
        ctx.copy_text(color.clone());
        info!("Copied to clipboard: {}", color);
        self.toast.show(color, ctx.input(|i| i.time));
    }

    /// Ask the window to close; settings are saved once the close request arrives
    fn quit(&self, ctx: &egui::Context) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    fn track_window_size(&mut self, ctx: &egui::Context) {
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.settings.window_width = rect.width();
            self.settings.window_height = rect.height();
        }
    }
}

impl eframe::App for ColorCatcherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.track_window_size(ctx);

        if ctx.input(|i| i.viewport().close_requested()) {
            info!("No image selected or program terminated.");
            self.settings.save();
            return;
        }

        let shortcut = ui::read_shortcut(ctx);

        match &mut self.screen {
            Screen::Input => {
                if shortcut == Some(Shortcut::Back) {
                    self.quit(ctx);
                    return;
                }
                let last_dir = self.settings.last_image_dir.clone();
                match ui::render_input_form(&mut self.form, &self.config, last_dir.as_deref(), ctx)
                {
                    FormAction::Process { num_colors, path } => self.process(num_colors, path),
                    FormAction::Quit => self.quit(ctx),
                    FormAction::None => {}
                }
            }
            Screen::Viewer(viewer) => {
                if shortcut == Some(Shortcut::Back) {
                    self.back_to_input();
                    return;
                }
                match ui::render_viewer(viewer, &self.config, ctx) {
                    ViewerAction::Back => self.back_to_input(),
                    ViewerAction::Copy(color) => self.copy_color(ctx, color),
                    ViewerAction::None => {}
                }
                ui::render_toast_notification(&mut self.toast, self.config.toast_seconds, ctx);
            }
        }
    }
}
