use eframe::egui;
use tracing::info;

mod app;
mod config;
mod core;
mod logging;
mod state;
mod ui;

use app::ColorCatcherApp;
use config::AppConfig;
use state::Settings;

fn main() -> Result<(), eframe::Error> {
    logging::setup_logging();

    let config = AppConfig::default();
    let settings = Settings::load();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([480.0, 320.0])
            .with_title("Color Catcher"),
        ..Default::default()
    };

    info!("Launching application window");
    eframe::run_native(
        "Color Catcher",
        options,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(ColorCatcherApp::new(config, settings)))
        }),
    )
}
