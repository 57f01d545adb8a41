use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::formatter::BracketedFormatter;

/// `logs/color_catcher_<timestamp>.log` under `base_dir`
pub fn log_file_path(base_dir: &Path, timestamp: &chrono::DateTime<chrono::Local>) -> PathBuf {
    base_dir
        .join("logs")
        .join(format!("color_catcher_{}.log", timestamp.format("%Y%m%d_%H%M%S")))
}

fn create_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

/// Install the global subscriber: stdout always, plus a timestamped log file when one can be created
///
/// Returns the log file path, if any.
pub fn setup_logging() -> Option<PathBuf> {
    let log_path = std::env::current_dir()
        .ok()
        .map(|dir| log_file_path(&dir, &chrono::Local::now()));

    let mut open_error = None;
    let file = log_path
        .as_deref()
        .and_then(|path| create_log_file(path).map_err(|e| open_error = Some(e)).ok());
    let log_path = if file.is_some() { log_path } else { None };

    let file_layer = file.map(|file| {
        fmt::layer()
            .event_format(BracketedFormatter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
    });

    let stdout_layer = fmt::layer()
        .event_format(BracketedFormatter)
        .with_writer(io::stdout);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter()))
        .with(file_layer)
        .with(stdout_layer)
        .init();

    info!("Starting Color Catcher");
    match (&log_path, open_error) {
        (Some(path), _) => info!("Log file created at: {:?}", path),
        (None, Some(e)) => warn!("Could not create log file: {}. Logging to stdout only.", e),
        (None, None) => warn!("Could not determine working directory. Logging to stdout only."),
    }

    log_path
}

/// Trace for this crate, warn for the windowing stack
fn default_filter() -> EnvFilter {
    ["winit", "log", "egui", "eframe", "wgpu", "naga"]
        .iter()
        .filter_map(|target| format!("{}=warn", target).parse::<Directive>().ok())
        .fold(EnvFilter::new("trace"), |filter, directive| {
            filter.add_directive(directive)
        })
}
