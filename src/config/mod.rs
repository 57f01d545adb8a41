mod app_config;
mod ini_file;

pub use app_config::AppConfig;
pub use ini_file::{config_path, default_num_colors};
