mod app_state;
mod settings;

pub use app_state::{FormState, Screen, ToastState, ViewerState};
pub use settings::Settings;
