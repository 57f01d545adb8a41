pub mod input_form;
pub mod keyboard;
pub mod layout;
pub mod toast;
pub mod viewer;

pub use input_form::{render_input_form, FormAction};
pub use keyboard::{read_shortcut, Shortcut};
pub use toast::render_toast_notification;
pub use viewer::{render_viewer, ViewerAction};
