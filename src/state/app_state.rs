use egui::TextureHandle;

use crate::core::color::Palette;
use crate::core::interaction::ClickContext;
use crate::core::loader::LoadedImage;

/// Which step of the iteration is on screen
pub enum Screen {
    /// Collecting the cluster count and image path
    Input,
    /// Showing the image and its palette for one iteration
    Viewer(Box<ViewerState>),
}

/// Input form fields plus any message from the last attempt
pub struct FormState {
    pub num_colors: usize,
    pub image_path: String,
    /// Informational prompt, e.g. when Process is pressed without a path
    pub info_message: Option<String>,
    /// Error from the last load/extract attempt
    pub error: Option<String>,
}

impl FormState {
    pub fn new(num_colors: usize) -> Self {
        Self {
            num_colors,
            image_path: String::new(),
            info_message: None,
            error: None,
        }
    }

    pub fn clear_messages(&mut self) {
        self.info_message = None;
        self.error = None;
    }
}

/// Everything one processing iteration produced; dropped when the viewer closes
pub struct ViewerState {
    pub image: LoadedImage,
    pub palette: Palette,
    /// Lazily uploaded copy of `image.original`
    pub texture: Option<TextureHandle>,
}

impl ViewerState {
    pub fn new(image: LoadedImage, palette: Palette) -> Self {
        Self {
            image,
            palette,
            texture: None,
        }
    }

    pub fn click_context(&self) -> ClickContext<'_> {
        ClickContext {
            original: &self.image.original,
            palette: &self.palette,
        }
    }
}

/// Short-lived "Copied ..." notification
#[derive(Default)]
pub struct ToastState {
    pub message: Option<String>,
    /// `egui` input time at which the message was set
    pub shown_at: f64,
}

impl ToastState {
    pub fn show(&mut self, message: String, now: f64) {
        self.message = Some(message);
        self.shown_at = now;
    }

    /// Current message, expiring it once `duration` seconds have passed
    pub fn active(&mut self, now: f64, duration: f64) -> Option<&str> {
        if now - self.shown_at > duration {
            self.message = None;
        }
        self.message.as_deref()
    }
}
