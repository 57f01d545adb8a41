use eframe::egui;

/// Keys that act regardless of which screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Escape: leave the viewer, or quit from the input form
    Back,
}

/// Read this frame's shortcut, if any
pub fn read_shortcut(ctx: &egui::Context) -> Option<Shortcut> {
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        return Some(Shortcut::Back);
    }
    None
}
