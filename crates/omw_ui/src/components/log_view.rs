//! Scrollable monospace log output shared by the run pages.

use eframe::egui::{self, RichText};

/// Render a log buffer, keeping the newest lines in view.
pub fn show(ui: &mut egui::Ui, log: &str) {
    egui::ScrollArea::vertical()
        .auto_shrink(false)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            let text = if log.is_empty() { "(no output yet)" } else { log };
            ui.add(egui::Label::new(RichText::new(text).monospace().size(12.0)).wrap());
        });
}
