//! Sidebar rendering of the navigation map.

use eframe::egui::{self, RichText};

use omw_core::navigation::{NavSection, PageId};

/// Render the navigation sidebar and update the active page on click.
pub fn show(ctx: &egui::Context, sections: &[NavSection], active: &mut PageId) {
    egui::SidePanel::left("navigation")
        .resizable(false)
        .exact_width(230.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink(false)
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    for (idx, section) in sections.iter().enumerate() {
                        if idx > 0 {
                            ui.add_space(12.0);
                        }
                        ui.label(RichText::new(&section.label).strong().size(13.0));
                        ui.add_space(2.0);

                        for page in &section.pages {
                            let selected = *active == page.id;
                            let label = format!("{} {}", page.icon, page.title);
                            if ui.selectable_label(selected, label).clicked() {
                                *active = page.id;
                            }
                        }
                    }
                });
        });
}
