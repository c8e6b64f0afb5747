//! Documentation page: static help text and external links.

use eframe::egui::{self, RichText};

pub fn show(ui: &mut egui::Ui) {
    ui.heading("📖 Documentation");
    ui.add_space(8.0);

    ui.label(RichText::new("Workflow basics").strong());
    ui.label(
        "Every page operates on your session workspace. Uploaded files land in \
         its uploads folder; runs write into its results folder. Workspaces \
         survive restarts, so half-finished work keeps its files.",
    );
    ui.add_space(10.0);

    ui.label(RichText::new("TOPP tools").strong());
    ui.label(
        "The Run page invokes the tool named on the Configure page once per \
         uploaded file. The tool must be installed and on PATH; its output is \
         streamed into the log as it runs.",
    );
    ui.add_space(10.0);

    ui.label(RichText::new("Peak lists").strong());
    ui.label(
        "The viewer and the built-in workflows read plain-text peak lists: one \
         m/z and intensity pair per line, separated by whitespace. Lines \
         starting with # are ignored.",
    );
    ui.add_space(14.0);

    ui.label(RichText::new("Further reading").strong());
    ui.hyperlink_to("OpenMS documentation", "https://openms.readthedocs.io");
    ui.hyperlink_to("pyOpenMS documentation", "https://pyopenms.readthedocs.io");
    ui.hyperlink_to("TOPP tool reference", "https://openms.de/documentation");
}
