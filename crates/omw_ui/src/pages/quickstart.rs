//! Quickstart page: orientation for new users.

use eframe::egui::{self, RichText};

use omw_core::config::DEFAULT_APP_NAME;
use omw_core::session::SessionContext;

pub fn show(ui: &mut egui::Ui, session: &SessionContext) {
    let app_name = session
        .settings()
        .map(|s| s.app_name.clone())
        .unwrap_or_else(|_| DEFAULT_APP_NAME.to_string());

    ui.heading(format!("👋 Welcome to {app_name}"));
    ui.add_space(8.0);
    ui.label(
        "This workbench wraps mass-spectrometry command-line tools in a set of \
         workflow pages. Pick a section in the sidebar to get going.",
    );
    ui.add_space(12.0);

    ui.group(|ui| {
        ui.label(RichText::new("TOPP Workflow Framework").strong());
        ui.label("Upload input files, configure the tool parameters, run the tool, and inspect the results.");
    });
    ui.add_space(6.0);
    ui.group(|ui| {
        ui.label(RichText::new("pyOpenMS Workflow").strong());
        ui.label("Upload peak lists, view the raw data, run the built-in intensity filter, and download the outputs.");
    });
    ui.add_space(6.0);
    ui.group(|ui| {
        ui.label(RichText::new("Others Topics").strong());
        ui.label("A minimal one-page workflow and a free-form subprocess runner.");
    });

    if let Some(workspace) = session.workspace() {
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label("Your workspace:");
            ui.monospace(workspace.root().display().to_string());
        });
    }
}
