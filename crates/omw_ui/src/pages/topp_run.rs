//! Run page: execute the configured TOPP tool over the uploads.

use eframe::egui::{self, Color32, RichText};

use omw_core::session::SessionContext;

use super::state::PageStates;
use crate::components::log_view;
use crate::runner::{RunTarget, Runner};

pub fn show(
    ui: &mut egui::Ui,
    states: &mut PageStates,
    session: &SessionContext,
    runner: &Runner,
) {
    ui.heading("🚀 Run");
    ui.add_space(8.0);

    let workspace = match session.workspace() {
        Some(workspace) => workspace,
        None => {
            ui.colored_label(Color32::RED, "No workspace available for this session.");
            return;
        }
    };

    let uploads = workspace.uploaded_files().unwrap_or_default();
    ui.label(format!(
        "Tool '{}' over {} uploaded file(s).",
        states.configure.params.tool,
        uploads.len()
    ));

    if uploads.is_empty() {
        ui.label(RichText::new("Upload input files first.").weak());
    }

    ui.add_space(8.0);
    let can_run = !states.topp_run.running && !uploads.is_empty();
    if ui.add_enabled(can_run, egui::Button::new("Run tool")).clicked() {
        states.topp_run.begin();
        runner.spawn_workflow(
            RunTarget::Topp,
            states.configure.params.clone(),
            uploads,
            workspace.results_dir(),
        );
    }

    if states.topp_run.running {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Running...");
        });
    } else if let Some(success) = states.topp_run.outcome {
        if success {
            ui.colored_label(Color32::DARK_GREEN, "Run completed.");
        } else {
            ui.colored_label(Color32::RED, "Run failed - see the log below.");
        }
    }

    ui.add_space(8.0);
    ui.separator();
    log_view::show(ui, &states.topp_run.log);
}
