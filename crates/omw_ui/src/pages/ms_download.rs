//! Download Results page: copy outputs out of the workspace.

use std::fs;

use eframe::egui::{self, Color32, RichText};

use omw_core::session::SessionContext;

use super::state::DownloadState;

pub fn show(ui: &mut egui::Ui, state: &mut DownloadState, session: &SessionContext) {
    ui.heading("⬇️ Download Results");
    ui.add_space(8.0);

    let workspace = match session.workspace() {
        Some(workspace) => workspace,
        None => {
            ui.colored_label(Color32::RED, "No workspace available for this session.");
            return;
        }
    };

    if ui.button("Open results folder").clicked() {
        if let Err(err) = open::that(workspace.results_dir()) {
            tracing::warn!("Could not open results folder: {err}");
        }
    }

    if let Some(notice) = &state.notice {
        ui.label(RichText::new(notice).weak());
    }
    if let Some(error) = &state.error {
        ui.colored_label(Color32::RED, error);
    }

    ui.add_space(10.0);

    let files = match workspace.result_files() {
        Ok(files) => files,
        Err(err) => {
            ui.colored_label(Color32::RED, format!("Could not list results: {err}"));
            return;
        }
    };

    if files.is_empty() {
        ui.label(RichText::new("No results to download yet.").weak());
        return;
    }

    for file in &files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| file.display().to_string());
        ui.horizontal(|ui| {
            ui.monospace(&name);
            if ui.small_button("Save a copy...").clicked() {
                state.notice = None;
                state.error = None;
                if let Some(target) = rfd::FileDialog::new()
                    .set_title("Save result")
                    .set_file_name(&name)
                    .save_file()
                {
                    match fs::copy(file, &target) {
                        Ok(_) => {
                            state.notice = Some(format!("Saved to {}", target.display()));
                        }
                        Err(err) => {
                            state.error = Some(format!("Could not save {name}: {err}"));
                        }
                    }
                }
            }
        });
    }
}
