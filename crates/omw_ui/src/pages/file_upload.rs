//! File upload page, shared by the TOPP and pyOpenMS sections.

use eframe::egui::{self, Color32, RichText};

use omw_core::session::SessionContext;

use super::state::UploadState;

pub fn show(ui: &mut egui::Ui, hint: &str, state: &mut UploadState, session: &SessionContext) {
    ui.heading("📁 File Upload");
    ui.label(hint);
    ui.add_space(8.0);

    let workspace = match session.workspace() {
        Some(workspace) => workspace,
        None => {
            ui.colored_label(Color32::RED, "No workspace available for this session.");
            return;
        }
    };

    if ui.button("Add files...").clicked() {
        state.error = None;
        if let Some(paths) = rfd::FileDialog::new()
            .set_title("Select input files")
            .pick_files()
        {
            for path in paths {
                if let Err(err) = workspace.add_upload(&path) {
                    state.error = Some(format!("Could not add {}: {err}", path.display()));
                }
            }
        }
    }

    if let Some(error) = &state.error {
        ui.colored_label(Color32::RED, error);
    }

    ui.add_space(10.0);
    ui.separator();

    let files = match workspace.uploaded_files() {
        Ok(files) => files,
        Err(err) => {
            ui.colored_label(Color32::RED, format!("Could not list uploads: {err}"));
            return;
        }
    };

    if files.is_empty() {
        ui.label(RichText::new("No files uploaded yet.").weak());
        return;
    }

    ui.label(format!("{} uploaded file(s):", files.len()));
    ui.add_space(4.0);

    let mut to_remove = None;
    for file in &files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| file.display().to_string());
        ui.horizontal(|ui| {
            ui.monospace(&name);
            if ui.small_button("Remove").clicked() {
                to_remove = Some(file.clone());
            }
        });
    }

    if let Some(file) = to_remove {
        if let Err(err) = workspace.remove_upload(&file) {
            state.error = Some(format!("Could not remove {}: {err}", file.display()));
        }
    }
}
