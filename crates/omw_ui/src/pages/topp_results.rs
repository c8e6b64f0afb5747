//! Results page: files produced by the TOPP tool run.

use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};

use omw_core::session::SessionContext;

pub fn show(ui: &mut egui::Ui, session: &SessionContext) {
    ui.heading("📊 Results");
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

    ui.add_space(10.0);

    let files = match workspace.result_files() {
        Ok(files) => files,
        Err(err) => {
            ui.colored_label(Color32::RED, format!("Could not list results: {err}"));
            return;
        }
    };

    if files.is_empty() {
        ui.label(RichText::new("No results yet - run the tool first.").weak());
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder())
        .column(Column::auto().at_least(80.0))
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("File");
            });
            header.col(|ui| {
                ui.strong("Size");
            });
        })
        .body(|mut body| {
            for file in &files {
                let name = file
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| file.display().to_string());
                let size = std::fs::metadata(file).map(|m| m.len()).unwrap_or(0);
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.monospace(name.clone());
                    });
                    row.col(|ui| {
                        ui.label(format_size(size));
                    });
                });
            }
        });
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    }
}
