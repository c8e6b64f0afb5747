//! Raw-data viewer: peak table and summary for an uploaded peak list.

use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};

use omw_core::session::SessionContext;
use omw_core::spectra::{self, SpectrumSummary};

use super::state::ViewerState;

/// Rows shown in the peak table before truncating.
const MAX_ROWS: usize = 500;

pub fn show(ui: &mut egui::Ui, state: &mut ViewerState, session: &SessionContext) {
    ui.heading("👀 View MS data");
    ui.add_space(8.0);

    let workspace = match session.workspace() {
        Some(workspace) => workspace,
        None => {
            ui.colored_label(Color32::RED, "No workspace available for this session.");
            return;
        }
    };

    let files = workspace.uploaded_files().unwrap_or_default();
    if files.is_empty() {
        ui.label(RichText::new("Upload a peak list first.").weak());
        return;
    }

    ui.horizontal(|ui| {
        let selected_name = state
            .selected
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Select a file".to_string());

        egui::ComboBox::from_id_salt("viewer_file")
            .selected_text(selected_name)
            .show_ui(ui, |ui| {
                for file in &files {
                    let name = file
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| file.display().to_string());
                    ui.selectable_value(&mut state.selected, Some(file.clone()), name);
                }
            });

        let can_load = state.selected.is_some();
        if ui.add_enabled(can_load, egui::Button::new("Load")).clicked() {
            if let Some(path) = state.selected.clone() {
                state.error = None;
                match spectra::read_peak_file(&path) {
                    Ok(peaks) => {
                        state.summary = SpectrumSummary::from_peaks(&peaks);
                        state.peaks = peaks;
                    }
                    Err(err) => {
                        state.error = Some(err.to_string());
                        state.peaks.clear();
                        state.summary = None;
                    }
                }
            }
        }
    });

    if let Some(error) = &state.error {
        ui.colored_label(Color32::RED, error);
    }

    if let Some(summary) = &state.summary {
        ui.add_space(10.0);
        egui::Grid::new("spectrum_summary")
            .num_columns(2)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                ui.label("Peaks:");
                ui.label(summary.peak_count.to_string());
                ui.end_row();
                ui.label("m/z range:");
                ui.label(format!("{:.4} - {:.4}", summary.min_mz, summary.max_mz));
                ui.end_row();
                ui.label("Total intensity:");
                ui.label(format!("{:.1}", summary.total_intensity));
                ui.end_row();
                ui.label("Base peak:");
                ui.label(format!(
                    "{:.4} m/z at {:.1}",
                    summary.base_peak_mz, summary.base_peak_intensity
                ));
                ui.end_row();
            });
    }

    if state.peaks.is_empty() {
        return;
    }

    ui.add_space(10.0);
    if state.peaks.len() > MAX_ROWS {
        ui.label(
            RichText::new(format!(
                "Showing the first {MAX_ROWS} of {} peaks.",
                state.peaks.len()
            ))
            .weak(),
        );
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(120.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("m/z");
            });
            header.col(|ui| {
                ui.strong("Intensity");
            });
        })
        .body(|mut body| {
            for peak in state.peaks.iter().take(MAX_ROWS) {
                body.row(16.0, |mut row| {
                    row.col(|ui| {
                        ui.monospace(format!("{:.4}", peak.mz));
                    });
                    row.col(|ui| {
                        ui.monospace(format!("{:.1}", peak.intensity));
                    });
                });
            }
        });
}
