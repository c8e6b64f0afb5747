//! Simple Workflow page: one synchronous filter step with inline results.

use eframe::egui::{self, Color32, RichText};

use omw_core::session::SessionContext;
use omw_core::spectra::{self, SpectrumSummary};

use super::state::SimpleWorkflowState;

pub fn show(ui: &mut egui::Ui, state: &mut SimpleWorkflowState, session: &SessionContext) {
    ui.heading("⚙️ Simple Workflow");
    ui.label("Pick an uploaded peak list, set a threshold, and count the surviving peaks.");
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

    let selected_name = state
        .selected
        .as_deref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "Select a file".to_string());

    egui::ComboBox::from_id_salt("simple_workflow_file")
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

    ui.horizontal(|ui| {
        ui.label("Intensity threshold:");
        ui.add(
            egui::DragValue::new(&mut state.threshold)
                .speed(10.0)
                .range(0.0..=1_000_000.0),
        );
    });

    ui.add_space(8.0);
    let can_run = state.selected.is_some();
    if ui.add_enabled(can_run, egui::Button::new("Run")).clicked() {
        state.result = None;
        state.error = None;
        if let Some(path) = state.selected.clone() {
            match spectra::read_peak_file(&path) {
                Ok(peaks) => {
                    let kept = spectra::filter_by_intensity(&peaks, state.threshold);
                    let summary = SpectrumSummary::from_peaks(&kept);
                    let mut result = format!(
                        "{} of {} peaks at or above {}.",
                        kept.len(),
                        peaks.len(),
                        state.threshold
                    );
                    if let Some(summary) = summary {
                        result.push_str(&format!(
                            " Base peak {:.4} m/z at {:.1}.",
                            summary.base_peak_mz, summary.base_peak_intensity
                        ));
                    }
                    state.result = Some(result);
                }
                Err(err) => {
                    state.error = Some(err.to_string());
                }
            }
        }
    }

    if let Some(result) = &state.result {
        ui.add_space(8.0);
        ui.label(result);
    }
    if let Some(error) = &state.error {
        ui.add_space(8.0);
        ui.colored_label(Color32::RED, error);
    }
}
