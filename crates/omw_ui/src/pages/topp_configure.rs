//! Configure page: parameters for the TOPP tool run.

use std::path::Path;

use eframe::egui::{self, RichText};

use omw_core::models::{ToleranceUnit, WorkflowParams};
use omw_core::tools::ToolCommand;

use super::state::ConfigureState;

pub fn show(ui: &mut egui::Ui, state: &mut ConfigureState) {
    ui.heading("⚙️ Configure");
    ui.label("Parameters used by the Run page for every uploaded file.");
    ui.add_space(10.0);

    egui::Grid::new("workflow_params")
        .num_columns(2)
        .spacing([24.0, 8.0])
        .show(ui, |ui| {
            ui.label("Tool:");
            ui.text_edit_singleline(&mut state.params.tool);
            ui.end_row();

            ui.label("Mass tolerance:");
            ui.horizontal(|ui| {
                ui.add(
                    egui::DragValue::new(&mut state.params.mass_tolerance)
                        .speed(0.1)
                        .range(0.1..=100.0),
                );
                egui::ComboBox::from_id_salt("tolerance_unit")
                    .selected_text(state.params.tolerance_unit.to_string())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut state.params.tolerance_unit,
                            ToleranceUnit::Ppm,
                            "ppm",
                        );
                        ui.selectable_value(
                            &mut state.params.tolerance_unit,
                            ToleranceUnit::Da,
                            "Da",
                        );
                    });
            });
            ui.end_row();

            ui.label("Threads:");
            ui.add(egui::DragValue::new(&mut state.params.threads).range(1..=64));
            ui.end_row();

            ui.label("Extra arguments:");
            ui.text_edit_singleline(&mut state.params.extra_args);
            ui.end_row();
        });

    ui.add_space(10.0);
    if ui.button("Restore defaults").clicked() {
        state.params = WorkflowParams::default();
    }

    ui.add_space(14.0);
    ui.label(RichText::new("Command preview").strong());
    let preview = ToolCommand::new(&state.params.tool)
        .args(state.params.to_args(Path::new("<input>"), Path::new("<output>")));
    ui.monospace(preview.display());
}
