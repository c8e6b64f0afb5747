//! Run Workflow page: built-in intensity filter over every uploaded peak list.

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::thread;

use eframe::egui::{self, Color32, RichText};

use omw_core::models::RunReport;
use omw_core::session::SessionContext;
use omw_core::spectra;

use super::state::MsWorkflowState;
use crate::components::log_view;
use crate::runner::{RunEvent, RunTarget, Runner};

pub fn show(
    ui: &mut egui::Ui,
    state: &mut MsWorkflowState,
    session: &SessionContext,
    runner: &Runner,
) {
    ui.heading("⚙️ Run Workflow");
    ui.label(
        "Filters every uploaded peak list by intensity and writes the surviving \
         peaks into the results folder.",
    );
    ui.add_space(8.0);

    let workspace = match session.workspace() {
        Some(workspace) => workspace,
        None => {
            ui.colored_label(Color32::RED, "No workspace available for this session.");
            return;
        }
    };

    let uploads = workspace.uploaded_files().unwrap_or_default();

    ui.horizontal(|ui| {
        ui.label("Intensity threshold:");
        ui.add(
            egui::DragValue::new(&mut state.threshold)
                .speed(10.0)
                .range(0.0..=1_000_000.0),
        );
    });

    if uploads.is_empty() {
        ui.label(RichText::new("Upload peak lists first.").weak());
    }

    ui.add_space(8.0);
    let can_run = !state.run.running && !uploads.is_empty();
    if ui
        .add_enabled(can_run, egui::Button::new("Run workflow"))
        .clicked()
    {
        state.run.begin();
        spawn_peak_workflow(
            runner.sender(),
            uploads,
            workspace.results_dir(),
            state.threshold,
        );
    }

    if state.run.running {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Running...");
        });
    } else if let Some(success) = state.run.outcome {
        if success {
            ui.colored_label(Color32::DARK_GREEN, "Workflow completed.");
        } else {
            ui.colored_label(Color32::RED, "Workflow failed - see the log below.");
        }
    }

    ui.add_space(8.0);
    ui.separator();
    log_view::show(ui, &state.run.log);
}

/// Worker: parse, filter, and write each peak list, then a run report.
fn spawn_peak_workflow(
    tx: Sender<RunEvent>,
    inputs: Vec<PathBuf>,
    results_dir: PathBuf,
    threshold: f64,
) {
    const TARGET: RunTarget = RunTarget::MsWorkflow;

    thread::spawn(move || {
        let started_at = chrono::Local::now();
        let mut messages = Vec::new();
        let mut success = true;

        for input in &inputs {
            let name = input
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| input.display().to_string());
            let _ = tx.send(RunEvent::Line(TARGET, format!("Processing {name}")));

            match spectra::read_peak_file(input) {
                Ok(peaks) => {
                    let kept = spectra::filter_by_intensity(&peaks, threshold);
                    let stem = input
                        .file_stem()
                        .map(|s| s.to_string_lossy().to_string())
                        .unwrap_or_else(|| "peaks".to_string());
                    let output = results_dir.join(format!("{stem}_filtered.tsv"));

                    let mut content = String::new();
                    for peak in &kept {
                        content.push_str(&format!("{}\t{}\n", peak.mz, peak.intensity));
                    }

                    match fs::write(&output, content) {
                        Ok(()) => {
                            let message = format!(
                                "{name}: kept {} of {} peaks at threshold {threshold}",
                                kept.len(),
                                peaks.len()
                            );
                            let _ = tx.send(RunEvent::Line(TARGET, message.clone()));
                            messages.push(message);
                        }
                        Err(err) => {
                            success = false;
                            let message = format!("{name}: could not write output: {err}");
                            let _ = tx.send(RunEvent::Line(TARGET, message.clone()));
                            messages.push(message);
                        }
                    }
                }
                Err(err) => {
                    success = false;
                    let message = format!("{name}: {err}");
                    let _ = tx.send(RunEvent::Line(TARGET, message.clone()));
                    messages.push(message);
                }
            }
        }

        let report = RunReport {
            tool: "intensity-filter".to_string(),
            started_at,
            success,
            inputs: inputs.len(),
            messages,
        };
        if let Err(err) = report.write(&results_dir) {
            let _ = tx.send(RunEvent::Line(
                TARGET,
                format!("Failed to write run report: {err}"),
            ));
        }

        let message = if success {
            format!("Filtered {} file(s).", inputs.len())
        } else {
            "Workflow finished with errors.".to_string()
        };
        let _ = tx.send(RunEvent::Finished {
            target: TARGET,
            success,
            message,
        });
    });
}
