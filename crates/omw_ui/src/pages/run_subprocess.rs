//! Run Subprocess page: free-form command runner.

use eframe::egui::{self, Color32};

use omw_core::tools::ToolCommand;

use super::state::SubprocessState;
use crate::components::log_view;
use crate::runner::{RunTarget, Runner};

pub fn show(ui: &mut egui::Ui, state: &mut SubprocessState, runner: &Runner) {
    ui.heading("🖥️ Run Subprocess");
    ui.label("Run any command-line tool. Arguments split on whitespace; no shell quoting.");
    ui.add_space(8.0);

    let mut submitted = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.command_line)
                .hint_text("e.g. FileInfo -in sample.mzML")
                .desired_width(420.0),
        );
        submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui
            .add_enabled(!state.run.running, egui::Button::new("Run"))
            .clicked()
        {
            submitted = true;
        }
    });

    if submitted && !state.run.running {
        match ToolCommand::parse_line(&state.command_line) {
            Some(command) => {
                state.run.begin();
                runner.spawn_command(RunTarget::Subprocess, command);
            }
            None => {
                state.run.append("Enter a command first.");
            }
        }
    }

    if state.run.running {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Running...");
        });
    } else if let Some(success) = state.run.outcome {
        if success {
            ui.colored_label(Color32::DARK_GREEN, "Command completed.");
        } else {
            ui.colored_label(Color32::RED, "Command failed - see the log below.");
        }
    }

    ui.add_space(8.0);
    ui.separator();
    log_view::show(ui, &state.run.log);
}
