//! Background execution of workflow runs.
//!
//! Pages start runs on worker threads; progress comes back as events over an
//! mpsc channel drained once per frame. Each event names the page family it
//! belongs to so output lands in the right log view.

use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::thread;

use omw_core::models::{RunReport, WorkflowParams};
use omw_core::tools::ToolCommand;

/// Which page family a run event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunTarget {
    Topp,
    MsWorkflow,
    Subprocess,
}

/// Events sent from worker threads back to the shell.
#[derive(Debug)]
pub enum RunEvent {
    /// One line of tool or workflow output.
    Line(RunTarget, String),
    /// The run finished.
    Finished {
        target: RunTarget,
        success: bool,
        message: String,
    },
}

/// Handle pages use to start background runs.
#[derive(Clone)]
pub struct Runner {
    tx: Sender<RunEvent>,
}

impl Runner {
    pub fn new(tx: Sender<RunEvent>) -> Self {
        Self { tx }
    }

    /// Raw event sender, for pages that drive their own worker thread.
    pub fn sender(&self) -> Sender<RunEvent> {
        self.tx.clone()
    }

    /// Run a single command, streaming its output.
    pub fn spawn_command(&self, target: RunTarget, command: ToolCommand) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let _ = tx.send(RunEvent::Line(target, format!("> {}", command.display())));

            let line_tx = tx.clone();
            let result = command.run_streaming(move |line| {
                let _ = line_tx.send(RunEvent::Line(target, line.to_string()));
            });

            let (success, message) = match result {
                Ok(()) => (true, "Command completed.".to_string()),
                Err(err) => (false, format!("Command failed: {err}")),
            };
            let _ = tx.send(RunEvent::Finished {
                target,
                success,
                message,
            });
        });
    }

    /// Run the configured tool over every input file, writing outputs and a
    /// run report into `results_dir`.
    pub fn spawn_workflow(
        &self,
        target: RunTarget,
        params: WorkflowParams,
        inputs: Vec<PathBuf>,
        results_dir: PathBuf,
    ) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let started_at = chrono::Local::now();
            let mut messages = Vec::new();
            let mut success = true;

            for input in &inputs {
                let name = input
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| input.display().to_string());
                let stem = input
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_else(|| "output".to_string());
                let output = results_dir.join(format!("{stem}.featureXML"));

                let command =
                    ToolCommand::new(&params.tool).args(params.to_args(input, &output));
                let _ = tx.send(RunEvent::Line(target, format!("> {}", command.display())));

                let line_tx = tx.clone();
                match command.run_streaming(move |line| {
                    let _ = line_tx.send(RunEvent::Line(target, line.to_string()));
                }) {
                    Ok(()) => messages.push(format!("{name}: ok")),
                    Err(err) => {
                        success = false;
                        let _ = tx.send(RunEvent::Line(target, err.to_string()));
                        messages.push(format!("{name}: {err}"));
                    }
                }
            }

            let report = RunReport {
                tool: params.tool.clone(),
                started_at,
                success,
                inputs: inputs.len(),
                messages,
            };
            match report.write(&results_dir) {
                Ok(path) => {
                    let _ = tx.send(RunEvent::Line(
                        target,
                        format!("Report written to {}", path.display()),
                    ));
                }
                Err(err) => {
                    let _ = tx.send(RunEvent::Line(
                        target,
                        format!("Failed to write run report: {err}"),
                    ));
                }
            }

            let message = if success {
                format!("Processed {} file(s).", inputs.len())
            } else {
                "Run finished with errors.".to_string()
            };
            let _ = tx.send(RunEvent::Finished {
                target,
                success,
                message,
            });
        });
    }
}
