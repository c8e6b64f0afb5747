//! Per-page UI state.
//!
//! Pages are stateless render functions; everything they remember between
//! frames lives here, owned by the app struct.

use std::fmt::Write;
use std::path::PathBuf;

use omw_core::models::WorkflowParams;
use omw_core::spectra::{Peak, SpectrumSummary};

use crate::runner::RunTarget;

/// State for every page, keyed by field.
#[derive(Default)]
pub struct PageStates {
    pub topp_upload: UploadState,
    pub configure: ConfigureState,
    pub topp_run: RunState,
    pub ms_upload: UploadState,
    pub viewer: ViewerState,
    pub ms_workflow: MsWorkflowState,
    pub download: DownloadState,
    pub simple: SimpleWorkflowState,
    pub subprocess: SubprocessState,
}

impl PageStates {
    /// The run state a worker event belongs to.
    pub fn run_state_mut(&mut self, target: RunTarget) -> &mut RunState {
        match target {
            RunTarget::Topp => &mut self.topp_run,
            RunTarget::MsWorkflow => &mut self.ms_workflow.run,
            RunTarget::Subprocess => &mut self.subprocess.run,
        }
    }

    /// Whether any background run is still going.
    pub fn any_running(&self) -> bool {
        self.topp_run.running || self.ms_workflow.run.running || self.subprocess.run.running
    }
}

/// State of an upload page.
#[derive(Default)]
pub struct UploadState {
    pub error: Option<String>,
}

/// State of the Configure page: the edited workflow parameters.
#[derive(Default)]
pub struct ConfigureState {
    pub params: WorkflowParams,
}

/// State of a page that owns a background run and its log.
#[derive(Default)]
pub struct RunState {
    pub running: bool,
    pub outcome: Option<bool>,
    pub log: String,
}

impl RunState {
    /// Reset for a new run.
    pub fn begin(&mut self) {
        self.running = true;
        self.outcome = None;
        self.log.clear();
    }

    /// Append a timestamped line to the log.
    pub fn append(&mut self, message: &str) {
        let timestamp = chrono::Local::now().format("%H:%M:%S");
        writeln!(&mut self.log, "[{}] {}", timestamp, message).ok();
    }
}

/// State of the raw-data viewer page.
#[derive(Default)]
pub struct ViewerState {
    pub selected: Option<PathBuf>,
    pub peaks: Vec<Peak>,
    pub summary: Option<SpectrumSummary>,
    pub error: Option<String>,
}

/// State of the pyOpenMS Run Workflow page.
pub struct MsWorkflowState {
    pub threshold: f64,
    pub run: RunState,
}

impl Default for MsWorkflowState {
    fn default() -> Self {
        Self {
            threshold: 1000.0,
            run: RunState::default(),
        }
    }
}

/// State of the Download Results page.
#[derive(Default)]
pub struct DownloadState {
    pub notice: Option<String>,
    pub error: Option<String>,
}

/// State of the Simple Workflow page.
pub struct SimpleWorkflowState {
    pub selected: Option<PathBuf>,
    pub threshold: f64,
    pub result: Option<String>,
    pub error: Option<String>,
}

impl Default for SimpleWorkflowState {
    fn default() -> Self {
        Self {
            selected: None,
            threshold: 1000.0,
            result: None,
            error: None,
        }
    }
}

/// State of the Run Subprocess page.
#[derive(Default)]
pub struct SubprocessState {
    pub command_line: String,
    pub run: RunState,
}
