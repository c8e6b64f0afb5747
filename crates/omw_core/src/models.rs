//! Shared workflow types.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Unit for the mass tolerance parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToleranceUnit {
    /// Parts per million.
    #[default]
    Ppm,
    /// Dalton.
    Da,
}

impl std::fmt::Display for ToleranceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToleranceUnit::Ppm => write!(f, "ppm"),
            ToleranceUnit::Da => write!(f, "Da"),
        }
    }
}

/// Parameters for a TOPP tool run, edited on the Configure page and consumed
/// by the Run page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowParams {
    /// Tool executable name.
    pub tool: String,
    /// Mass tolerance for feature matching.
    pub mass_tolerance: f64,
    /// Unit of `mass_tolerance`.
    pub tolerance_unit: ToleranceUnit,
    /// Worker threads the tool may use.
    pub threads: u32,
    /// Free-form extra arguments appended verbatim (whitespace separated).
    pub extra_args: String,
}

impl Default for WorkflowParams {
    fn default() -> Self {
        Self {
            tool: "FeatureFinderMetabo".to_string(),
            mass_tolerance: 10.0,
            tolerance_unit: ToleranceUnit::Ppm,
            threads: 1,
            extra_args: String::new(),
        }
    }
}

impl WorkflowParams {
    /// Build the command-line arguments for one input file.
    pub fn to_args(&self, input: &Path, output: &Path) -> Vec<String> {
        let mut args = vec![
            "-in".to_string(),
            input.display().to_string(),
            "-out".to_string(),
            output.display().to_string(),
            "-algorithm:mass_error".to_string(),
            format!("{}{}", self.mass_tolerance, self.tolerance_unit),
            "-threads".to_string(),
            self.threads.to_string(),
        ];
        args.extend(self.extra_args.split_whitespace().map(str::to_string));
        args
    }
}

/// Report written to the workspace results directory after a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Tool that was executed.
    pub tool: String,
    /// When the run started.
    pub started_at: DateTime<Local>,
    /// Whether every input completed successfully.
    pub success: bool,
    /// Number of input files processed.
    pub inputs: usize,
    /// Human-readable outcome, one entry per input.
    pub messages: Vec<String>,
}

impl RunReport {
    /// File name used for run reports in a results directory.
    pub const FILE_NAME: &'static str = "run_report.json";

    /// Write the report as JSON into `dir`, returning the report path.
    pub fn write(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(Self::FILE_NAME);
        let mut content = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        content.push('\n');
        fs::write(&path, content)?;
        Ok(path)
    }
}
