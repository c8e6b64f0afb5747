//! Workflow pages.
//!
//! Each page is a render function dispatched on the active [`PageId`]. The
//! two upload pages share one implementation with different copy.

mod documentation;
mod file_upload;
mod ms_download;
mod ms_viewer;
mod ms_workflow;
mod quickstart;
mod run_subprocess;
mod simple_workflow;
mod state;
mod topp_configure;
mod topp_results;
mod topp_run;

pub use state::PageStates;

use eframe::egui;

use omw_core::navigation::PageId;
use omw_core::session::SessionContext;

use crate::runner::Runner;

/// Render the active page into the central panel.
pub fn dispatch(
    ui: &mut egui::Ui,
    page: PageId,
    states: &mut PageStates,
    session: &SessionContext,
    runner: &Runner,
) {
    match page {
        PageId::Quickstart => quickstart::show(ui, session),
        PageId::Documentation => documentation::show(ui),
        PageId::ToppFileUpload => file_upload::show(
            ui,
            "Add input files for the TOPP tool run.",
            &mut states.topp_upload,
            session,
        ),
        PageId::ToppConfigure => topp_configure::show(ui, &mut states.configure),
        PageId::ToppRun => topp_run::show(ui, states, session, runner),
        PageId::ToppResults => topp_results::show(ui, session),
        PageId::MsFileUpload => file_upload::show(
            ui,
            "Add peak-list files (one m/z and intensity pair per line).",
            &mut states.ms_upload,
            session,
        ),
        PageId::MsDataViewer => ms_viewer::show(ui, &mut states.viewer, session),
        PageId::MsRunWorkflow => ms_workflow::show(ui, &mut states.ms_workflow, session, runner),
        PageId::MsDownload => ms_download::show(ui, &mut states.download, session),
        PageId::SimpleWorkflow => simple_workflow::show(ui, &mut states.simple, session),
        PageId::RunSubprocess => run_subprocess::show(ui, &mut states.subprocess, runner),
    }
}
