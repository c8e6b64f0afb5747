//! Main application: boot sequence, screen state machine, and dispatch.
//!
//! One boot pass runs setup, then lands in one of three screens:
//!
//! - `Gate`: the verification challenge; passing it re-runs setup
//! - `Fatal`: settings never made it into the session; one error, nothing else
//! - `Ready`: validated navigation map plus the active page
//!
//! Navigation is only ever built on the `Ready` path.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use eframe::egui;

use omw_core::gate::Challenge;
use omw_core::navigation::{self, NavSection, PageId};
use omw_core::session::SessionContext;
use omw_core::setup::{self, SetupError, SetupOutcome};

use crate::components;
use crate::pages::{self, PageStates};
use crate::runner::{RunEvent, Runner};

/// Error shown when setup finished without settings in the session.
const SETTINGS_ERROR: &str = "Failed to load application settings properly.";

/// What the current pass is showing.
pub enum Screen {
    /// Verification pending; no navigation exists.
    Gate(GateScreen),
    /// Fatal for this pass; exactly one user-visible message.
    Fatal(String),
    /// Navigation built and validated; pages dispatch.
    Ready(ReadyScreen),
}

/// State of the verification gate screen.
pub struct GateScreen {
    challenge: Challenge,
    answer: String,
    error: Option<String>,
}

impl GateScreen {
    fn new(challenge: Challenge) -> Self {
        Self {
            challenge,
            answer: String::new(),
            error: None,
        }
    }
}

/// State of the normal application screen.
pub struct ReadyScreen {
    pub nav: Vec<NavSection>,
    pub active: PageId,
}

/// Application state.
pub struct WorkbenchApp {
    session: SessionContext,
    settings_path: PathBuf,
    screen: Screen,
    pages: PageStates,
    runner: Runner,
    rx: Receiver<RunEvent>,
}

impl WorkbenchApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings_path: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut session = SessionContext::new();

        let outcome = setup::run_setup(&mut session, &settings_path);
        let screen = screen_for(&session, outcome);

        Self {
            session,
            settings_path,
            screen,
            pages: PageStates::default(),
            runner: Runner::new(tx),
            rx,
        }
    }

    /// Drain worker-thread events into the page states.
    fn poll_run_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            match event {
                RunEvent::Line(target, line) => {
                    self.pages.run_state_mut(target).append(&line);
                }
                RunEvent::Finished {
                    target,
                    success,
                    message,
                } => {
                    let state = self.pages.run_state_mut(target);
                    state.append(&message);
                    state.running = false;
                    state.outcome = Some(success);
                }
            }
        }
    }
}

impl eframe::App for WorkbenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_run_events();

        let mut next_screen = None;
        match &mut self.screen {
            Screen::Gate(gate) => {
                next_screen = show_gate(ctx, gate, &mut self.session, &self.settings_path);
            }
            Screen::Fatal(message) => {
                show_fatal(ctx, message);
            }
            Screen::Ready(ready) => {
                components::sidebar::show(ctx, &ready.nav, &mut ready.active);
                egui::CentralPanel::default().show(ctx, |ui| {
                    pages::dispatch(ui, ready.active, &mut self.pages, &self.session, &self.runner);
                });
            }
        }

        if let Some(screen) = next_screen {
            self.screen = screen;
        }

        if self.pages.any_running() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

/// Decide the screen for a finished setup pass.
///
/// Setup errors are not fatal by themselves - the session check is. Without
/// settings in the session the navigation label cannot be trusted, so the
/// pass halts with a single error.
pub(crate) fn screen_for(
    session: &SessionContext,
    outcome: Result<SetupOutcome, SetupError>,
) -> Screen {
    match outcome {
        Ok(SetupOutcome::Pending(challenge)) => Screen::Gate(GateScreen::new(challenge)),
        Ok(SetupOutcome::Ready) => ready_screen(session),
        Err(err) => {
            tracing::error!("Session setup failed: {err}");
            ready_screen(session)
        }
    }
}

fn ready_screen(session: &SessionContext) -> Screen {
    let settings = match session.settings() {
        Ok(settings) => settings,
        Err(_) => return Screen::Fatal(SETTINGS_ERROR.to_string()),
    };

    let nav = navigation::build_navigation(&settings.app_name);
    if let Err(err) = navigation::validate(&nav) {
        return Screen::Fatal(format!("Navigation map is invalid: {err}"));
    }

    let active = match navigation::default_page(&nav) {
        Some(page) => page,
        None => return Screen::Fatal("Navigation map has no pages".to_string()),
    };

    Screen::Ready(ReadyScreen { nav, active })
}

fn show_fatal(ctx: &egui::Context, message: &str) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(140.0);
            ui.colored_label(egui::Color32::RED, message);
        });
    });
}

fn show_gate(
    ctx: &egui::Context,
    gate: &mut GateScreen,
    session: &mut SessionContext,
    settings_path: &Path,
) -> Option<Screen> {
    let mut next = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.heading("Verification required");
            ui.add_space(8.0);
            ui.label("Please confirm you are human before continuing.");
            ui.add_space(16.0);
            ui.label(gate.challenge.prompt());
            ui.add_space(8.0);

            let response = ui.add(
                egui::TextEdit::singleline(&mut gate.answer)
                    .hint_text("Answer")
                    .desired_width(120.0),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(8.0);
            if ui.button("Submit").clicked() || submitted {
                if gate.challenge.verify(&gate.answer, session) {
                    let outcome = setup::run_setup(session, settings_path);
                    next = Some(screen_for(session, outcome));
                } else {
                    gate.error = Some("That is not the right answer - try again.".to_string());
                    gate.challenge = Challenge::generate();
                    gate.answer.clear();
                }
            }

            if let Some(error) = &gate.error {
                ui.add_space(8.0);
                ui.colored_label(egui::Color32::RED, error);
            }
        });
    });

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use omw_core::navigation::{
        OTHERS_SECTION_LABEL, PYOPENMS_SECTION_LABEL, TOPP_SECTION_LABEL,
    };
    use std::fs;
    use tempfile::tempdir;

    fn settings_file(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("settings.json");
        fs::write(&path, body).unwrap();
        path
    }

    fn scoped_paths(dir: &Path) -> String {
        format!(
            r#""paths": {{ "workspaces-root": "{}", "logs-folder": "{}" }}"#,
            dir.join("ws").display(),
            dir.join("logs").display()
        )
    }

    #[test]
    fn ready_pass_builds_navigation_labeled_by_app_name() {
        let dir = tempdir().unwrap();
        let path = settings_file(
            dir.path(),
            &format!(r#"{{ "app-name": "MyApp", {} }}"#, scoped_paths(dir.path())),
        );

        let mut session = SessionContext::new();
        let outcome = setup::run_setup(&mut session, &path);
        let screen = screen_for(&session, outcome);

        match screen {
            Screen::Ready(ready) => {
                let labels: Vec<&str> = ready.nav.iter().map(|s| s.label.as_str()).collect();
                assert_eq!(
                    labels,
                    vec![
                        "MyApp",
                        TOPP_SECTION_LABEL,
                        PYOPENMS_SECTION_LABEL,
                        OTHERS_SECTION_LABEL
                    ]
                );
                assert_eq!(ready.active, PageId::Quickstart);
            }
            _ => panic!("expected ready screen"),
        }
    }

    #[test]
    fn missing_session_settings_is_fatal_with_one_message() {
        let dir = tempdir().unwrap();
        // Malformed resource: setup fails before settings reach the session
        let path = settings_file(dir.path(), "{ broken");

        let mut session = SessionContext::new();
        let outcome = setup::run_setup(&mut session, &path);
        let screen = screen_for(&session, outcome);

        match screen {
            Screen::Fatal(message) => assert_eq!(message, SETTINGS_ERROR),
            _ => panic!("expected fatal screen"),
        }
    }

    #[test]
    fn pending_verification_builds_no_navigation() {
        let dir = tempdir().unwrap();
        let path = settings_file(
            dir.path(),
            &format!(
                r#"{{ "deployment": {{ "online-deployment": true }}, {} }}"#,
                scoped_paths(dir.path())
            ),
        );

        let mut session = SessionContext::new();
        let outcome = setup::run_setup(&mut session, &path);
        let screen = screen_for(&session, outcome);

        assert!(matches!(screen, Screen::Gate(_)));
    }

    #[test]
    fn passing_the_gate_reaches_the_ready_screen() {
        let dir = tempdir().unwrap();
        let path = settings_file(
            dir.path(),
            &format!(
                r#"{{ "deployment": {{ "online-deployment": true }}, {} }}"#,
                scoped_paths(dir.path())
            ),
        );

        let mut session = SessionContext::new();
        let outcome = setup::run_setup(&mut session, &path);
        let challenge = match outcome.unwrap() {
            SetupOutcome::Pending(challenge) => challenge,
            SetupOutcome::Ready => panic!("expected pending"),
        };

        // Answer from the prompt text, as a user would
        let answer: u32 = challenge
            .prompt()
            .split(|c: char| !c.is_ascii_digit())
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<u32>().unwrap())
            .sum();
        assert!(challenge.verify(&answer.to_string(), &mut session));

        let second = setup::run_setup(&mut session, &path);
        let screen = screen_for(&session, second);
        assert!(matches!(screen, Screen::Ready(_)));
    }
}
