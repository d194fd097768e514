//! TUI module using ratatui.
//!
//! `App` owns the controller state and a [`Driver`]; the event loop feeds it
//! key presses and the completions of background tasks, then redraws.

pub mod components;
pub mod keys;
pub mod styles;

use crate::agent::{AgentError, Analyst, GeminiAnalyst};
use crate::analysis::AnalysisDocument;
use crate::config::Config;
use crate::controller::{Event, State, Status, Tab};
use crate::export;
use crate::report;
use crate::runtime::Driver;
use components::{body, input, panels, score, sidebar};
use crossterm::{
    event::{self, Event as TermEvent, KeyEvent},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use keys::{map_key, Action};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum UiError {
    #[error("terminal IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Agent(#[from] AgentError),
}

/// Application shell around the pure controller
pub struct App {
    state: State,
    driver: Driver,
    events: UnboundedReceiver<Event>,
    export_dir: PathBuf,
    notice: Option<String>,
    tick: Duration,
}

impl App {
    pub fn new(config: &Config, analyst: Arc<dyn Analyst>) -> Self {
        let (driver, events) = Driver::new(analyst, config.analyzing_delay());
        Self {
            state: State::default(),
            driver,
            events,
            export_dir: config.export.path.clone(),
            notice: None,
            tick: config.tick(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Feed one event through the reducer
    pub fn dispatch(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        self.state = self.driver.apply(state, event);
    }

    /// Handle a key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = map_key(key, &self.state) else {
            return false;
        };
        self.notice = None;
        match action {
            Action::Quit => return true,
            Action::Export => self.export(),
            Action::Dispatch(event) => self.dispatch(event),
        }
        false
    }

    /// Apply every completion that has arrived. Returns `true` if any did.
    pub fn drain_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events.try_recv() {
            self.dispatch(event);
            changed = true;
        }
        changed
    }

    /// Wait for the next background completion and apply it
    pub async fn next_event(&mut self) -> bool {
        match self.events.recv().await {
            Some(event) => {
                self.dispatch(event);
                true
            }
            None => false,
        }
    }

    fn export(&mut self) {
        let Some(document) = self.state.document.as_ref() else {
            return;
        };
        self.notice = Some(match export::write_report(document, &self.export_dir) {
            Ok(path) => format!("Report saved to {}", path.display()),
            Err(e) => {
                warn!(error = %e, "Export failed");
                format!("Export failed: {}", e)
            }
        });
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<(), UiError> {
        terminal.draw(|frame| draw(frame, &self.state, self.notice.as_deref()))?;

        loop {
            let mut dirty = false;
            if event::poll(self.tick)? {
                match event::read()? {
                    TermEvent::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    TermEvent::Resize(_, _) => dirty = true,
                    _ => {}
                }
            }

            dirty |= self.drain_events();
            if dirty {
                terminal.draw(|frame| draw(frame, &self.state, self.notice.as_deref()))?;
            }
        }
    }
}

/// Draw the whole screen from state
pub fn draw(frame: &mut Frame, state: &State, notice: Option<&str>) {
    let progress_height = if state.status.is_in_flight() { 3 } else { 0 };
    let [header_area, input_area, progress_area, main_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(progress_height),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    panels::render_header(frame, header_area);
    input::render_input(frame, input_area, state);
    input::render_progress(frame, progress_area, state);

    match (state.status, state.document.as_ref()) {
        (Status::Completed, Some(document)) => {
            draw_report(frame, main_area, document, state.active_tab)
        }
        (Status::Error, _) => {
            let [error_area, _] =
                Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(main_area);
            panels::render_error(frame, error_area, state);
        }
        (Status::Idle, _) => panels::render_welcome(frame, main_area),
        _ => {}
    }

    panels::render_footer(frame, footer_area, state, notice);
}

fn draw_report(frame: &mut Frame, area: Rect, document: &AnalysisDocument, tab: Tab) {
    let view = report::render(document, tab);

    let [score_area, tabs_area, content_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);
    let [body_area, sidebar_area] =
        Layout::horizontal([Constraint::Percentage(67), Constraint::Percentage(33)])
            .areas(content_area);

    score::render_score_card(frame, score_area, &view.score_card);
    score::render_tab_bar(frame, tabs_area, tab);
    body::render_tab(frame, body_area, &view.tab);
    sidebar::render_sidebar(frame, sidebar_area, &view.sidebar);
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, UiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result<(), UiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Launch the TUI, optionally submitting `initial_handle` right away.
///
/// Logging must be initialized by the caller.
pub async fn run(config: Config, initial_handle: Option<String>) -> Result<(), UiError> {
    let analyst = Arc::new(GeminiAnalyst::from_config(&config)?);
    let mut app = App::new(&config, analyst);

    if let Some(handle) = initial_handle {
        app.dispatch(Event::ClearInput);
        for c in handle.chars() {
            app.dispatch(Event::Input(c));
        }
        app.dispatch(Event::Submit(handle));
    }

    info!("Starting TUI");
    let _guard = TerminalGuard::new(|| {
        if let Err(e) = restore_terminal() {
            warn!(error = %e, "Failed to restore terminal");
        }
    });
    let mut terminal = setup_terminal()?;
    app.run_loop(&mut terminal)
}

/// Runs `restore` on drop, so raw mode is left even when the loop panics
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}
