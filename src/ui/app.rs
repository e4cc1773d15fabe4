//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui::{poll_interval, splash_duration};
use crate::controller::{DashboardController, DashboardError, Tab};
use crate::events::Topic;
use crate::models::ImageFile;
use crate::ui::dashboard::{UiAction, ViewState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::path::Path;
use std::time::Instant;

/// UI configuration data grouped by concern
#[derive(Debug, Clone, Default)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen with the campaign, donation and gallery data.
    Dashboard,
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Owns the fetched data and performs every backend action.
    controller: DashboardController,

    /// Cursor positions, form text and dialogs.
    view: ViewState,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(controller: DashboardController, ui_config: UIConfig) -> Self {
        Self {
            current_screen: Screen::Splash,
            controller,
            view: ViewState::new(ui_config.with_background_color),
        }
    }

    /// Runs one action against the controller. Returns `false` once the
    /// operator asked to quit.
    pub async fn apply(&mut self, action: UiAction) -> bool {
        let tab = self.controller.state().active_tab;
        match action {
            UiAction::Quit => return false,
            UiAction::Refresh => {
                // Failures are recorded as notifications
                let _ = self.controller.refresh().await;
            }
            UiAction::SwitchTab(tab) => self.controller.set_active_tab(tab),
            UiAction::OpenCreate => {
                self.controller.open_create();
                self.view.open_form(&self.controller.state().modal.target, tab);
            }
            UiAction::OpenEdit(campaign) => {
                self.controller.open_edit(*campaign);
                self.view.open_form(&self.controller.state().modal.target, tab);
            }
            UiAction::CloseModal => {
                self.controller.close_modal();
                self.view.form = None;
            }
            UiAction::Submit { form, image_path } => {
                let image = if image_path.is_empty() {
                    None
                } else {
                    match ImageFile::from_path(Path::new(&image_path)) {
                        Ok(image) => Some(image),
                        Err(e) => {
                            let topic = match tab {
                                Tab::Campaigns => Topic::Campaign,
                                Tab::Gallery => Topic::Gallery,
                            };
                            self.controller.report(
                                topic,
                                &format!("Failed to read image {}", image_path),
                                &DashboardError::from(e),
                            );
                            return true;
                        }
                    }
                };
                let _ = self.controller.submit(&form, image).await;
                if !self.controller.state().modal.open {
                    self.view.form = None;
                }
            }
            UiAction::Delete { id, kind } => {
                let _ = self.controller.delete(id, kind).await;
            }
        }

        let state = self.controller.state();
        self.view
            .clamp_selection(state.campaigns.len(), state.gallery.len());
        true
    }

    fn enter_dashboard(&mut self) -> Option<UiAction> {
        self.current_screen = Screen::Dashboard;
        Some(UiAction::Refresh)
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let mut pending: Option<UiAction> = None;

    loop {
        app.view.tick = app.view.tick.wrapping_add(1);

        // Draw the working state first so the operator sees something while we wait
        if let Some(action) = pending.take() {
            app.view.working = action.working_label().map(str::to_string);
            terminal.draw(|f| render(f, &app))?;
            let keep_running = app.apply(action).await;
            app.view.working = None;
            if !keep_running {
                return Ok(());
            }
            continue;
        }

        terminal.draw(|f| render(f, &app))?;

        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration() {
            pending = app.enter_dashboard();
            continue;
        }

        if event::poll(poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                pending = match app.current_screen {
                    Screen::Splash => {
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            return Ok(());
                        }
                        // Any other key skips the splash screen
                        app.enter_dashboard()
                    }
                    Screen::Dashboard => app.view.handle_key(key, app.controller.state()),
                };
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f, app.controller.environment()),
        Screen::Dashboard => render_dashboard(
            f,
            app.controller.state(),
            &app.view,
            app.controller.environment(),
        ),
    }
}
