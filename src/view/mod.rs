//! TUI rendering and terminal management (impure shell)

pub mod bar;
pub mod constants;
pub mod item;
pub mod popover;
pub mod styles;

pub use bar::{bar_layout, render_bar, render_status, BarLayout};
pub use popover::{render_popover, POPOVER_CONSUMER};
pub use styles::{ColorConfig, MenuStyles};

use crate::config::KeyBindings;
use crate::model::ContextError;
use crate::state::{handle_click, AppState};
use constants::{BAR_HEIGHT, STATUS_BAR_HEIGHT};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// A consumer ran outside its provider scope
    #[error("Configuration error: {0}")]
    Context(#[from] ContextError),
}

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Menu bar row.
    pub bar: Rect,
    /// Space below the bar where the popover may appear.
    pub container: Rect,
    /// Key hint row.
    pub status: Rect,
}

/// Split the screen into bar, container and status line.
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let [bar, container, status] = Layout::vertical([
        Constraint::Length(BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(area);

    ScreenAreas {
        bar,
        container,
        status,
    }
}

/// Draw one full frame. Returns the trigger rectangle for click detection.
///
/// # Errors
///
/// Propagates `ContextError` from the popover; that is a programming error.
pub fn render_frame(
    frame: &mut Frame,
    state: &mut AppState,
    styles: &MenuStyles,
) -> Result<Rect, ContextError> {
    let areas = screen_areas(frame.area());
    let bar = render_bar(frame, areas.bar, state, styles);
    render_status(frame, areas.status, state, styles);

    if state.is_open() {
        render_popover(frame, state, bar.trigger, areas.container, styles)?;
    }

    Ok(bar.trigger)
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: MenuStyles,
    /// Last rendered trigger area (for mouse click detection)
    last_trigger_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, styles: MenuStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);

        Self::with_backend(backend, app_state, styles)
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws after every handled
    /// event; resizes reach the popover as a budget change on that redraw.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TICK: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if !event::poll(TICK)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                }
                _ => continue,
            }

            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create an application over any backend.
    pub fn with_backend(backend: B, app_state: AppState, styles: MenuStyles) -> Result<Self, TuiError> {
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles,
            last_trigger_area: None,
        })
    }

    /// Application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Mutable application state.
    pub fn app_state_mut(&mut self) -> &mut AppState {
        &mut self.app_state
    }

    /// Underlying terminal (tests inspect the TestBackend buffer).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Trigger rectangle from the last draw.
    pub fn trigger_area(&self) -> Option<Rect> {
        self.last_trigger_area
    }

    /// Render one frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let app_state = &mut self.app_state;
        let styles = &self.styles;
        let mut outcome = Ok(Rect::default());

        self.terminal.draw(|frame| {
            outcome = render_frame(frame, app_state, styles);
        })?;

        self.last_trigger_area = Some(outcome?);
        Ok(())
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        debug!(?action, "Key action");
        let quit = self.app_state.apply_action(action);
        if quit {
            info!("Quit requested");
        }
        quit
    }

    /// Handle a mouse event. Only left-button presses do anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let target = handle_click(
                &mut self.app_state,
                self.last_trigger_area,
                mouse.column,
                mouse.row,
            );
            debug!(?target, column = mouse.column, row = mouse.row, "Click");
        }
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(app_state: AppState, styles: MenuStyles) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(app_state, styles) {
        Ok(app) => app,
        Err(err) => {
            restore_terminal()?;
            return Err(err);
        }
    };

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
