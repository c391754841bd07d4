//! Maieutica - Terminal Learning Client
//!
//! A terminal client shell for the Maieutica educational platform.
//! Provides a landing page, mocked sign-in and registration, and the
//! learner dashboard with course and lesson tracking.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::App;
use infrastructure::CatalogRepository;
use presentation::{render_ui, InputHandler};

/// How long to wait for input before running a timer tick. Keeps
/// notification expiry moving while the user is idle.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Entry point for the Maieutica terminal client.
///
/// Sets up the terminal interface, seeds the demo catalog and dashboard
/// fixtures, and runs the main event loop until the user quits.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues
/// with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::default();
    app.set_catalog_result(CatalogRepository::demo_catalog(), Instant::now());
    app.achievements = CatalogRepository::demo_achievements();
    app.upcoming_sessions = CatalogRepository::demo_live_sessions();

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Renders the current route, dispatches keyboard input, and advances
/// time-driven state on every iteration. Returns once the user quits.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    InputHandler::handle_key_event(app, key.code, key.modifiers);
                }
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}
