//! SectorLens TUI entry point: config, logging, terminal setup, event loop.

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};

use sectorlens_core::Universe;
use sectorlens_tui::config::{self, Args};
use sectorlens_tui::{input, logging, ui, AppState, Theme};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let args = Args::parse();
    let loaded = config::load(&args).context("load configuration")?;
    let settings = loaded.settings;

    // Logging goes to a file, so it can start before the terminal is taken over.
    logging::init(&settings)?;
    if let Some(problem) = loaded.ignored {
        warn!(error = %problem, "ignoring default config file");
    }

    let universe = Universe::builtin().context("build company universe")?;
    info!(
        companies = universe.len(),
        tick_ms = settings.tick.as_millis() as u64,
        color = settings.color,
        "starting dashboard"
    );

    let mut app = AppState::new(universe, Theme::with_color(settings.color));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app, settings.tick);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    tick: Duration,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check exit
        if !app.running {
            return Ok(());
        }
    }
}
