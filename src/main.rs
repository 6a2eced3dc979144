mod app;
mod config;
mod domain;
mod input;
mod logging;
mod notifications;
mod persistence;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::Parser;
use config::{Cli, Commands};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::FocusTimer;
use notifications::{DesktopNotifier, NotificationHub, TerminalBell};
use persistence::{
    session_key, CounterStore, DataDir, JsonCounterStore, MemoryCounterStore, DATA_DIR_ENV,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Init) => {
            let cwd = std::env::current_dir().context("Could not determine current directory")?;
            let data_dir = DataDir::init_in(&cwd)?;
            println!("Initialized focus-hub directory: {}", data_dir.path().display());
            println!();
            println!("Focus Hub will now use this local directory for its data");
            println!("unless {} points elsewhere.", DATA_DIR_ENV);
            println!("Run 'focus-hub' to start a focus session.");
            Ok(())
        }
        Some(Commands::Stats { date }) => {
            let day = match date {
                Some(date_str) => chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
                    .with_context(|| format!("Invalid date format. Use YYYY-MM-DD: {}", date_str))?,
                None => chrono::Local::now().date_naive(),
            };

            let store = JsonCounterStore::new(DataDir::locate()?.counters_file());
            let completed = store.load(&session_key(day))?.unwrap_or(0);
            println!("Completed focus sessions on {}: {}", day, completed);
            Ok(())
        }
        None => run_tui(&cli),
    }
}

fn build_notifier(cli: &Cli) -> NotificationHub {
    let mut hub = NotificationHub::new();
    if !cli.no_sound {
        hub.register(Box::new(TerminalBell));
    }
    if !cli.no_desktop_notify {
        hub.register(Box::new(DesktopNotifier));
    }
    hub
}

fn build_store(cli: &Cli, data_dir: &DataDir) -> Box<dyn CounterStore> {
    if cli.persist_sessions {
        Box::new(JsonCounterStore::new(data_dir.counters_file()))
    } else {
        Box::new(MemoryCounterStore::default())
    }
}

fn run_tui(cli: &Cli) -> Result<()> {
    let data_dir = DataDir::locate()?.ensure()?;
    let log_path = data_dir.log_file();
    logging::init_logging(&log_path, cli.log_level())?;
    eprintln!("Using focus-hub directory: {}", data_dir.path().display());
    info!(log = %log_path.display(), mode = %cli.mode, persist = cli.persist_sessions, "starting");

    let mut app = AppState::new(
        FocusTimer::new(cli.mode),
        build_notifier(cli),
        build_store(cli, &data_dir),
        chrono::Local::now().date_naive(),
    )?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if app.needs_save {
        if let Err(e) = app.save() {
            error!(error = %e, "failed to save session tally");
            eprintln!("Error saving session tally: {}", e);
        }
    }

    if let Err(err) = result {
        error!(error = %err, "app loop failed");
        eprintln!("Error: {}", err);
    }

    info!("shutdown complete");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let poll_rate = ticker::poll_duration();

    loop {
        if let Err(e) = app.check_day_change(chrono::Local::now().date_naive()) {
            warn!(error = %e, "failed to roll session tally over to the new day");
        }

        terminal.draw(|f| ui::render(f, app))?;

        // Key input is applied before pending ticks so user intent wins
        if event::poll(poll_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        app.tick();
        app.autosave();
    }
}
