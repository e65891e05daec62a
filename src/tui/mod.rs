//! Terminal UI for Unbeatable Tic-Tac-Toe

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument};
use unbeatable_tictactoe::{GameConfig, GameSession};

use app::{Action, App};

/// Run the TUI game.
pub async fn run_tui(config: GameConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(?config, "Starting Unbeatable Tic-Tac-Toe TUI");

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(setup_terminal, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = disable_raw_mode();
    })?;

    let session = GameSession::new(config.roles(), *config.first_player());
    let res = run_game(&mut terminal, App::new(session), config.thinking_delay()).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Runs `setup`, calling `restore` if it fails so the terminal is not left
/// in raw mode.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce(),
) -> Result<T> {
    setup().inspect_err(|err| {
        error!(error = ?err, "Terminal setup failed");
        restore();
    })
}

/// Draws, waits for keys, and answers for the computer after `delay`.
#[instrument(skip_all, fields(delay_ms = delay.as_millis() as u64))]
async fn run_game<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    delay: Duration,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if app.computer_to_move() {
            debug!("Computer thinking");
            sleep(delay).await;
            app.computer_move()?;
            continue;
        }

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Action::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}
