//! Terminal UI: human against the minimax computer.

mod app;
mod input;
mod ui;

pub use app::{App, Phase};

use crate::config::AppConfig;
use crate::orchestrator::{GameEvent, Orchestrator};
use crate::players::{ComputerPlayer, HumanPlayer, Player};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use strictly_tictactoe::{Mark, Outcome, Position};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

/// A game in flight: the orchestrator task and its channels.
struct Session {
    handle: JoinHandle<Result<Outcome>>,
    human_tx: mpsc::UnboundedSender<Position>,
    event_rx: mpsc::UnboundedReceiver<GameEvent>,
}

impl Session {
    /// Spawns the orchestrator with the human on `human_side`.
    #[instrument(skip(config))]
    fn start(config: &AppConfig, human_side: Mark) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (human_tx, human_rx) = mpsc::unbounded_channel();

        let human: Box<dyn Player> = Box::new(HumanPlayer::new("You", human_rx));
        let computer: Box<dyn Player> = Box::new(ComputerPlayer::new(
            "Computer",
            config.computer().thinking_delay(),
        ));
        let (player_x, player_o) = match human_side {
            Mark::X => (human, computer),
            Mark::O => (computer, human),
        };

        let mut orchestrator = Orchestrator::new(
            *config.game().first_player(),
            player_x,
            player_o,
            event_tx,
        );
        let handle = tokio::spawn(async move { orchestrator.run().await });
        info!("Game session started");

        Self {
            handle,
            human_tx,
            event_rx,
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        debug!("Aborting game session");
        self.handle.abort();
    }
}

/// Runs the terminal UI until the user quits.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    // Log to a file so output does not corrupt the alternate screen.
    let log_file = std::fs::File::create(config.logging().file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.logging().filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Strictly Minimax TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Selects `side` in the app and spawns the matching session.
fn start_game(app: &mut App, config: &AppConfig, side: Mark) -> Option<Session> {
    app.select_side(side).then(|| Session::start(config, side))
}

/// Starts straight away when the configuration fixes the human's side.
fn preset_game(app: &mut App, config: &AppConfig) -> Option<Session> {
    let side = (*config.game().human_side())?;
    start_game(app, config, side)
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
) -> Result<()> {
    let mut app = App::new(*config.game().first_player());
    let mut session = preset_game(&mut app, config);

    loop {
        if let Some(s) = session.as_mut() {
            while let Ok(event) = s.event_rx.try_recv() {
                app.handle_event(event);
            }
            if s.handle.is_finished() && !matches!(app.phase(), Phase::Finished(_)) {
                warn!("Game session ended unexpectedly");
                session = None;
            }
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(50))? {
            tokio::task::yield_now().await;
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let selected = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Ok(());
            }
            KeyCode::Char('n') => {
                session = None;
                app.new_game();
                session = preset_game(&mut app, config);
                None
            }
            KeyCode::Char('x' | 'X') if app.phase() == Phase::AwaitingSelection => {
                session = start_game(&mut app, config, Mark::X);
                None
            }
            KeyCode::Char('o' | 'O') if app.phase() == Phase::AwaitingSelection => {
                session = start_game(&mut app, config, Mark::O);
                None
            }
            KeyCode::Char('h') => {
                app.hint();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => app.confirm_cursor(),
            KeyCode::Char(c) => input::digit_position(c).and_then(|pos| app.human_move(pos)),
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                app.move_cursor(code);
                None
            }
            _ => None,
        };

        if let (Some(pos), Some(s)) = (selected, session.as_ref()) {
            debug!(position = %pos, "Forwarding human move");
            if s.human_tx.send(pos).is_err() {
                warn!("Game session is no longer accepting moves");
            }
        }
    }
}
