//! Strictly Minimax - tic-tac-toe against an exhaustive minimax opponent.
//!
//! The game rules and the search live in [`strictly_tictactoe`]; this crate
//! adds the pieces around them.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for turn order, thinking delay and logging
//! - **Players**: async [`Player`] trait with human and computer implementations
//! - **Orchestrator**: drives a game between two players and emits [`GameEvent`]s
//! - **TUI**: ratatui front end where a human plays the computer
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use strictly_minimax::{ComputerPlayer, Orchestrator};
//! use strictly_tictactoe::{Mark, Outcome};
//! use tokio::sync::mpsc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let (event_tx, _event_rx) = mpsc::unbounded_channel();
//! let mut orchestrator = Orchestrator::new(
//!     Mark::X,
//!     Box::new(ComputerPlayer::new("Cross", Duration::ZERO)),
//!     Box::new(ComputerPlayer::new("Nought", Duration::ZERO)),
//!     event_tx,
//! );
//! assert_eq!(orchestrator.run().await?, Outcome::Draw);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod players;
mod tui;

pub use config::{
    AppConfig, ComputerConfig, ConfigError, GameConfig, LoggingConfig, MAX_THINKING_DELAY_MS,
};
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use tui::{App, Phase, run_tui};
