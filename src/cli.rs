//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strictly_tictactoe::{Board, Mark};

/// Strictly Minimax - tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "strictly_minimax.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer in the terminal UI
    Play {
        /// Mark you play; asks before each game when omitted
        #[arg(long, value_enum)]
        side: Option<SideArg>,

        /// Mark that opens the game
        #[arg(long, value_enum)]
        first: Option<SideArg>,

        /// Computer thinking delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the square the computer would play
    BestMove {
        /// Board as nine cells, e.g. "XX./OO./..."
        #[arg(long)]
        board: Board,

        /// Mark to search for
        #[arg(long, value_enum)]
        side: SideArg,

        /// Print every candidate with its score as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the outcome of a board
    Evaluate {
        /// Board as nine cells, e.g. "XOX/OXO/X.."
        #[arg(long)]
        board: Board,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the computer play both sides
    SelfPlay {
        /// Mark that opens the game
        #[arg(long, value_enum)]
        first: Option<SideArg>,
    },

    /// Print the default configuration file
    DefaultConfig,
}

/// Mark selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    /// Crosses
    #[value(name = "x", alias = "X")]
    X,
    /// Noughts
    #[value(name = "o", alias = "O")]
    O,
}

impl From<SideArg> for Mark {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::X => Mark::X,
            SideArg::O => Mark::O,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::Position;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["strictly_minimax"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("strictly_minimax.toml"));
    }

    #[test]
    fn test_parses_best_move() {
        let cli = Cli::parse_from([
            "strictly_minimax",
            "best-move",
            "--board",
            "XX./OO./...",
            "--side",
            "o",
        ]);
        let Some(Command::BestMove { board, side, json }) = cli.command else {
            panic!("expected best-move");
        };
        assert_eq!(Mark::from(side), Mark::O);
        assert!(!json);
        assert!(board.is_empty(Position::TopRight));
    }

    #[test]
    fn test_rejects_bad_board() {
        let result = Cli::try_parse_from(["strictly_minimax", "evaluate", "--board", "XX"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_play_overrides() {
        let cli = Cli::parse_from([
            "strictly_minimax",
            "--config",
            "other.toml",
            "play",
            "--side",
            "X",
            "--delay-ms",
            "0",
        ]);
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        let Some(Command::Play { side, first, delay_ms }) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(side, Some(SideArg::X));
        assert_eq!(first, None);
        assert_eq!(delay_ms, Some(0));
    }
}
