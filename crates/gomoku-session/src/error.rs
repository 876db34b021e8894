//! Session and protocol errors.

use gomoku_core::BoardError;
use gomoku_engine::ConfigError;

use crate::state::GameMode;

/// Errors from operations on a [`GameSession`](crate::session::GameSession).
///
/// A rejected operation leaves the board, history and state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The placement itself was illegal.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// A move was attempted before a game started or after it ended.
    #[error("no game in progress")]
    GameNotActive,

    /// The side to move is played by the computer.
    #[error("it is the computer's turn")]
    NotHumanTurn,

    /// The operation does not apply to the current mode.
    #[error("not available in {mode} mode")]
    WrongMode {
        /// The session's mode.
        mode: GameMode,
    },

    /// The search was stopped before it chose a move.
    #[error("search stopped before choosing a move")]
    SearchStopped,
}

/// Errors from parsing or executing text protocol commands.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// A command is missing a required argument.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// The command name.
        command: &'static str,
        /// The missing argument.
        argument: &'static str,
    },

    /// A numeric argument could not be parsed.
    #[error("invalid number: {value}")]
    InvalidNumber {
        /// The offending token.
        value: String,
    },

    /// A mode argument was not `pvp`, `pvc` or `cvc`.
    #[error("invalid mode: {value}")]
    InvalidMode {
        /// The offending token.
        value: String,
    },

    /// `set` named an unknown setting.
    #[error("unknown setting: {name}")]
    UnknownSetting {
        /// The setting name.
        name: String,
    },

    /// A setting value was rejected.
    #[error("invalid search setting: {source}")]
    Config {
        /// The underlying configuration error.
        #[from]
        source: ConfigError,
    },

    /// A session operation failed.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// An I/O error occurred while reading commands or writing replies.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl From<BoardError> for ProtocolError {
    fn from(err: BoardError) -> Self {
        ProtocolError::Session(SessionError::Board(err))
    }
}
