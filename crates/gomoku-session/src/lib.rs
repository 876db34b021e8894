//! Game sessions and the line protocol for gomoku.

pub mod command;
pub mod driver;
pub mod error;
pub mod session;
pub mod state;

pub use command::{Command, Setting, parse_command};
pub use driver::Driver;
pub use error::{ProtocolError, SessionError};
pub use session::{GameSession, SessionConfig};
pub use state::{GameMode, GameState, Outcome};
