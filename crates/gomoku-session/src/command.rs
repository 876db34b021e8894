//! Text protocol command parsing.

use crate::error::ProtocolError;
use crate::state::GameMode;

/// A `set` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// `set size <n>` -- board size for subsequent `new` commands.
    Size(usize),
    /// `set depth <n>` -- cap on the computer's search depth.
    Depth(u8),
}

/// A parsed protocol command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new [size] [pvp|pvc|cvc]` -- start a game.
    New {
        size: Option<usize>,
        mode: Option<GameMode>,
    },
    /// `play <row> <col>` -- place a stone for the human to move.
    Play { row: usize, col: usize },
    /// `undo` -- take back the last move (two against the computer).
    Undo,
    /// `hint` -- suggest a move for the side to move.
    Hint,
    /// `auto` -- play the suggested move for the side to move.
    Auto,
    /// `pause` -- pause or resume a computer-versus-computer game.
    Pause,
    /// `reset` -- abandon the game without starting a new one.
    Reset,
    /// `show` -- print the board.
    Show,
    /// `state` -- print the game state.
    State,
    /// `set <name> <value>`.
    Set(Setting),
    /// `quit` -- exit.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

impl Command {
    /// Return `true` if the command reads or changes the position and so
    /// must wait for an in-flight computer move.
    pub fn waits_for_search(&self) -> bool {
        matches!(
            self,
            Command::Play { .. }
                | Command::Hint
                | Command::Auto
                | Command::Show
                | Command::State
                | Command::Set(_)
        )
    }
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ProtocolError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match name {
        "new" => parse_new(args),
        "play" => {
            let row = parse_number(args.first(), "play", "row")?;
            let col = parse_number(args.get(1), "play", "col")?;
            Ok(Command::Play { row, col })
        }
        "undo" => Ok(Command::Undo),
        "hint" => Ok(Command::Hint),
        "auto" => Ok(Command::Auto),
        "pause" => Ok(Command::Pause),
        "reset" => Ok(Command::Reset),
        "show" => Ok(Command::Show),
        "state" => Ok(Command::State),
        "set" => parse_set(args),
        "quit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(name.to_string())),
    }
}

/// Arguments may come in either order: a number is the size, anything
/// else must be a mode.
fn parse_new(args: &[&str]) -> Result<Command, ProtocolError> {
    let mut size = None;
    let mut mode = None;
    for &arg in args {
        if arg.bytes().all(|b| b.is_ascii_digit()) {
            size = Some(parse_number(Some(&arg), "new", "size")?);
        } else {
            mode = Some(
                arg.parse::<GameMode>()
                    .map_err(|value| ProtocolError::InvalidMode { value })?,
            );
        }
    }
    Ok(Command::New { size, mode })
}

fn parse_set(args: &[&str]) -> Result<Command, ProtocolError> {
    let name = args.first().ok_or(ProtocolError::MissingArgument {
        command: "set",
        argument: "name",
    })?;
    match *name {
        "size" => Ok(Command::Set(Setting::Size(parse_number(args.get(1), "set", "value")?))),
        "depth" => Ok(Command::Set(Setting::Depth(parse_number(args.get(1), "set", "value")?))),
        other => Err(ProtocolError::UnknownSetting {
            name: other.to_string(),
        }),
    }
}

fn parse_number<T: std::str::FromStr>(
    token: Option<&&str>,
    command: &'static str,
    argument: &'static str,
) -> Result<T, ProtocolError> {
    let value = token.ok_or(ProtocolError::MissingArgument { command, argument })?;
    value.parse().map_err(|_| ProtocolError::InvalidNumber {
        value: value.to_string(),
    })
}
