//! Game modes, outcomes, and the game state machine's states.

use std::fmt;
use std::str::FromStr;

use gomoku_core::Stone;

/// Who controls each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// Two humans.
    #[default]
    PlayerVsPlayer,
    /// Human plays Black, the computer plays White.
    VsComputer,
    /// The computer plays both sides.
    ComputerVsComputer,
}

impl GameMode {
    /// Return `true` if the computer plays `stone` in this mode.
    pub fn computer_plays(self, stone: Stone) -> bool {
        match self {
            GameMode::PlayerVsPlayer => false,
            GameMode::VsComputer => stone == Stone::White,
            GameMode::ComputerVsComputer => true,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::PlayerVsPlayer => write!(f, "pvp"),
            GameMode::VsComputer => write!(f, "pvc"),
            GameMode::ComputerVsComputer => write!(f, "cvc"),
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pvp" => Ok(GameMode::PlayerVsPlayer),
            "pvc" => Ok(GameMode::VsComputer),
            "cvc" => Ok(GameMode::ComputerVsComputer),
            other => Err(other.to_string()),
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    BlackWins,
    WhiteWins,
    Draw,
}

impl Outcome {
    /// The outcome of `stone` completing five.
    pub const fn won_by(stone: Stone) -> Outcome {
        match stone {
            Stone::Black => Outcome::BlackWins,
            Stone::White => Outcome::WhiteWins,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::BlackWins => write!(f, "black-wins"),
            Outcome::WhiteWins => write!(f, "white-wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    NotStarted,
    /// The game is running and `Stone` is to move.
    InProgress(Stone),
    Ended(Outcome),
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::NotStarted => write!(f, "not-started"),
            GameState::InProgress(stone) => write!(f, "in-progress {stone}"),
            GameState::Ended(outcome) => write!(f, "ended {outcome}"),
        }
    }
}
