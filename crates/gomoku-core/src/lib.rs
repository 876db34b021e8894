//! Core gomoku types: board representation, stone placement, and win detection.

mod board;
mod error;
mod history;
mod lines;
mod point;
mod stone;
mod trial;

pub use board::{Board, PrettyBoard};
pub use error::BoardError;
pub use history::{Move, MoveHistory};
pub use lines::Run;
pub use point::{Axis, Point};
pub use stone::Stone;
pub use trial::TrialPlacement;
