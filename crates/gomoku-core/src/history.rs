//! Recorded moves and the undo stack.

use std::fmt;

use tracing::trace;

use crate::board::Board;
use crate::point::Point;
use crate::stone::Stone;

/// A stone placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub point: Point,
    pub stone: Stone,
}

impl Move {
    #[inline]
    pub const fn new(point: Point, stone: Stone) -> Move {
        Move { point, stone }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.point.row, self.point.col, self.stone)
    }
}

/// Moves in the order they were played.
///
/// Only [`push`](Self::push) and [`undo`](Self::undo) change it, and `undo`
/// clears the popped cell so the board returns to its exact prior state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move that has already been placed on the board.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Pop the last move and clear its cell on `board`.
    pub fn undo(&mut self, board: &mut Board) -> Option<Move> {
        let mv = self.moves.pop()?;
        board.clear(mv.point.row, mv.point.col);
        trace!(%mv, "move taken back");
        Some(mv)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveHistory};
    use crate::board::Board;
    use crate::point::Point;
    use crate::stone::Stone;

    fn play(board: &mut Board, history: &mut MoveHistory, row: usize, col: usize, stone: Stone) {
        board.place(row, col, stone).unwrap();
        history.push(Move::new(Point::new(row, col), stone));
    }

    #[test]
    fn undo_pops_in_reverse_order() {
        let mut board = Board::new(9).unwrap();
        let mut history = MoveHistory::new();
        play(&mut board, &mut history, 4, 4, Stone::Black);
        play(&mut board, &mut history, 4, 5, Stone::White);

        let last = history.undo(&mut board).unwrap();
        assert_eq!(last, Move::new(Point::new(4, 5), Stone::White));
        assert!(board.is_empty(Point::new(4, 5)));
        assert_eq!(history.len(), 1);
        assert_eq!(board.stone_at(Point::new(4, 4)), Some(Stone::Black));
    }

    #[test]
    fn undo_then_replay_round_trips() {
        let mut board = Board::new(9).unwrap();
        let mut history = MoveHistory::new();
        play(&mut board, &mut history, 0, 0, Stone::Black);
        play(&mut board, &mut history, 8, 8, Stone::White);
        let snapshot = (board.clone(), history.clone());

        let mv = history.undo(&mut board).unwrap();
        play(&mut board, &mut history, mv.point.row, mv.point.col, mv.stone);
        assert_eq!((board, history), snapshot);
    }

    #[test]
    fn undo_on_empty_history_is_none() {
        let mut board = Board::new(5).unwrap();
        let mut history = MoveHistory::new();
        assert!(history.undo(&mut board).is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn display() {
        let mv = Move::new(Point::new(7, 3), Stone::White);
        assert_eq!(mv.to_string(), "7 3 white");
    }
}
