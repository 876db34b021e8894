//! Scoped speculative placement.

use std::ops::{Deref, DerefMut};

use crate::board::Board;
use crate::point::Point;

/// A stone placed by [`Board::trial`], removed again when the guard drops.
///
/// The guard dereferences to the board, so lookahead code can read it,
/// nest further trials, and recurse on `&mut *guard`.
pub struct TrialPlacement<'a> {
    board: &'a mut Board,
    point: Point,
}

impl<'a> TrialPlacement<'a> {
    pub(crate) fn new(board: &'a mut Board, point: Point) -> Self {
        Self { board, point }
    }

    /// The cell holding the trial stone.
    #[inline]
    pub fn point(&self) -> Point {
        self.point
    }
}

impl Deref for TrialPlacement<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialPlacement<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialPlacement<'_> {
    fn drop(&mut self) {
        self.board.clear(self.point.row, self.point.col);
    }
}
