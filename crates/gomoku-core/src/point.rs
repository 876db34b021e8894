//! Board coordinates and the four line axes.

use std::fmt;

/// A cell on the board, addressed by zero-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    /// Create a point from a row and column.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Point {
        Point { row, col }
    }

    /// Step by `(dr, dc)`, returning `None` if the result leaves a `size`×`size` board.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize, size: usize) -> Option<Point> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Point { row, col })
    }

    /// Chebyshev (king-move) distance between two points.
    #[inline]
    pub fn chebyshev(self, other: Point) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four lines through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

impl Axis {
    /// All axes, in the order lines are scanned.
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// Unit step `(dr, dc)` in the axis' positive direction.
    ///
    /// The negative direction is the negated step.
    #[inline]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}
