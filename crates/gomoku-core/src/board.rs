//! The game board: an N×N grid of optional stones.

use std::fmt;

use crate::error::BoardError;
use crate::point::Point;
use crate::stone::Stone;
use crate::trial::TrialPlacement;

/// Complete board state.
///
/// The grid is the only state; there are no derived caches, so clearing a
/// cell always restores the exact prior position.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Side length.
    size: usize,
    /// Row-major cells, `size * size` entries.
    cells: Vec<Option<Stone>>,
}

impl Board {
    /// Smallest supported side length.
    pub const MIN_SIZE: usize = 5;

    /// Largest supported side length.
    pub const MAX_SIZE: usize = 25;

    /// Side length used when none is configured.
    pub const DEFAULT_SIZE: usize = 15;

    /// Number of stones in a row needed to win.
    pub const WIN_LENGTH: usize = 5;

    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Result<Board, BoardError> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize {
                size,
                min: Self::MIN_SIZE,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Board {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Return the side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the center cell (rounded down on even sizes).
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.size / 2, self.size / 2)
    }

    /// Return `true` if `(row, col)` lies on the board.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        debug_assert!(self.contains(p.row, p.col), "{p} off the board");
        p.row * self.size + p.col
    }

    /// Return the stone at `p`, if any.
    #[inline]
    pub fn stone_at(&self, p: Point) -> Option<Stone> {
        self.cells[self.index(p)]
    }

    /// Return `true` if `p` holds no stone.
    #[inline]
    pub fn is_empty(&self, p: Point) -> bool {
        self.stone_at(p).is_none()
    }

    /// Place `stone` at `(row, col)`.
    ///
    /// Fails without touching the board if the cell is off the board or occupied.
    pub fn place(&mut self, row: usize, col: usize, stone: Stone) -> Result<(), BoardError> {
        if !self.contains(row, col) {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let idx = self.index(Point::new(row, col));
        if self.cells[idx].is_some() {
            return Err(BoardError::CellOccupied { row, col });
        }
        self.cells[idx] = Some(stone);
        Ok(())
    }

    /// Reset `(row, col)` to empty. Off-board coordinates are ignored.
    pub fn clear(&mut self, row: usize, col: usize) {
        if self.contains(row, col) {
            let idx = self.index(Point::new(row, col));
            self.cells[idx] = None;
        }
    }

    /// Temporarily place `stone` at the empty cell `p`.
    ///
    /// The returned guard dereferences to this board and clears `p` when
    /// dropped, so the board is restored on every exit path.
    ///
    /// # Panics
    ///
    /// Panics if `p` is occupied or off the board.
    pub fn trial(&mut self, p: Point, stone: Stone) -> TrialPlacement<'_> {
        assert!(self.is_empty(p), "trial placement on occupied {p}");
        let idx = self.index(p);
        self.cells[idx] = Some(stone);
        TrialPlacement::new(self, p)
    }

    /// Return `true` if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Count the stones on the board.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate over every cell in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let size = self.size;
        (0..size * size).map(move |i| Point::new(i / size, i % size))
    }

    /// Iterate over empty cells in row-major order.
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(|&p| self.is_empty(p))
    }

    /// Iterate over the cells holding `stone` in row-major order.
    pub fn stones_of(&self, stone: Stone) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(move |&p| self.stone_at(p) == Some(stone))
    }

    /// Return `true` if any stone lies within Chebyshev distance `radius` of `p`.
    pub fn has_neighbor(&self, p: Point, radius: usize) -> bool {
        let r = radius as isize;
        for dr in -r..=r {
            for dc in -r..=r {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(n) = p.offset(dr, dc, self.size)
                    && !self.is_empty(n)
                {
                    return true;
                }
            }
        }
        false
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({}x{}, {} stones)", self.size, self.size, self.stone_count())
    }
}

/// Wrapper for printing a board as a grid with row and column labels.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        write!(f, "   ")?;
        for col in 0..board.size {
            write!(f, "{:>3}", col)?;
        }
        for row in 0..board.size {
            writeln!(f)?;
            write!(f, "{row:>3}")?;
            for col in 0..board.size {
                let c = board
                    .stone_at(Point::new(row, col))
                    .map_or('.', Stone::symbol);
                write!(f, "{c:>3}")?;
            }
        }
        Ok(())
    }
}
