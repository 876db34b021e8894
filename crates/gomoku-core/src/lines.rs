//! Run counting along the four axes, and win detection built on it.

use crate::board::Board;
use crate::point::{Axis, Point};
use crate::stone::Stone;

/// A line through a cell: its combined run length and which ends are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Consecutive stones through the cell, the cell itself counted once.
    pub length: usize,
    /// Number of run ends (0..=2) followed by an empty in-bounds cell.
    pub open_ends: u8,
}

impl Board {
    /// Count consecutive `stone` cells starting at `p` and stepping by `(dr, dc)`.
    ///
    /// `p` itself is included; the count is 0 when `p` does not hold `stone`.
    pub fn count_consecutive(&self, p: Point, dr: isize, dc: isize, stone: Stone) -> usize {
        let mut count = 0;
        let mut cursor = Some(p);
        while let Some(q) = cursor {
            if self.stone_at(q) != Some(stone) {
                break;
            }
            count += 1;
            cursor = q.offset(dr, dc, self.size());
        }
        count
    }

    /// Return `true` if the first cell past the `stone` run from `p` in direction
    /// `(dr, dc)` is on the board and empty.
    pub fn is_open(&self, p: Point, dr: isize, dc: isize, stone: Stone) -> bool {
        let mut cursor = Some(p);
        while let Some(q) = cursor {
            if self.stone_at(q) != Some(stone) {
                return self.is_empty(q);
            }
            cursor = q.offset(dr, dc, self.size());
        }
        false
    }

    /// Combined run length of `stone` through `p` along `axis`.
    pub fn line_length(&self, p: Point, axis: Axis, stone: Stone) -> usize {
        let (dr, dc) = axis.step();
        (self.count_consecutive(p, dr, dc, stone) + self.count_consecutive(p, -dr, -dc, stone))
            .saturating_sub(1)
    }

    /// The run of `stone` through `p` along `axis`, with its open ends.
    pub fn run(&self, p: Point, axis: Axis, stone: Stone) -> Run {
        let (dr, dc) = axis.step();
        let open_ends =
            u8::from(self.is_open(p, dr, dc, stone)) + u8::from(self.is_open(p, -dr, -dc, stone));
        Run {
            length: self.line_length(p, axis, stone),
            open_ends,
        }
    }

    /// Return `true` if `stone` at `p` completes five or more in a row on any axis.
    pub fn is_winning(&self, p: Point, stone: Stone) -> bool {
        Axis::ALL
            .into_iter()
            .any(|axis| self.line_length(p, axis, stone) >= Board::WIN_LENGTH)
    }
}
