//! Stone colors.

use std::fmt;
use std::ops::Not;

/// A stone color: Black or White. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// Single-character symbol used in board diagrams.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }
}

impl Not for Stone {
    type Output = Stone;

    #[inline]
    fn not(self) -> Stone {
        self.flip()
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "black"),
            Stone::White => write!(f, "white"),
        }
    }
}
