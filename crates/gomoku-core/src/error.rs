//! Error types for board construction and stone placement.

/// Errors from creating a [`Board`](crate::board::Board) or placing a stone on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The requested cell lies outside the board.
    #[error("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },
    /// The requested cell already holds a stone.
    #[error("({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The board side length is outside the supported range.
    #[error("board size {size} is outside {min}..={max}")]
    InvalidSize {
        /// Requested side length.
        size: usize,
        /// Smallest supported side length.
        min: usize,
        /// Largest supported side length.
        max: usize,
    },
}
