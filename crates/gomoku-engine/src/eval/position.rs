//! Per-cell scoring across the four axes.

use gomoku_core::{Axis, Board, Point, Stone};

use crate::eval::patterns::{placement_run_score, run_score};

/// Positional score of the `stone` at the occupied cell `p`.
///
/// Sums [`run_score`] over the four axes through `p`.
pub fn position_score(board: &Board, p: Point, stone: Stone) -> i64 {
    Axis::ALL
        .into_iter()
        .map(|axis| run_score(board.run(p, axis, stone)))
        .sum()
}

/// Score of placing `stone` at the empty cell `p`, used for move ordering.
///
/// The stone is placed for the duration of the call only.
pub fn placement_score(board: &mut Board, p: Point, stone: Stone) -> i64 {
    let trial = board.trial(p, stone);
    Axis::ALL
        .into_iter()
        .map(|axis| placement_run_score(trial.run(p, axis, stone)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_stone_scores_one_per_axis() {
        let mut board = Board::new(15).unwrap();
        board.place(7, 7, Stone::White).unwrap();
        assert_eq!(position_score(&board, Point::new(7, 7), Stone::White), 4);
    }

    #[test]
    fn blocked_four() {
        let mut board = Board::new(15).unwrap();
        for c in 4..8 {
            board.place(7, c, Stone::White).unwrap();
        }
        board.place(7, 3, Stone::Black).unwrap();
        // 2000 for the half-open four plus 1 on each other axis.
        assert_eq!(position_score(&board, Point::new(7, 5), Stone::White), 2_003);
    }

    #[test]
    fn placement_next_to_stone() {
        let mut board = Board::new(15).unwrap();
        board.place(7, 7, Stone::Black).unwrap();
        let before = board.clone();
        // Open two horizontally, singles elsewhere.
        assert_eq!(placement_score(&mut board, Point::new(7, 8), Stone::Black), 130);
        assert_eq!(placement_score(&mut board, Point::new(7, 8), Stone::White), 40);
        assert_eq!(board, before);
    }

    #[test]
    fn placement_completing_five() {
        let mut board = Board::new(9).unwrap();
        for c in 0..4 {
            board.place(4, c, Stone::White).unwrap();
        }
        let score = placement_score(&mut board, Point::new(4, 4), Stone::White);
        assert_eq!(score, 100_000 + 3 * 10);
    }
}
