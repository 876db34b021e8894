//! Static evaluation of gomoku positions.
//!
//! Scores are from White's perspective (positive = White ahead) and are
//! kept in hundredths of a point so that Black's 1.05 weighting stays exact
//! in integer arithmetic.

pub mod patterns;
pub mod position;
pub mod strategic;

use gomoku_core::{Board, Stone};

use position::position_score;
use strategic::strategic_bonus;

/// Evaluation score in hundredths of a point, White-positive.
pub type Score = i64;

/// Multiplier from points to [`Score`] units for White's terms.
pub const SCALE: Score = 100;

/// Multiplier for Black's terms: 1.05 in [`Score`] units.
pub const DEFENSE_WEIGHT: Score = 105;

/// Evaluate the whole board from White's perspective.
///
/// Sums the positional score of every White stone, subtracts 1.05 times the
/// positional score of every Black stone, then adds White's strategic bonus
/// and subtracts Black's at the same 1.05 weight.
pub fn evaluate(board: &Board) -> Score {
    let mut white = 0;
    let mut black = 0;
    for p in board.points() {
        match board.stone_at(p) {
            Some(Stone::White) => white += position_score(board, p, Stone::White),
            Some(Stone::Black) => black += position_score(board, p, Stone::Black),
            None => {}
        }
    }

    white += strategic_bonus(board, Stone::White);
    black += strategic_bonus(board, Stone::Black);

    white * SCALE - black * DEFENSE_WEIGHT
}
