//! Minimax search with alpha-beta pruning.
//!
//! White is always the maximizing side and Black the minimizing side,
//! matching the White-positive [`evaluate`] score.

use gomoku_core::{Board, Move, Stone};

use crate::eval::patterns::FIVE;
use crate::eval::{SCALE, Score, evaluate};
use crate::search::candidates::generate_candidates;
use crate::search::control::SearchControl;

/// Score representing an unreachable upper/lower bound.
pub const INF: Score = Score::MAX / 2;

/// Score of a position won by `winner` with `depth` plies of search left.
///
/// Faster White wins score higher; Black wins score lower the sooner they
/// come, so White prefers the slowest loss.
pub fn win_score(winner: Stone, depth: u8) -> Score {
    let magnitude = (FIVE + Score::from(depth)) * SCALE;
    match winner {
        Stone::White => magnitude,
        Stone::Black => -magnitude,
    }
}

/// Search state threaded through minimax calls.
pub(super) struct SearchContext<'a> {
    /// Total nodes visited.
    pub nodes: u64,
    /// Stop flag and node budget.
    pub control: &'a SearchControl,
    /// Candidates explored below the root.
    pub node_width: usize,
}

/// Minimax with alpha-beta pruning.
///
/// `last` is the move that produced this position; only it can have
/// completed a five, since the parent was not terminal. Every hypothetical
/// stone is placed through [`Board::trial`], so the board is unchanged on
/// return. Returns 0 once the search has been stopped; the caller discards
/// the result.
pub(super) fn minimax(
    board: &mut Board,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    last: Move,
    ctx: &mut SearchContext<'_>,
) -> Score {
    ctx.nodes += 1;

    if ctx.control.should_stop(ctx.nodes) {
        return 0;
    }

    if board.is_winning(last.point, last.stone) {
        return win_score(last.stone, depth);
    }

    if depth == 0 || board.is_full() {
        return evaluate(board);
    }

    let mut candidates = generate_candidates(board);
    candidates.truncate(ctx.node_width);

    if maximizing {
        let mut best = -INF;
        for p in candidates {
            let score = {
                let mut trial = board.trial(p, Stone::White);
                minimax(
                    &mut trial,
                    depth - 1,
                    alpha,
                    beta,
                    false,
                    Move::new(p, Stone::White),
                    ctx,
                )
            };
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INF;
        for p in candidates {
            let score = {
                let mut trial = board.trial(p, Stone::Black);
                minimax(
                    &mut trial,
                    depth - 1,
                    alpha,
                    beta,
                    true,
                    Move::new(p, Stone::Black),
                    ctx,
                )
            };
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
