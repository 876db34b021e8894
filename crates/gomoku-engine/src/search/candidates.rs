//! Candidate generation and move ordering.

use gomoku_core::{Board, Point, Stone};

use crate::eval::position::placement_score;

/// Empty cells farther than this (Chebyshev) from every stone are skipped.
pub const NEIGHBOR_RADIUS: usize = 2;

/// The opening book applies while the board holds at most this many stones.
pub const OPENING_MAX_STONES: usize = 2;

/// Offsets tried around the center when it is taken.
const NEAR_CENTER: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
];

/// Candidate moves, best first.
///
/// Empty cells near a stone are scored by the placement heuristic for both
/// colors and sorted descending; the sort is stable, so ties keep row-major
/// order. If no cell qualifies, every empty cell is returned in row-major
/// order.
pub fn generate_candidates(board: &mut Board) -> Vec<Point> {
    let near: Vec<Point> = board
        .empty_points()
        .filter(|&p| board.has_neighbor(p, NEIGHBOR_RADIUS))
        .collect();

    if near.is_empty() {
        return board.empty_points().collect();
    }

    let mut scored: Vec<(Point, i64)> = near
        .into_iter()
        .map(|p| {
            let score =
                placement_score(board, p, Stone::White) + placement_score(board, p, Stone::Black);
            (p, score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(p, _)| p).collect()
}

/// Opening move for a nearly empty board.
///
/// Returns the center, or the first free cell next to it, while the board
/// holds at most [`OPENING_MAX_STONES`] stones; `None` otherwise.
pub fn opening_move(board: &Board) -> Option<Point> {
    if board.stone_count() > OPENING_MAX_STONES {
        return None;
    }
    let center = board.center();
    if board.is_empty(center) {
        return Some(center);
    }
    NEAR_CENTER
        .iter()
        .filter_map(|&(dr, dc)| center.offset(dr, dc, board.size()))
        .find(|&p| board.is_empty(p))
}

/// First empty cell, in row-major order, where `stone` would complete five.
pub fn find_winning_move(board: &mut Board, stone: Stone) -> Option<Point> {
    let empties: Vec<Point> = board.empty_points().collect();
    empties.into_iter().find(|&p| {
        let trial = board.trial(p, stone);
        trial.is_winning(p, stone)
    })
}

/// Search depth for a position with `candidates` candidate moves.
///
/// Fewer candidates means a narrower tree, so the search goes deeper.
pub fn depth_for(candidates: usize) -> u8 {
    if candidates > 200 {
        4
    } else if candidates > 100 {
        5
    } else {
        6
    }
}
