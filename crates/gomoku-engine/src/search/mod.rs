//! Move selection: tactical short-circuits, opening book, and minimax.

pub mod candidates;
pub mod control;
pub mod minimax;

use std::fmt;

use tracing::debug;

use gomoku_core::{Board, Move, Point, Stone};

use crate::config::SearchConfig;
use crate::eval::{Score, evaluate};
use candidates::{depth_for, find_winning_move, generate_candidates, opening_move};
use control::SearchControl;
use minimax::{INF, SearchContext, minimax, win_score};

/// How a move was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The move completes five for the side to move.
    ImmediateWin,
    /// The move occupies the only cell where the opponent would complete five.
    ForcedBlock,
    /// Center-biased opening on a nearly empty board.
    Opening,
    /// Picked by minimax.
    Searched,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::ImmediateWin => write!(f, "win"),
            Decision::ForcedBlock => write!(f, "block"),
            Decision::Opening => write!(f, "opening"),
            Decision::Searched => write!(f, "search"),
        }
    }
}

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen cell.
    pub point: Point,
    /// The side the move is for.
    pub stone: Stone,
    /// Score from White's perspective, in hundredths of a point.
    pub score: Score,
    /// How the move was chosen.
    pub decision: Decision,
    /// Depth searched (0 when no search ran).
    pub depth: u8,
    /// Nodes visited.
    pub nodes: u64,
}

impl SearchResult {
    /// The chosen move.
    pub fn to_move(&self) -> Move {
        Move::new(self.point, self.stone)
    }
}

/// Chooses moves for either side.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Create a searcher with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Choose a move for `stone`.
    ///
    /// In order: complete a five, block the opponent's five, play the
    /// opening, or run minimax. The board may be mutated during lookahead
    /// but is identical on return.
    ///
    /// Returns `None` if the board is full or the search was stopped.
    pub fn choose_move(
        &self,
        board: &mut Board,
        stone: Stone,
        control: &SearchControl,
    ) -> Option<SearchResult> {
        if board.is_full() {
            return None;
        }

        let quick = |point: Point, decision: Decision, score: Score| {
            debug!(%stone, %point, %decision, "move chosen without search");
            SearchResult {
                point,
                stone,
                score,
                decision,
                depth: 0,
                nodes: 0,
            }
        };

        if let Some(point) = find_winning_move(board, stone) {
            return Some(quick(point, Decision::ImmediateWin, win_score(stone, 0)));
        }

        if let Some(point) = find_winning_move(board, !stone) {
            let score = evaluate(&board.trial(point, stone));
            return Some(quick(point, Decision::ForcedBlock, score));
        }

        if let Some(point) = opening_move(board) {
            let score = evaluate(&board.trial(point, stone));
            return Some(quick(point, Decision::Opening, score));
        }

        self.search(board, stone, control)
    }

    /// Depth-limited minimax over the top root candidates.
    fn search(
        &self,
        board: &mut Board,
        stone: Stone,
        control: &SearchControl,
    ) -> Option<SearchResult> {
        let mut candidates = generate_candidates(board);
        let mut depth = depth_for(candidates.len());
        if let Some(cap) = self.config.depth_cap {
            depth = depth.min(cap.max(1));
        }
        candidates.truncate(self.config.root_width);

        let mut ctx = SearchContext {
            nodes: 0,
            control,
            node_width: self.config.node_width,
        };

        // White maximizes, Black minimizes; ties keep the earlier candidate.
        let maximizing = stone == Stone::White;
        let mut best_point = *candidates.first()?;
        let mut best_score = if maximizing { -INF } else { INF };

        for point in candidates {
            let score = {
                let mut trial = board.trial(point, stone);
                minimax(
                    &mut trial,
                    depth - 1,
                    -INF,
                    INF,
                    !maximizing,
                    Move::new(point, stone),
                    &mut ctx,
                )
            };

            if control.is_stopped() {
                debug!(nodes = ctx.nodes, "search stopped, result discarded");
                return None;
            }

            let better = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if better {
                best_score = score;
                best_point = point;
            }
        }

        debug!(
            %stone,
            point = %best_point,
            score = best_score,
            depth,
            nodes = ctx.nodes,
            elapsed_ms = control.elapsed().as_millis() as u64,
            "search complete"
        );

        Some(SearchResult {
            point: best_point,
            stone,
            score: best_score,
            decision: Decision::Searched,
            depth,
            nodes: ctx.nodes,
        })
    }
}
