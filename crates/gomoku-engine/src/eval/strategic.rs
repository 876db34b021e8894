//! Multi-threat bonuses.
//!
//! Three-stone runs are tallied from every stone of the player along every
//! axis, so a single run of three contributes once per stone it contains.

use gomoku_core::{Axis, Board, Stone};

/// Bonus when the tally of open threes reaches [`DOUBLE_THREAT_MIN`].
pub const DOUBLE_THREAT_BONUS: i64 = 3_000;

/// Bonus when the tally of all threes reaches [`MANY_THREES_MIN`].
pub const MANY_THREES_BONUS: i64 = 1_000;

const DOUBLE_THREAT_MIN: usize = 2;
const MANY_THREES_MIN: usize = 3;

/// Tallies of exactly-three runs for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreeCounts {
    /// Runs of exactly three, open or not.
    pub threes: usize,
    /// Runs of exactly three open on both ends.
    pub open_threes: usize,
}

/// Count three-stone runs through each of `stone`'s stones.
pub fn count_threes(board: &Board, stone: Stone) -> ThreeCounts {
    let mut counts = ThreeCounts::default();
    for p in board.stones_of(stone) {
        for axis in Axis::ALL {
            let run = board.run(p, axis, stone);
            if run.length == 3 {
                counts.threes += 1;
                if run.open_ends == 2 {
                    counts.open_threes += 1;
                }
            }
        }
    }
    counts
}

/// Strategic bonus for `stone`, unweighted.
pub fn strategic_bonus(board: &Board, stone: Stone) -> i64 {
    let counts = count_threes(board, stone);
    let mut bonus = 0;
    if counts.open_threes >= DOUBLE_THREAT_MIN {
        bonus += DOUBLE_THREAT_BONUS;
    }
    if counts.threes >= MANY_THREES_MIN {
        bonus += MANY_THREES_BONUS;
    }
    bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(usize, usize, Stone)]) -> Board {
        let mut board = Board::new(15).unwrap();
        for &(r, c, s) in stones {
            board.place(r, c, s).unwrap();
        }
        board
    }

    #[test]
    fn empty_board_has_no_bonus() {
        let board = Board::new(15).unwrap();
        assert_eq!(count_threes(&board, Stone::White), ThreeCounts::default());
        assert_eq!(strategic_bonus(&board, Stone::White), 0);
    }

    #[test]
    fn open_three_is_tallied_per_stone() {
        let board = board_with(&[
            (7, 6, Stone::White),
            (7, 7, Stone::White),
            (7, 8, Stone::White),
        ]);
        let counts = count_threes(&board, Stone::White);
        assert_eq!(counts, ThreeCounts { threes: 3, open_threes: 3 });
        assert_eq!(
            strategic_bonus(&board, Stone::White),
            DOUBLE_THREAT_BONUS + MANY_THREES_BONUS
        );
        assert_eq!(strategic_bonus(&board, Stone::Black), 0);
    }

    #[test]
    fn closed_three_earns_only_count_bonus() {
        let board = board_with(&[
            (7, 5, Stone::Black),
            (7, 6, Stone::White),
            (7, 7, Stone::White),
            (7, 8, Stone::White),
            (7, 9, Stone::Black),
        ]);
        let counts = count_threes(&board, Stone::White);
        assert_eq!(counts, ThreeCounts { threes: 3, open_threes: 0 });
        assert_eq!(strategic_bonus(&board, Stone::White), MANY_THREES_BONUS);
    }

    #[test]
    fn four_is_not_a_three() {
        let board = board_with(&[
            (3, 3, Stone::White),
            (4, 4, Stone::White),
            (5, 5, Stone::White),
            (6, 6, Stone::White),
        ]);
        assert_eq!(count_threes(&board, Stone::White).threes, 0);
    }
}
