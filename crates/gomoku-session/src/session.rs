//! The game state machine: turn order, win and draw detection, undo.

use tracing::{debug, info};

use gomoku_core::{Board, Move, MoveHistory, Point, Stone};
use gomoku_engine::{SearchControl, SearchResult, Searcher};

use crate::error::SessionError;
use crate::state::{GameMode, GameState, Outcome};

/// Settings applied when a game starts without explicit arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Side length of new boards.
    pub board_size: usize,
    /// Mode of new games.
    pub mode: GameMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_size: Board::DEFAULT_SIZE,
            mode: GameMode::default(),
        }
    }
}

/// One game of gomoku and everything needed to play it.
///
/// Every successful mutation bumps [`generation`](Self::generation), so a
/// search started against an older position can be recognised as stale.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    history: MoveHistory,
    state: GameState,
    mode: GameMode,
    paused: bool,
    last_outcome: Option<Outcome>,
    generation: u64,
}

impl GameSession {
    /// Create a session with an empty board that has not started yet.
    pub fn new(config: &SessionConfig) -> Result<Self, SessionError> {
        Ok(Self {
            board: Board::new(config.board_size)?,
            history: MoveHistory::new(),
            state: GameState::NotStarted,
            mode: config.mode,
            paused: false,
            last_outcome: None,
            generation: 0,
        })
    }

    /// Start a fresh game: empty `size` board, empty history, Black to move.
    ///
    /// On an invalid size nothing changes.
    pub fn new_game(&mut self, size: usize, mode: GameMode) -> Result<(), SessionError> {
        self.board = Board::new(size)?;
        self.history.clear();
        self.mode = mode;
        self.paused = false;
        self.state = GameState::InProgress(Stone::Black);
        self.generation += 1;
        info!(size, %mode, "new game");
        Ok(())
    }

    /// Abandon the current game and return to [`GameState::NotStarted`],
    /// keeping the board size and mode.
    pub fn reset(&mut self) {
        while self.history.undo(&mut self.board).is_some() {}
        self.paused = false;
        self.state = GameState::NotStarted;
        self.generation += 1;
        debug!("session reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Outcome of the most recently finished game, kept across new games.
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Incremented by every mutation of the position or mode.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The side to move, if a game is in progress.
    pub fn active_player(&self) -> Option<Stone> {
        match self.state {
            GameState::InProgress(stone) => Some(stone),
            _ => None,
        }
    }

    /// Return `true` if the computer should move now.
    pub fn is_computer_turn(&self) -> bool {
        match self.state {
            GameState::InProgress(stone) => self.mode.computer_plays(stone) && !self.paused,
            _ => false,
        }
    }

    /// The side to move, provided a human controls it.
    pub fn human_to_move(&self) -> Result<Stone, SessionError> {
        let stone = self.active_player().ok_or(SessionError::GameNotActive)?;
        if self.mode.computer_plays(stone) {
            return Err(SessionError::NotHumanTurn);
        }
        Ok(stone)
    }

    /// Place a stone for the human side to move.
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<GameState, SessionError> {
        self.human_to_move()?;
        self.play(row, col)
    }

    /// Place a stone chosen by the computer for the side to move.
    pub fn apply_ai_move(&mut self, point: Point) -> Result<GameState, SessionError> {
        self.play(point.row, point.col)
    }

    /// Choose a move for the side to move without changing the position.
    ///
    /// The board is searched in place and restored before returning.
    pub fn request_ai_move(
        &mut self,
        searcher: &Searcher,
        control: &SearchControl,
    ) -> Result<SearchResult, SessionError> {
        let stone = self.active_player().ok_or(SessionError::GameNotActive)?;
        searcher
            .choose_move(&mut self.board, stone, control)
            .ok_or(SessionError::SearchStopped)
    }

    /// Suggest a move for the human side to move.
    pub fn hint(
        &mut self,
        searcher: &Searcher,
        control: &SearchControl,
    ) -> Result<SearchResult, SessionError> {
        self.human_to_move()?;
        self.request_ai_move(searcher, control)
    }

    /// Take back the last move, or the last two against the computer when
    /// the human is to move. Returns the number of moves removed.
    pub fn undo(&mut self) -> usize {
        let GameState::InProgress(to_move) = self.state else {
            return 0;
        };

        let count = if self.mode == GameMode::VsComputer
            && to_move == Stone::Black
            && self.history.len() >= 2
        {
            2
        } else {
            1
        };

        let mut removed = 0;
        let mut next = to_move;
        for _ in 0..count {
            match self.history.undo(&mut self.board) {
                Some(mv) => {
                    next = mv.stone;
                    removed += 1;
                }
                None => break,
            }
        }

        if removed > 0 {
            self.state = GameState::InProgress(next);
            self.generation += 1;
            debug!(removed, to_move = %next, "undo");
        }
        removed
    }

    /// Pause or resume a computer-versus-computer game. Returns the new
    /// paused flag.
    pub fn toggle_pause(&mut self) -> Result<bool, SessionError> {
        if self.mode != GameMode::ComputerVsComputer {
            return Err(SessionError::WrongMode { mode: self.mode });
        }
        self.active_player().ok_or(SessionError::GameNotActive)?;
        self.paused = !self.paused;
        self.generation += 1;
        info!(paused = self.paused, "pause toggled");
        Ok(self.paused)
    }

    /// Hand Black to a human in a paused computer-versus-computer game,
    /// continuing as [`GameMode::VsComputer`].
    pub fn take_over(&mut self) -> Result<(), SessionError> {
        if self.mode != GameMode::ComputerVsComputer || !self.paused {
            return Err(SessionError::WrongMode { mode: self.mode });
        }
        self.mode = GameMode::VsComputer;
        self.paused = false;
        self.generation += 1;
        info!("human took over black");
        Ok(())
    }

    /// Place a stone for the side to move, then settle win, draw, or turn.
    fn play(&mut self, row: usize, col: usize) -> Result<GameState, SessionError> {
        let GameState::InProgress(stone) = self.state else {
            return Err(SessionError::GameNotActive);
        };

        self.board.place(row, col, stone)?;
        let point = Point::new(row, col);
        self.history.push(Move::new(point, stone));
        self.generation += 1;

        self.state = if self.board.is_winning(point, stone) {
            GameState::Ended(Outcome::won_by(stone))
        } else if self.board.is_full() {
            GameState::Ended(Outcome::Draw)
        } else {
            GameState::InProgress(!stone)
        };

        if let GameState::Ended(outcome) = self.state {
            self.last_outcome = Some(outcome);
            self.paused = false;
            info!(%outcome, moves = self.history.len(), "game over");
        }

        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use gomoku_core::BoardError;
    use gomoku_engine::SearchConfig;

    use super::*;

    fn started(size: usize, mode: GameMode) -> GameSession {
        let mut session = GameSession::new(&SessionConfig::default()).unwrap();
        session.new_game(size, mode).unwrap();
        session
    }

    fn play_all(session: &mut GameSession, moves: &[(usize, usize)]) {
        for &(r, c) in moves {
            session.apply_human_move(r, c).unwrap();
        }
    }

    #[test]
    fn fresh_session_is_not_started() {
        let session = GameSession::new(&SessionConfig::default()).unwrap();
        assert_eq!(session.state(), GameState::NotStarted);
        assert_eq!(session.board().size(), 15);
        assert_eq!(session.active_player(), None);
    }

    #[test]
    fn invalid_size_rejected() {
        let mut session = started(9, GameMode::PlayerVsPlayer);
        session.apply_human_move(4, 4).unwrap();
        let err = session.new_game(3, GameMode::PlayerVsPlayer).unwrap_err();
        assert!(matches!(err, SessionError::Board(BoardError::InvalidSize { .. })));
        assert_eq!(session.board().size(), 9);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn moves_before_start_rejected() {
        let mut session = GameSession::new(&SessionConfig::default()).unwrap();
        assert_eq!(session.apply_human_move(7, 7), Err(SessionError::GameNotActive));
        assert_eq!(session.board().stone_count(), 0);
    }

    #[test]
    fn turns_alternate_from_black() {
        let mut session = started(15, GameMode::PlayerVsPlayer);
        assert_eq!(
            session.apply_human_move(7, 7),
            Ok(GameState::InProgress(Stone::White))
        );
        assert_eq!(
            session.apply_human_move(7, 8),
            Ok(GameState::InProgress(Stone::Black))
        );
        assert_eq!(session.board().stone_at(Point::new(7, 8)), Some(Stone::White));
    }

    #[test]
    fn rejected_moves_change_nothing() {
        let mut session = started(15, GameMode::PlayerVsPlayer);
        session.apply_human_move(7, 7).unwrap();
        let generation = session.generation();

        assert!(matches!(
            session.apply_human_move(7, 7),
            Err(SessionError::Board(BoardError::CellOccupied { row: 7, col: 7 }))
        ));
        assert!(matches!(
            session.apply_human_move(15, 0),
            Err(SessionError::Board(BoardError::OutOfBounds { .. }))
        ));

        assert_eq!(session.state(), GameState::InProgress(Stone::White));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.generation(), generation);
    }

    #[test]
    fn five_in_a_row_ends_game() {
        let mut session = started(15, GameMode::PlayerVsPlayer);
        play_all(
            &mut session,
            &[(7, 3), (8, 3), (7, 4), (8, 4), (7, 5), (8, 5), (7, 6), (8, 6)],
        );
        assert_eq!(
            session.apply_human_move(7, 7),
            Ok(GameState::Ended(Outcome::BlackWins))
        );
        assert_eq!(session.last_outcome(), Some(Outcome::BlackWins));
        assert_eq!(session.apply_human_move(0, 0), Err(SessionError::GameNotActive));
        assert_eq!(session.undo(), 0);
    }

    #[test]
    fn full_board_without_five_is_draw() {
        // BBWWB / WWBBW / BBWWB / WWBBW / BBWWB has no five of either color.
        let pattern = ["BBWWB", "WWBBW", "BBWWB", "WWBBW", "BBWWB"];
        let mut black = Vec::new();
        let mut white = Vec::new();
        for (r, line) in pattern.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch == 'B' {
                    black.push((r, c));
                } else {
                    white.push((r, c));
                }
            }
        }
        assert_eq!(black.len(), 13);
        assert_eq!(white.len(), 12);

        let mut session = started(5, GameMode::PlayerVsPlayer);
        for i in 0..white.len() {
            let (r, c) = black[i];
            assert!(matches!(session.apply_human_move(r, c), Ok(GameState::InProgress(_))));
            let (r, c) = white[i];
            assert!(matches!(session.apply_human_move(r, c), Ok(GameState::InProgress(_))));
        }
        let (r, c) = black[12];
        assert_eq!(session.apply_human_move(r, c), Ok(GameState::Ended(Outcome::Draw)));
        assert!(session.board().is_full());
    }

    #[test]
    fn pvp_undo_takes_back_one_move() {
        let mut session = started(15, GameMode::PlayerVsPlayer);
        play_all(&mut session, &[(7, 7), (7, 8)]);
        assert_eq!(session.undo(), 1);
        assert_eq!(session.state(), GameState::InProgress(Stone::White));
        assert!(session.board().is_empty(Point::new(7, 8)));
        assert_eq!(session.board().stone_at(Point::new(7, 7)), Some(Stone::Black));
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut session = started(15, GameMode::VsComputer);
        let generation = session.generation();
        assert_eq!(session.undo(), 0);
        assert_eq!(session.generation(), generation);
        assert_eq!(session.state(), GameState::InProgress(Stone::Black));
    }

    #[test]
    fn vs_computer_undo_takes_back_both_moves() {
        let mut session = started(15, GameMode::VsComputer);
        session.apply_human_move(7, 7).unwrap();
        assert!(session.is_computer_turn());
        assert_eq!(session.apply_human_move(7, 8), Err(SessionError::NotHumanTurn));

        let reply = session
            .request_ai_move(&Searcher::default(), &SearchControl::unbounded())
            .unwrap();
        assert_eq!(reply.stone, Stone::White);
        assert_eq!(session.board().stone_count(), 1);
        session.apply_ai_move(reply.point).unwrap();

        assert_eq!(session.undo(), 2);
        assert_eq!(session.board().stone_count(), 0);
        assert!(session.history().is_empty());
        assert_eq!(session.state(), GameState::InProgress(Stone::Black));
    }

    #[test]
    fn vs_computer_undo_while_computer_to_move() {
        let mut session = started(15, GameMode::VsComputer);
        session.apply_human_move(7, 7).unwrap();
        assert_eq!(session.undo(), 1);
        assert_eq!(session.state(), GameState::InProgress(Stone::Black));
    }

    #[test]
    fn undo_then_replay_restores_position() {
        let mut session = started(15, GameMode::PlayerVsPlayer);
        play_all(&mut session, &[(7, 7), (7, 8), (8, 8)]);
        let board = session.board().clone();

        session.undo();
        session.apply_human_move(8, 8).unwrap();
        assert_eq!(session.board(), &board);
        assert_eq!(session.state(), GameState::InProgress(Stone::White));
    }

    #[test]
    fn request_ai_move_leaves_position_alone() {
        let mut session = started(15, GameMode::PlayerVsPlayer);
        play_all(&mut session, &[(7, 7), (7, 8), (8, 7)]);
        let board = session.board().clone();
        let generation = session.generation();

        let searcher = Searcher::new(SearchConfig::default().with_depth_cap(2).unwrap());
        let result = session
            .request_ai_move(&searcher, &SearchControl::unbounded())
            .unwrap();

        assert_eq!(result.stone, Stone::White);
        assert_eq!(session.board(), &board);
        assert_eq!(session.generation(), generation);
    }

    #[test]
    fn stopped_request_reports_search_stopped() {
        let mut session = started(15, GameMode::PlayerVsPlayer);
        play_all(&mut session, &[(7, 7), (7, 8), (8, 7)]);
        let control = SearchControl::unbounded();
        control.stop();
        assert_eq!(
            session.request_ai_move(&Searcher::default(), &control),
            Err(SessionError::SearchStopped)
        );
    }

    #[test]
    fn hint_suggests_without_playing() {
        let mut session = started(15, GameMode::PlayerVsPlayer);
        play_all(&mut session, &[(7, 4), (0, 0), (7, 5), (0, 14), (7, 6), (14, 0), (7, 7)]);
        let searcher = Searcher::default();

        let hint = session.hint(&searcher, &SearchControl::unbounded()).unwrap();
        assert!(hint.point == Point::new(7, 3) || hint.point == Point::new(7, 8));
        assert_eq!(session.history().len(), 7);

        assert!(session.board().is_empty(hint.point));
        assert_eq!(session.state(), GameState::InProgress(Stone::White));
    }

    #[test]
    fn hint_refused_on_computer_turn() {
        let mut session = started(15, GameMode::VsComputer);
        session.apply_human_move(7, 7).unwrap();
        assert_eq!(
            session.hint(&Searcher::default(), &SearchControl::unbounded()),
            Err(SessionError::NotHumanTurn)
        );
    }

    #[test]
    fn pause_and_take_over() {
        let mut session = started(15, GameMode::ComputerVsComputer);
        assert!(session.is_computer_turn());
        assert_eq!(session.take_over(), Err(SessionError::WrongMode {
            mode: GameMode::ComputerVsComputer
        }));

        assert_eq!(session.toggle_pause(), Ok(true));
        assert!(!session.is_computer_turn());

        session.take_over().unwrap();
        assert_eq!(session.mode(), GameMode::VsComputer);
        assert!(!session.is_paused());
        assert_eq!(session.human_to_move(), Ok(Stone::Black));
    }

    #[test]
    fn pause_only_in_cvc() {
        let mut session = started(15, GameMode::VsComputer);
        assert_eq!(
            session.toggle_pause(),
            Err(SessionError::WrongMode { mode: GameMode::VsComputer })
        );
    }

    #[test]
    fn generation_tracks_mutations() {
        let mut session = started(15, GameMode::PlayerVsPlayer);
        let g0 = session.generation();
        session.apply_human_move(7, 7).unwrap();
        let g1 = session.generation();
        assert!(g1 > g0);
        session.undo();
        assert!(session.generation() > g1);
    }

    #[test]
    fn reset_keeps_size_and_outcome() {
        let mut session = started(9, GameMode::PlayerVsPlayer);
        play_all(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3), (0, 4)]);
        assert_eq!(session.last_outcome(), Some(Outcome::BlackWins));

        session.reset();
        assert_eq!(session.state(), GameState::NotStarted);
        assert_eq!(session.board().size(), 9);
        assert_eq!(session.board().stone_count(), 0);
        assert_eq!(session.last_outcome(), Some(Outcome::BlackWins));
    }
}
