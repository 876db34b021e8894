//! Event-driven text protocol driver with background searches.

use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;

use tracing::{debug, info, warn};

use gomoku_core::{Board, Point, Stone};
use gomoku_engine::{SearchConfig, SearchControl, SearchResult, Searcher};

use crate::command::{Command, Setting, parse_command};
use crate::error::{ProtocolError, SessionError};
use crate::session::{GameSession, SessionConfig};
use crate::state::{GameMode, GameState};

/// Events processed by the main loop.
enum DriverEvent {
    Command(Result<Command, ProtocolError>),
    SearchDone(SearchDone),
    InputClosed,
}

/// What a background search is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchPurpose {
    /// The computer's own move.
    ComputerMove,
    /// Print a suggestion for the human.
    Hint,
    /// Play the suggestion for the human.
    Auto,
}

/// Payload returned by a search thread.
struct SearchDone {
    /// Session generation the search started from.
    generation: u64,
    purpose: SearchPurpose,
    result: Result<SearchResult, SessionError>,
}

enum Flow {
    Continue,
    Quit,
}

/// Runs a [`GameSession`] behind the line protocol.
///
/// Searches run on worker threads against a copy of the session so that
/// input keeps flowing while the computer thinks. Commands that depend on
/// the position are held back until the in-flight search reports.
pub struct Driver<W: Write> {
    session: GameSession,
    searcher: Searcher,
    config: SessionConfig,
    out: W,
    stop_flag: Arc<AtomicBool>,
    pending: Option<SearchPurpose>,
    deferred: VecDeque<Command>,
}

impl<W: Write> Driver<W> {
    /// Create a driver writing replies to `out`.
    pub fn new(
        config: SessionConfig,
        search: SearchConfig,
        out: W,
    ) -> Result<Self, ProtocolError> {
        search.validate()?;
        Ok(Self {
            session: GameSession::new(&config)?,
            searcher: Searcher::new(search),
            config,
            out,
            stop_flag: Arc::new(AtomicBool::new(false)),
            pending: None,
            deferred: VecDeque::new(),
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The sink replies are written to.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run the event loop until `quit`, or until input closes and the
    /// computer has nothing left to do.
    pub fn run<R>(&mut self, input: R) -> Result<(), ProtocolError>
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<DriverEvent>();

        let input_tx = tx.clone();
        thread::spawn(move || {
            for line in input.lines() {
                match line {
                    Ok(line) => {
                        let trimmed = line.trim();
                        if trimmed.is_empty() {
                            continue;
                        }
                        debug!(cmd = %trimmed, "received command");
                        let cmd = parse_command(trimmed);
                        if input_tx.send(DriverEvent::Command(cmd)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "failed to read input");
                        break;
                    }
                }
            }
            let _ = input_tx.send(DriverEvent::InputClosed);
        });

        let mut closing = false;
        for event in &rx {
            let flow = match event {
                DriverEvent::Command(Ok(cmd)) => self.handle_command(cmd, &tx)?,
                DriverEvent::Command(Err(e)) => {
                    warn!(error = %e, "parse error");
                    self.reply(format_args!("error {e}"))?;
                    Flow::Continue
                }
                DriverEvent::SearchDone(done) => self.finish_search(done, &tx)?,
                DriverEvent::InputClosed => {
                    closing = true;
                    Flow::Continue
                }
            };

            if matches!(flow, Flow::Quit) {
                break;
            }
            if closing && self.pending.is_none() && self.deferred.is_empty() {
                break;
            }
        }

        self.stop_search();
        info!("gomoku shutting down");
        Ok(())
    }

    fn handle_command(
        &mut self,
        cmd: Command,
        tx: &mpsc::Sender<DriverEvent>,
    ) -> Result<Flow, ProtocolError> {
        let must_wait = cmd.waits_for_search() || !self.deferred.is_empty();
        if self.pending.is_some() && must_wait && cmd != Command::Quit {
            debug!(?cmd, "deferring until search completes");
            self.deferred.push_back(cmd);
            return Ok(Flow::Continue);
        }

        match self.execute(cmd, tx) {
            Ok(flow) => Ok(flow),
            Err(err @ ProtocolError::Io { .. }) => Err(err),
            Err(err) => {
                warn!(error = %err, "command rejected");
                self.reply(format_args!("error {err}"))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute(
        &mut self,
        cmd: Command,
        tx: &mpsc::Sender<DriverEvent>,
    ) -> Result<Flow, ProtocolError> {
        match cmd {
            Command::New { size, mode } => {
                self.stop_search();
                let size = size.unwrap_or(self.config.board_size);
                let mode = mode.unwrap_or(self.config.mode);
                self.session.new_game(size, mode)?;
                self.report_state()?;
            }
            Command::Play { row, col } => {
                if self.session.mode() == GameMode::ComputerVsComputer && self.session.is_paused() {
                    self.session.take_over()?;
                    self.reply(format_args!("mode {}", self.session.mode()))?;
                } else {
                    let stone = self.session.human_to_move()?;
                    let state = self.session.apply_human_move(row, col)?;
                    self.report_move(Point::new(row, col), stone, state)?;
                }
            }
            Command::Undo => {
                self.stop_search();
                let removed = self.session.undo();
                self.reply(format_args!("undo {removed}"))?;
            }
            Command::Hint => {
                self.session.human_to_move()?;
                self.start_search(SearchPurpose::Hint, tx);
            }
            Command::Auto => {
                self.session.human_to_move()?;
                self.start_search(SearchPurpose::Auto, tx);
            }
            Command::Pause => {
                let paused = self.session.toggle_pause()?;
                if paused {
                    self.stop_search();
                }
                self.reply(format_args!("paused {paused}"))?;
            }
            Command::Reset => {
                self.stop_search();
                self.session.reset();
                self.report_state()?;
            }
            Command::Show => {
                let pretty = self.session.board().pretty().to_string();
                self.reply(format_args!("{pretty}"))?;
            }
            Command::State => self.report_state()?,
            Command::Set(Setting::Size(size)) => {
                Board::new(size)?;
                self.config.board_size = size;
                self.reply(format_args!("ok size {size}"))?;
            }
            Command::Set(Setting::Depth(depth)) => {
                let config = self.searcher.config().with_depth_cap(depth)?;
                self.searcher = Searcher::new(config);
                self.reply(format_args!("ok depth {depth}"))?;
            }
            Command::Quit => {
                self.stop_search();
                return Ok(Flow::Quit);
            }
            Command::Unknown(name) => {
                self.reply(format_args!("error unknown command: {name}"))?;
            }
        }

        self.schedule_computer(tx);
        Ok(Flow::Continue)
    }

    /// Start the computer's move if it is to move and nothing is running.
    fn schedule_computer(&mut self, tx: &mpsc::Sender<DriverEvent>) {
        if self.pending.is_none() && self.session.is_computer_turn() {
            self.start_search(SearchPurpose::ComputerMove, tx);
        }
    }

    fn start_search(&mut self, purpose: SearchPurpose, tx: &mpsc::Sender<DriverEvent>) {
        let Some(stone) = self.session.active_player() else {
            return;
        };
        if self.pending.is_some() {
            warn!(?purpose, "search already running, ignoring");
            return;
        }

        self.stop_flag = Arc::new(AtomicBool::new(false));
        let control = SearchControl::new(Arc::clone(&self.stop_flag));
        let mut session = self.session.clone();
        let searcher = self.searcher.clone();
        let generation = self.session.generation();
        let tx = tx.clone();

        debug!(%stone, ?purpose, generation, "starting search");
        thread::spawn(move || {
            let result = match purpose {
                SearchPurpose::ComputerMove => session.request_ai_move(&searcher, &control),
                SearchPurpose::Hint | SearchPurpose::Auto => session.hint(&searcher, &control),
            };
            let _ = tx.send(DriverEvent::SearchDone(SearchDone {
                generation,
                purpose,
                result,
            }));
        });

        self.pending = Some(purpose);
    }

    fn stop_search(&mut self) {
        self.stop_flag.store(true, Ordering::Release);
    }

    fn finish_search(
        &mut self,
        done: SearchDone,
        tx: &mpsc::Sender<DriverEvent>,
    ) -> Result<Flow, ProtocolError> {
        self.pending = None;

        if done.generation != self.session.generation() {
            debug!(
                started = done.generation,
                current = self.session.generation(),
                "discarding stale search result"
            );
        } else {
            match done.result {
                Ok(result) => self.apply_search(done.purpose, result)?,
                Err(SessionError::SearchStopped) => {
                    debug!(purpose = ?done.purpose, "search returned no move");
                }
                Err(err) => {
                    warn!(error = %err, purpose = ?done.purpose, "search refused");
                    self.reply(format_args!("error {err}"))?;
                }
            }
        }

        while self.pending.is_none() {
            let Some(cmd) = self.deferred.pop_front() else {
                break;
            };
            if let Flow::Quit = self.handle_command(cmd, tx)? {
                return Ok(Flow::Quit);
            }
        }

        self.schedule_computer(tx);
        Ok(Flow::Continue)
    }

    fn apply_search(
        &mut self,
        purpose: SearchPurpose,
        result: SearchResult,
    ) -> Result<(), ProtocolError> {
        let point = result.point;
        if purpose == SearchPurpose::Hint {
            return self.reply(format_args!("hint {} {}", point.row, point.col));
        }

        self.reply(format_args!(
            "info decision {} depth {} score {} nodes {}",
            result.decision, result.depth, result.score, result.nodes
        ))?;

        let applied = match purpose {
            SearchPurpose::Auto => self.session.apply_human_move(point.row, point.col),
            _ => self.session.apply_ai_move(point),
        };
        match applied {
            Ok(state) => self.report_move(point, result.stone, state),
            Err(err) => {
                warn!(error = %err, %point, "search result could not be applied");
                self.reply(format_args!("error {err}"))
            }
        }
    }

    fn report_move(
        &mut self,
        point: Point,
        stone: Stone,
        state: GameState,
    ) -> Result<(), ProtocolError> {
        self.reply(format_args!("move {} {} {stone}", point.row, point.col))?;
        if let GameState::Ended(outcome) = state {
            self.reply(format_args!("result {outcome}"))?;
        }
        Ok(())
    }

    fn report_state(&mut self) -> Result<(), ProtocolError> {
        let state = self.session.state();
        let mode = self.session.mode();
        let size = self.session.board().size();
        self.reply(format_args!("state {state} {mode} {size}"))
    }

    fn reply(&mut self, line: fmt::Arguments<'_>) -> Result<(), ProtocolError> {
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }
}
