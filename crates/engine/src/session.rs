//! Game session - owns the board, drives the move state machine, counts moves
//! and checks the win condition after every accepted slide.

use klotski_core::{Board, Coord, PieceId, Slide};
use smallvec::SmallVec;
use tracing::{debug, info, instrument, trace};

use crate::config::{ConfigError, PuzzleConfig};
use crate::validate::{validate, RejectReason};

/// Notifications for the presentation layer, in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    PositionChanged { piece: PieceId, position: Coord },
    MoveCountChanged(u32),
    Won { moves: u32 },
    /// A drop was refused; the piece is (still) at `position`.
    Reverted {
        piece: PieceId,
        position: Coord,
        reason: RejectReason,
    },
}

/// Most signals emit at most three events; reset spills to the heap.
pub type Events = SmallVec<[SessionEvent; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    MoveInProgress { piece: PieceId, start: Coord },
}

#[derive(Clone, Debug)]
pub struct GameSession {
    config: PuzzleConfig,
    board: Board,
    goal: PieceId,
    state: SessionState,
    moves: u32,
}

impl GameSession {
    /// Build a session in the config's initial layout.
    pub fn new(config: PuzzleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = config.build_board();
        let goal = board
            .id_of(&config.goal)
            .ok_or_else(|| ConfigError::UnknownGoal(config.goal.clone()))?;
        Ok(Self {
            config,
            board,
            goal,
            state: SessionState::Idle,
            moves: 0,
        })
    }

    /// Session on the classic Hakoiri Musume layout.
    pub fn classic() -> Self {
        let config = PuzzleConfig::hakoiri_musume();
        let board = config.build_board();
        Self {
            goal: PieceId(0),
            config,
            board,
            state: SessionState::Idle,
            moves: 0,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    #[inline]
    pub fn goal(&self) -> PieceId {
        self.goal
    }

    /// Win predicate: goal piece's top-left sits exactly on the target.
    pub fn is_solved(&self) -> bool {
        self.board.position_of(self.goal) == self.config.target
    }

    /// Start dragging `piece`. Ignored while another move is in progress or
    /// when the id is not on the board.
    #[instrument(level = "debug", skip(self))]
    pub fn on_move_begin(&mut self, piece: PieceId) -> bool {
        if let SessionState::MoveInProgress { piece: active, .. } = self.state {
            trace!(?active, "move already in progress, ignoring begin");
            return false;
        }
        if !self.board.contains(piece) {
            trace!("unknown piece, ignoring begin");
            return false;
        }
        self.state = SessionState::MoveInProgress {
            piece,
            start: self.board.position_of(piece),
        };
        true
    }

    /// [`Self::on_move_begin`] by piece name.
    pub fn on_move_begin_named(&mut self, name: &str) -> bool {
        match self.board.id_of(name) {
            Some(piece) => self.on_move_begin(piece),
            None => {
                trace!(name, "unknown piece name, ignoring begin");
                false
            }
        }
    }

    /// Drop the active piece on `target`. Without an active move this is a
    /// no-op and emits nothing.
    #[instrument(level = "debug", skip(self))]
    pub fn on_move_end(&mut self, target: Coord) -> Events {
        let mut events = Events::new();
        let SessionState::MoveInProgress { piece, start } = std::mem::take(&mut self.state) else {
            trace!("no move in progress, ignoring end");
            return events;
        };

        // a zero-length acceptance cannot happen, but it must not count
        let verdict = validate(&self.board, piece, start, target).and_then(|slide| {
            if slide.from == slide.to {
                Err(RejectReason::NoDisplacement)
            } else {
                Ok(slide)
            }
        });
        match verdict {
            Ok(slide) => self.commit(slide, &mut events),
            Err(reason) => {
                debug!(%reason, "move rejected");
                events.push(SessionEvent::Reverted {
                    piece,
                    position: start,
                    reason,
                });
            }
        }
        events
    }

    /// Restore the initial layout and zero the counter, from any state.
    #[instrument(level = "debug", skip(self))]
    pub fn on_reset(&mut self) -> Events {
        self.board = self.config.build_board();
        self.moves = 0;
        self.state = SessionState::Idle;

        let mut events: Events = self
            .board
            .pieces()
            .map(|piece| SessionEvent::PositionChanged {
                piece,
                position: self.board.position_of(piece),
            })
            .collect();
        events.push(SessionEvent::MoveCountChanged(0));
        events
    }

    fn commit(&mut self, slide: Slide, events: &mut Events) {
        self.board.set_position(slide.piece, slide.to);
        self.moves += 1;
        debug!(
            piece = self.board.name_of(slide.piece),
            from = %slide.from,
            to = %slide.to,
            moves = self.moves,
            "move committed"
        );
        events.push(SessionEvent::PositionChanged {
            piece: slide.piece,
            position: slide.to,
        });
        events.push(SessionEvent::MoveCountChanged(self.moves));

        if self.is_solved() {
            info!(moves = self.moves, "puzzle solved");
            events.push(SessionEvent::Won { moves: self.moves });
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::classic()
    }
}
