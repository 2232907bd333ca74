//! Game state module - the single owner of a running game
//!
//! This module ties together the board, the movement engine, the shape
//! generator and scoring. It is also the tick controller: commands are
//! submitted between frames, and [`GameState::tick`] applies them, runs
//! gravity and decides when a grounded shape locks.
//!
//! Nothing outside this module can write the board or the counters directly;
//! every change goes through `submit` or `tick`.

use crate::board::Board;
use crate::commands::CommandQueue;
use crate::generator::{ShapeGenerator, ShapeStatistics};
use crate::movement::{self, Shape};
use crate::scoring::score_clear;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Shape>,
    next: ShapeType,
    generator: ShapeGenerator,
    queue: CommandQueue,
    /// Seed this game's shape sequence started from.
    seed: u32,
    /// Increments on every new game.
    game_id: u32,
    /// Shapes successfully spawned in this game.
    pieces: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    level: u32,
    completed_rows: u32,
    speed_ms: u32,
    /// Game time in milliseconds; only advances while playing.
    clock_ms: u64,
    last_move_ms: u64,
    /// Set while the active shape is blocked from below.
    lock_started_ms: Option<u64>,
    paused: bool,
    over: bool,
}

impl GameState {
    /// Start a new game on an empty board
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Start a new game on top of an existing board.
    ///
    /// The first shape spawns immediately; if the board blocks the spawn the
    /// game starts already over.
    pub fn with_board(seed: u32, board: Board) -> Self {
        let mut generator = ShapeGenerator::new(seed);
        let first = generator.next();
        let second = generator.next();

        let mut state = Self {
            board,
            active: None,
            next: first,
            generator,
            queue: CommandQueue::new(),
            seed,
            game_id: 0,
            pieces: 0,
            last_event: None,
            score: 0,
            level: 0,
            completed_rows: 0,
            speed_ms: INITIAL_SPEED_MS,
            clock_ms: 0,
            last_move_ms: 0,
            lock_started_ms: None,
            paused: false,
            over: false,
        };
        state.spawn(second);
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Shape> {
        self.active
    }

    pub fn next(&self) -> ShapeType {
        self.next
    }

    pub fn statistics(&self) -> ShapeStatistics {
        self.generator.statistics()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn completed_rows(&self) -> u32 {
        self.completed_rows
    }

    /// Current gravity interval in milliseconds
    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn over(&self) -> bool {
        self.over
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    /// Elapsed game time in milliseconds
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Whether the active shape is waiting out its lock delay
    pub fn is_locking(&self) -> bool {
        self.lock_started_ms.is_some()
    }

    /// Where the active shape would land if dropped now
    pub fn ghost(&self) -> Option<Shape> {
        self.active
            .map(|shape| movement::drop_target(&self.board, shape))
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (dst, row) in out.board.iter_mut().zip(self.board.rows()) {
            for (d, cell) in dst.iter_mut().zip(row) {
                *d = cell.map(|b| b.shape);
            }
        }

        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost = self.ghost().map(|s| s.cells());
        out.next = self.next;
        out.statistics = self.statistics();
        out.score = self.score;
        out.level = self.level;
        out.completed_rows = self.completed_rows;
        out.speed_ms = self.speed_ms;
        out.paused = self.paused;
        out.over = self.over;
        out.game_id = self.game_id;
        out.pieces = self.pieces;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Hand a command to the engine.
    ///
    /// Hard drop, new game and pause take effect at once, at most once per
    /// kind per tick. Other movements are queued for the next tick. Audio
    /// commands are ignored. Returns whether the command was accepted.
    pub fn submit(&mut self, command: Command) -> bool {
        match command {
            Command::NewGame => {
                if !self.queue.mark_applied(command) {
                    return false;
                }
                self.new_game();
                true
            }
            Command::Pause => {
                if self.over || !self.queue.mark_applied(command) {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            Command::Move(Movement::HardDrop) => {
                self.playable() && self.queue.mark_applied(command) && self.hard_drop()
            }
            Command::Move(m) => self.playable() && self.queue.push(m),
            Command::Mute | Command::VolumeUp | Command::VolumeDown => false,
        }
    }

    /// Advance the game by `elapsed_ms`.
    ///
    /// Applies queued movements in order, then gravity and lock timing.
    /// Returns true if anything visible changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.playable() {
            self.queue.clear();
            return false;
        }

        self.clock_ms += elapsed_ms as u64;

        let mut changed = false;
        for m in self.queue.take() {
            changed |= self.apply_movement(m);
        }

        changed | self.apply_gravity()
    }

    fn playable(&self) -> bool {
        !self.paused && !self.over
    }

    /// Replace this game with a fresh one, continuing the shape sequence.
    fn new_game(&mut self) {
        let seed = self.generator.seed();
        let game_id = self.game_id.wrapping_add(1);
        let mut queue = std::mem::take(&mut self.queue);
        queue.discard_pending();

        *self = Self::new(seed);
        self.game_id = game_id;
        self.queue = queue;
    }

    /// Apply one queued (non-locking) movement.
    fn apply_movement(&mut self, m: Movement) -> bool {
        let Some(shape) = self.active else {
            return false;
        };

        match movement::apply(&self.board, shape, m) {
            Some(moved) => {
                self.active = Some(moved);
                if m == Movement::Down {
                    self.last_move_ms = self.clock_ms;
                    self.lock_started_ms = None;
                }
                true
            }
            None => {
                if m == Movement::Down {
                    self.lock_started_ms.get_or_insert(self.clock_ms);
                }
                false
            }
        }
    }

    fn apply_gravity(&mut self) -> bool {
        let Some(shape) = self.active else {
            return false;
        };

        if self.clock_ms - self.last_move_ms >= self.speed_ms as u64 {
            if let Some(moved) = movement::soft_drop(&self.board, shape) {
                self.active = Some(moved);
                self.last_move_ms = self.clock_ms;
                self.lock_started_ms = None;
                return true;
            }
            self.lock_started_ms.get_or_insert(self.clock_ms);
        }

        let Some(started) = self.lock_started_ms else {
            return false;
        };

        if movement::can_descend(&self.board, shape) {
            // Slid off the ledge; gravity takes over again.
            self.lock_started_ms = None;
            return false;
        }

        if self.clock_ms - started >= LOCK_DELAY_MS as u64 {
            self.lock_active();
            return true;
        }

        false
    }

    /// Drop the active shape to its landing row and lock it at once.
    ///
    /// Movements queued earlier in this tick belong to the same shape, so
    /// they are applied first, in order.
    fn hard_drop(&mut self) -> bool {
        for m in self.queue.take_pending() {
            self.apply_movement(m);
        }
        let Some(shape) = self.active else {
            return false;
        };
        self.active = Some(movement::drop_target(&self.board, shape));
        self.lock_active();
        true
    }

    /// Write the active shape into the board, clear rows, score, and spawn
    /// the next shape.
    fn lock_active(&mut self) {
        let Some(shape) = self.active.take() else {
            return;
        };

        // The active shape only ever moves onto free cells. If that is ever
        // violated the game ends with the board left as it was.
        if self.board.place(&shape.cells(), Block::from(shape.kind)).is_err() {
            self.over = true;
            self.lock_started_ms = None;
            return;
        }

        let full = self.board.full_rows();
        if !full.is_empty() {
            self.board.clear_rows(&full);
        }

        let result = score_clear(full.len(), self.completed_rows, self.level);
        self.score = self.score.saturating_add(result.points);
        self.completed_rows = result.completed_rows;
        self.level = result.level;
        self.speed_ms = result.speed_ms.min(self.speed_ms);

        self.lock_started_ms = None;
        self.last_move_ms = self.clock_ms;

        let upcoming = self.generator.next();
        self.spawn(upcoming);

        self.last_event = Some(LockEvent {
            shape: shape.kind,
            rows_cleared: full.len() as u32,
            score_gained: result.points,
            level: self.level,
            game_over: self.over,
        });
    }

    /// Promote the queued type to the active shape and queue `upcoming`.
    fn spawn(&mut self, upcoming: ShapeType) {
        let shape = Shape::spawn(self.next);
        self.next = upcoming;

        if self.board.can_place(&shape.cells()) {
            self.active = Some(shape);
            self.pieces = self.pieces.wrapping_add(1);
        } else {
            self.active = None;
            self.over = true;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
