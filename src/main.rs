//! Terminal runner (default binary).
//!
//! Polls crossterm for key events between ticks, drains the input buffer into
//! the engine once per tick, and renders a snapshot every frame. Settings come
//! from the environment (see [`blockfall::config`]).

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};

use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{should_quit, InputBuffer};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::{Journal, RunConfig};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    let mut journal = Journal::from_path(config.log_path.as_deref());

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let release_events = enable_release_events();

    let result = run(&mut term, &config, &mut journal, release_events);

    // Always try to restore terminal state.
    if release_events {
        let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
    }
    let _ = term.exit();
    result
}

/// Ask the terminal to report key releases. Returns false when it cannot,
/// in which case release-bound keys fire on press.
fn enable_release_events() -> bool {
    if !matches!(terminal::supports_keyboard_enhancement(), Ok(true)) {
        return false;
    }
    execute!(
        io::stdout(),
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
    )
    .is_ok()
}

fn run(
    term: &mut TerminalRenderer,
    config: &RunConfig,
    journal: &mut Journal,
    release_events: bool,
) -> Result<()> {
    let mut game = GameState::new(config.seed);
    let mut game_id = game.game_id();
    journal.game_start(game_id, game.seed());

    let view = GameView::default();
    let mut input = InputBuffer::with_release_events(release_events);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && should_quit(key) {
                        return Ok(());
                    }
                    input.on_key_event(key);
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() < tick {
            continue;
        }
        last_tick = Instant::now();

        for command in input.drain() {
            game.submit(command);
            record_events(&mut game, &mut game_id, journal);
        }
        game.tick(config.tick_ms);
        record_events(&mut game, &mut game_id, journal);
    }
}

/// Journal a lock that just happened and any game restart.
fn record_events(game: &mut GameState, game_id: &mut u32, journal: &mut Journal) {
    if game.game_id() != *game_id {
        *game_id = game.game_id();
        journal.game_start(*game_id, game.seed());
    }
    if let Some(event) = game.take_last_event() {
        journal.lock(*game_id, game.pieces(), event);
    }
}
