//! Terminal maze runner (default binary).
//!
//! Fixed-timestep loop: poll crossterm key events until the next tick, then
//! advance the simulation and flush one frame through the diff renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_maze::core::maze::Maze;
use tui_maze::core::pose::Pose;
use tui_maze::engine::{FrameRunner, RunnerConfig};
use tui_maze::input::{map_key, should_quit, KeyStateTracker};
use tui_maze::term::{FrameBuffer, TerminalRenderer};
use tui_maze::types::{SPAWN_ANGLE, SPAWN_X, SPAWN_Y, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let maze = Maze::builtin();
    let pose = Pose::new(SPAWN_X, SPAWN_Y, SPAWN_ANGLE);
    let mut runner = FrameRunner::new(maze, pose, RunnerConfig::default())?;

    let mut tracker = KeyStateTracker::new();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        // Repeats refresh the hold in terminals that never
                        // send a release.
                        if let Some(intent) = map_key(key) {
                            tracker.key_press(intent);
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(intent) = map_key(key) {
                            tracker.key_release(intent);
                        }
                    }
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            let elapsed = last_tick.elapsed();
            last_tick = Instant::now();

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            fb.resize(w, h);
            fb.clear();

            if !runner.tick(elapsed, tracker.intents(), &mut fb) {
                return Ok(());
            }
            term.draw_swap(&mut fb)?;
        }
    }
}
