//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a
//! timeout: an intent stays held only while press or auto-repeat events keep
//! refreshing it.

use std::time::{Duration, Instant};

use tui_maze_types::{IntentSet, MoveIntent, KEY_HOLD_TIMEOUT_MS};

/// Emulates key-down state from discrete terminal key events.
#[derive(Debug, Clone)]
pub struct KeyStateTracker {
    last_seen: [Option<Instant>; MoveIntent::ALL.len()],
    hold_timeout: Duration,
}

impl KeyStateTracker {
    pub fn new() -> Self {
        Self::with_hold_timeout_ms(KEY_HOLD_TIMEOUT_MS)
    }

    pub fn with_hold_timeout_ms(timeout_ms: u32) -> Self {
        Self {
            last_seen: [None; MoveIntent::ALL.len()],
            hold_timeout: Duration::from_millis(timeout_ms as u64),
        }
    }

    /// Record a press or auto-repeat of an intent key.
    pub fn key_press(&mut self, intent: MoveIntent) {
        self.last_seen[intent as usize] = Some(Instant::now());
    }

    /// Record a release, for terminals that do report them.
    pub fn key_release(&mut self, intent: MoveIntent) {
        self.last_seen[intent as usize] = None;
    }

    /// Intents currently held, expiring any that have not been refreshed
    /// within the hold timeout.
    pub fn intents(&mut self) -> IntentSet {
        let now = Instant::now();
        let mut set = IntentSet::EMPTY;

        for intent in MoveIntent::ALL {
            let slot = &mut self.last_seen[intent as usize];
            match *slot {
                Some(seen) if now.duration_since(seen) <= self.hold_timeout => {
                    set.insert(intent);
                }
                Some(_) => *slot = None,
                None => {}
            }
        }

        set
    }

    pub fn reset(&mut self) {
        self.last_seen = [None; MoveIntent::ALL.len()];
    }
}

impl Default for KeyStateTracker {
    fn default() -> Self {
        Self::new()
    }
}
