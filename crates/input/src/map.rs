//! Key mapping and the per-tick direction intent latch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Direction;

/// Map a directional key to a direction intent (arrows, WASD, HJKL).
pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j')
        | KeyCode::Char('J') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h')
        | KeyCode::Char('H') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(Direction::Right),
        _ => None,
    }
}

/// Check if a key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Confirm key on the start screen.
pub fn is_confirm(code: KeyCode) -> bool {
    code == KeyCode::Char(' ')
}

/// Restart key on the game-over screen.
pub fn is_restart(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('r') | KeyCode::Char('R'))
}

/// Latches at most one direction change per tick.
///
/// Candidates are validated in arrival order against the *effective*
/// direction (the latest accepted candidate, falling back to the
/// snake's current direction), so the last valid intent in a batch
/// wins. A length-1 snake accepts any direction: with no body behind
/// the head there is nothing to reverse into.
#[derive(Debug, Clone)]
pub struct IntentLatch {
    current: Direction,
    allow_any: bool,
    latched: Option<Direction>,
}

impl IntentLatch {
    /// Build a latch for one tick from the engine's current direction
    /// and snake length.
    pub fn new(current: Direction, snake_len: usize) -> Self {
        Self {
            current,
            allow_any: snake_len <= 1,
            latched: None,
        }
    }

    fn effective(&self) -> Direction {
        self.latched.unwrap_or(self.current)
    }

    /// Offer one candidate; reversals of the effective direction are
    /// dropped, everything else replaces the latch.
    pub fn offer(&mut self, candidate: Direction) {
        if self.allow_any || candidate != self.effective().opposite() {
            self.latched = Some(candidate);
        }
    }

    /// The direction change to apply this tick, if any.
    pub fn take(&mut self) -> Option<Direction> {
        self.latched.take()
    }
}
