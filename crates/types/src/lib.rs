//! Core types module - shared data structures and constants
//!
//! Pure data with no external dependencies, usable from the game core,
//! the input mapper, and the terminal renderer alike.
//!
//! # Playfield
//!
//! The playfield keeps the classic pixel-unit model:
//!
//! - **Screen**: 1200 x 800 units
//! - **Cell**: 25 x 25 units (movement step and collision box size)
//! - **Grid**: 48 columns x 32 rows
//!
//! Positions are always multiples of the cell size and wrap modulo the
//! screen dimensions (toroidal topology).

/// Screen dimensions in pixel units.
pub const SCREEN_WIDTH: i32 = 1200;
pub const SCREEN_HEIGHT: i32 = 800;

/// Square cell edge, in pixel units. Also the per-tick movement step.
pub const CELL_SIZE: i32 = 25;

/// Fixed delay after each Playing-state frame (milliseconds).
///
/// This constant sleep *is* the frame-rate mechanism; there is no
/// delta-time scheduler.
pub const TICK_DELAY_MS: u64 = 100;

/// A grid-aligned point in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Snake heading. Mutated only between ticks, never mid-step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The exact reverse heading (rejected by the anti-reversal rule).
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step on each axis. Positive y points down the screen.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}
