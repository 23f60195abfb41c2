//! Food entity: a single optional cell. `None` means "needs respawn".

use crate::rng::SimpleRng;
use crate::types::{Position, CELL_SIZE};

/// The food cell. Consumed (set to `None`) atomically with the score
/// increment; regenerated lazily before the next frame is drawn.
#[derive(Debug, Clone, Default)]
pub struct Food {
    position: Option<Position>,
}

impl Food {
    pub fn new() -> Self {
        Self { position: None }
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn is_set(&self) -> bool {
        self.position.is_some()
    }

    /// Mark the food as eaten.
    pub fn clear(&mut self) {
        self.position = None;
    }

    /// Pin the food to an exact cell. Gameplay uses [`Food::place`];
    /// this exists for tests and scripted scenarios.
    pub fn set(&mut self, pos: Position) {
        self.position = Some(pos);
    }

    /// Place the food on a uniformly random grid-aligned cell with both
    /// coordinates in `[0, dim - CELL_SIZE]`.
    ///
    /// Snake occupancy is intentionally not checked: food may spawn
    /// under the body and sits there until the head passes over it.
    pub fn place(&mut self, rng: &mut SimpleRng, width: i32, height: i32) {
        let cols = (width / CELL_SIZE).max(1) as u32;
        let rows = (height / CELL_SIZE).max(1) as u32;
        let x = rng.next_range(cols) as i32 * CELL_SIZE;
        let y = rng.next_range(rows) as i32 * CELL_SIZE;
        self.position = Some(Position::new(x, y));
    }
}
