//! Grid geometry helpers: toroidal wrapping and cell overlap.

use crate::types::Position;

/// Wrap a coordinate onto `[0, dim)`.
///
/// Exiting one screen edge re-enters from the opposite edge. Works for
/// any `dim > 0`, including screens that are not cell-aligned (cells
/// may clip visually there, which is accepted).
pub fn wrap(v: i32, dim: i32) -> i32 {
    v.rem_euclid(dim)
}

/// Strict overlap test for two axis-aligned `size` x `size` squares.
///
/// Mere edge or corner contact does not count as overlap.
pub fn rects_overlap(a: Position, b: Position, size: i32) -> bool {
    a.x < b.x + size && b.x < a.x + size && a.y < b.y + size && b.y < a.y + size
}
