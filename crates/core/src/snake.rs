//! Snake entity: ordered body segments, head at the front.

use std::collections::VecDeque;

use crate::types::Position;

/// The snake body. Insertion order is body order; the head is the
/// front element. The body is never empty.
///
/// Segments are not guaranteed geometrically contiguous: wrap-around
/// teleports the head across the screen, so adjacency only holds under
/// the last applied direction.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// A length-1 snake at the given position.
    pub fn new(head: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(head);
        Self { body }
    }

    pub fn head(&self) -> Position {
        // Invariant: the body is never empty.
        self.body.front().copied().unwrap_or(Position::new(0, 0))
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn push_head(&mut self, pos: Position) {
        self.body.push_front(pos);
    }

    pub fn pop_tail(&mut self) -> Option<Position> {
        self.body.pop_back()
    }

    /// Body segments, head first.
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// True iff the head occupies the same cell as any non-head segment.
    pub fn hits_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&seg| seg == head)
    }

    /// True iff any segment sits at `pos`.
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.iter().any(|&seg| seg == pos)
    }
}
