use crate::grid::{Grid, Position};
use std::collections::VecDeque;

/// A compass direction of travel on the grid's ground plane.  North is the
/// +z axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The unit vector `(dx, dz)` for this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// Return the cell one step from `pos` in this direction, wrapped onto
    /// `grid`
    pub fn advance(self, pos: Position, grid: Grid) -> Position {
        let (dx, dz) = self.delta();
        grid.wrap(pos.offset(dx, dz))
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Whether this direction and `other` cancel out (their deltas sum to
    /// zero)
    pub fn is_opposite(self, other: Direction) -> bool {
        self.reverse() == other
    }
}

/// A bounded FIFO of pending direction changes.
///
/// Input arrives faster than the snake moves, so turns are buffered here and
/// consumed one per movement step.  Two rules keep the buffer sane: a turn
/// identical to the most recently queued one is dropped (holding a key does
/// not flood the queue), and a turn that would exactly reverse the current
/// direction is rejected at dequeue time (the snake cannot double back into
/// its own neck).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TurnQueue {
    queue: VecDeque<Direction>,
    capacity: usize,
}

impl TurnQueue {
    pub fn new(capacity: usize) -> TurnQueue {
        TurnQueue {
            queue: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Buffer a direction change.  Dropped if it duplicates the back of the
    /// queue or if the queue is at capacity.
    pub fn push(&mut self, dir: Direction) {
        if self.queue.back() == Some(&dir) || self.queue.len() >= self.capacity {
            return;
        }
        self.queue.push_back(dir);
    }

    /// Consume the next buffered turn, given the direction the snake is
    /// currently facing.  Returns `current` unchanged if the queue is empty
    /// or if the buffered turn would reverse `current`.
    pub fn next(&mut self, current: Direction) -> Direction {
        match self.queue.pop_front() {
            Some(dir) if !dir.is_opposite(current) => dir,
            _ => current,
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
