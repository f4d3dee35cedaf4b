use crate::direction::Direction;
use crate::grid::{Grid, Position};
use std::collections::VecDeque;

/// Outcome of a single movement step
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MoveResult {
    Alive,
    Collided,
}

/// Snake state: an ordered sequence of occupied cells, head first.
///
/// Movement is a rotate, not a reallocation: the tail segment is popped off
/// the back, repositioned at the new head cell, and pushed onto the front, so
/// a steady-state move touches O(1) deque slots per tick.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snake {
    /// The cells occupied by the snake, head at the front.  Never empty; all
    /// entries are distinct except for a transient duplicate at the tail
    /// after [`grow()`][Snake::grow].
    pub(crate) body: VecDeque<Position>,

    /// The direction in which the snake is currently travelling
    pub(crate) direction: Direction,
}

impl Snake {
    /// Create a snake of `length` segments with its head at `head`, facing
    /// `direction`, and its body extending in a straight line behind the
    /// head (wrapped onto `grid` if the line crosses an edge).
    pub fn new(head: Position, direction: Direction, length: usize, grid: Grid) -> Snake {
        let (dx, dz) = direction.reverse().delta();
        let body = (0..length)
            .map(|i| {
                let i = i32::try_from(i).unwrap_or(i32::MAX);
                grid.wrap(head.offset(dx * i, dz * i))
            })
            .collect::<VecDeque<_>>();
        Snake { body, direction }
    }

    /// The position of the snake's head
    pub fn head(&self) -> Position {
        self.body.front().copied().unwrap_or_default()
    }

    /// The direction the snake is currently facing
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The cells occupied by the snake, head first
    pub fn segments(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// The number of segments in the snake's body
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Move the snake one cell in `next` (wrapping at the grid edges) and
    /// make that its current direction.
    ///
    /// The new head cell is checked against every segment except the tail,
    /// which vacates its cell in the same step; a snake chasing its own tail
    /// at one cell's distance is therefore not a collision.  On `Collided`
    /// the body is left untouched.
    pub fn advance(&mut self, next: Direction, grid: Grid) -> MoveResult {
        let new_head = next.advance(self.head(), grid);
        let tail_index = self.body.len().saturating_sub(1);
        if self.body.iter().take(tail_index).any(|&p| p == new_head) {
            return MoveResult::Collided;
        }
        let _ = self.body.pop_back();
        self.body.push_front(new_head);
        self.direction = next;
        MoveResult::Alive
    }

    /// Add a segment at the tail's cell.  The duplicate lasts only until the
    /// next [`advance()`][Snake::advance], which moves the original tail away
    /// and leaves the new segment holding the cell.
    pub fn grow(&mut self) {
        if let Some(&tail) = self.body.back() {
            self.body.push_back(tail);
        }
    }

    /// Whether any segment occupies `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snake_from(cells: &[(i32, i32)], direction: Direction) -> Snake {
        Snake {
            body: cells.iter().map(|&(x, z)| Position::new(x, z)).collect(),
            direction,
        }
    }

    #[test]
    fn new_snake_extends_behind_head() {
        let grid = Grid::new(20);
        let snake = Snake::new(Position::new(10, 10), Direction::East, 3, grid);
        assert_eq!(
            snake.segments(),
            &VecDeque::from([
                Position::new(10, 10),
                Position::new(9, 10),
                Position::new(8, 10),
            ])
        );
        assert_eq!(snake.direction(), Direction::East);
    }

    #[test]
    fn new_snake_wraps_behind_edge() {
        let grid = Grid::new(5);
        let snake = Snake::new(Position::new(1, 2), Direction::East, 4, grid);
        assert_eq!(
            snake.segments(),
            &VecDeque::from([
                Position::new(1, 2),
                Position::new(0, 2),
                Position::new(4, 2),
                Position::new(3, 2),
            ])
        );
    }

    #[test]
    fn advance_rotates_tail_to_front() {
        let grid = Grid::new(5);
        let mut snake = snake_from(&[(2, 2), (1, 2), (0, 2)], Direction::East);
        assert_eq!(snake.advance(Direction::East, grid), MoveResult::Alive);
        assert_eq!(
            snake.segments(),
            &VecDeque::from([
                Position::new(3, 2),
                Position::new(2, 2),
                Position::new(1, 2),
            ])
        );
    }

    #[test]
    fn advance_wraps_around_edge() {
        let grid = Grid::new(5);
        let mut snake = snake_from(&[(4, 2), (3, 2), (2, 2)], Direction::East);
        assert_eq!(snake.advance(Direction::East, grid), MoveResult::Alive);
        assert_eq!(snake.head(), Position::new(0, 2));
    }

    #[test]
    fn advance_updates_direction() {
        let grid = Grid::new(5);
        let mut snake = snake_from(&[(2, 2), (1, 2), (0, 2)], Direction::East);
        snake.advance(Direction::North, grid);
        assert_eq!(snake.direction(), Direction::North);
        assert_eq!(snake.head(), Position::new(2, 3));
    }

    #[test]
    fn advance_into_body_collides_without_mutation() {
        let grid = Grid::new(5);
        let mut snake = snake_from(&[(1, 1), (2, 1), (2, 2), (1, 2), (0, 2)], Direction::West);
        let before = snake.clone();
        // North of (1, 1) is (1, 2), a mid-body segment
        assert_eq!(snake.advance(Direction::North, grid), MoveResult::Collided);
        assert_eq!(snake, before);
    }

    #[test]
    fn tail_cell_is_not_a_collision() {
        let grid = Grid::new(5);
        // A closed 2x2 loop: the next head cell is the tail, which moves away
        // in the same step
        let mut snake = snake_from(&[(1, 1), (2, 1), (2, 2), (1, 2)], Direction::West);
        assert_eq!(snake.advance(Direction::North, grid), MoveResult::Alive);
        assert_eq!(
            snake.segments(),
            &VecDeque::from([
                Position::new(1, 2),
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(2, 2),
            ])
        );
    }

    #[test]
    fn grow_then_advance_extends_by_one() {
        let grid = Grid::new(5);
        let mut snake = snake_from(&[(2, 2), (1, 2), (0, 2)], Direction::East);
        snake.grow();
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.segments()[2], snake.segments()[3]);
        assert_eq!(snake.advance(Direction::East, grid), MoveResult::Alive);
        assert_eq!(snake.len(), 4);
        let unique = snake
            .segments()
            .iter()
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(unique.len(), snake.len());
    }
}
