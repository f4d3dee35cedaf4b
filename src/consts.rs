//! Assorted constants & hard-coded configuration
use crate::direction::Direction;
use std::time::Duration;

/// Default side length of the (square) grid
pub const GRID_SIZE: u16 = 20;

/// Default time between movements of the snake
pub const MOVE_INTERVAL: Duration = Duration::from_millis(150);

/// Default snake length before any food has been eaten
pub const INITIAL_SNAKE_LENGTH: u16 = 3;

/// The direction the snake faces when a session starts
pub const START_DIRECTION: Direction = Direction::East;

/// Default bound on the number of buffered direction changes
pub const MAX_QUEUED_TURNS: usize = 3;

/// How many uniformly-random cells the food spawner samples before falling
/// back to enumerating the free cells
pub const FOOD_SAMPLE_ATTEMPTS: usize = 64;
