use crate::config::Config;
use crate::consts;
use crate::direction::{Direction, TurnQueue};
use crate::food;
use crate::grid::{Grid, Position};
use crate::snake::{MoveResult, Snake};
use std::collections::HashSet;
use std::time::Duration;

/// The lifecycle state of a session
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    Playing,
    /// The snake ran into itself.  Terminal until [`GameSession::restart()`].
    GameOver,
    /// The snake fills the entire grid and there is nowhere left to place
    /// food.  Terminal until [`GameSession::restart()`].
    Won,
}

/// A single game of snake: owns the snake, the food, the score, and the
/// movement clock, and advances them one movement step at a time.
///
/// The session is driven externally: the front end calls
/// [`tick()`][GameSession::tick] once per frame with the elapsed frame time
/// and forwards direction input via [`queue_turn()`][GameSession::queue_turn]
/// between ticks.  Nothing here blocks, and a session never shares state, so
/// several independent sessions can coexist.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameSession<R = rand::rngs::ThreadRng> {
    rng: R,
    config: Config,
    grid: Grid,
    snake: Snake,
    turns: TurnQueue,
    food: Option<Position>,
    score: u32,
    move_timer: Duration,
    state: SessionState,
}

impl GameSession<rand::rngs::ThreadRng> {
    pub fn new(config: Config) -> Self {
        GameSession::new_with_rng(config, rand::rng())
    }
}

impl<R: rand::Rng> GameSession<R> {
    pub fn new_with_rng(config: Config, rng: R) -> GameSession<R> {
        let grid = Grid::new(config.grid_size);
        let mut session = GameSession {
            rng,
            config,
            grid,
            snake: new_snake(config, grid),
            turns: TurnQueue::new(config.max_queued_turns),
            food: None,
            score: 0,
            move_timer: Duration::ZERO,
            state: SessionState::Playing,
        };
        session.place_food();
        session
    }

    /// Discard the current game and begin a fresh one: a new snake at the
    /// grid center, new food, score and movement clock at zero.  Valid in
    /// any state.
    pub fn start(&mut self) {
        self.snake = new_snake(self.config, self.grid);
        self.turns = TurnQueue::new(self.config.max_queued_turns);
        self.score = 0;
        self.move_timer = Duration::ZERO;
        self.state = SessionState::Playing;
        self.place_food();
    }

    /// The restart command from the front end; identical to
    /// [`start()`][GameSession::start]
    pub fn restart(&mut self) {
        self.start();
    }

    /// Advance the session by `dt` of real time.  A no-op unless the session
    /// is [`Playing`][SessionState::Playing].
    ///
    /// Frame times accumulate until they reach the configured move interval;
    /// the snake then takes one movement step in the next buffered direction
    /// and the clock resets to zero.  A step that collides ends the game; a
    /// step onto the food cell grows the snake, bumps the score, and
    /// respawns the food (or wins the game if the snake now fills the grid).
    pub fn tick(&mut self, dt: Duration) {
        if self.state != SessionState::Playing {
            return;
        }
        self.move_timer = self.move_timer.saturating_add(dt);
        if self.move_timer < self.config.move_interval {
            return;
        }
        self.move_timer = Duration::ZERO;
        let next = self.turns.next(self.snake.direction());
        match self.snake.advance(next, self.grid) {
            MoveResult::Collided => self.state = SessionState::GameOver,
            MoveResult::Alive => {
                if self.food == Some(self.snake.head()) {
                    self.snake.grow();
                    self.score += 1;
                    self.place_food();
                }
            }
        }
    }

    /// Buffer a direction change for the next movement step.  Accepted in
    /// any state; turns queued while the game is over simply never take
    /// effect, since `tick` does nothing then.
    pub fn queue_turn(&mut self, dir: Direction) {
        self.turns.push(dir);
    }

    fn place_food(&mut self) {
        let occupied = self.snake.segments().iter().copied().collect::<HashSet<_>>();
        self.food = food::respawn(&occupied, self.grid, &mut self.rng);
        if self.food.is_none() {
            self.state = SessionState::Won;
        }
    }
}

impl<R> GameSession<R> {
    /// The cells occupied by the snake, head first
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.snake.segments().iter().copied()
    }

    /// The position of the snake's head
    pub fn head(&self) -> Position {
        self.snake.head()
    }

    /// Where the food currently is, if anywhere.  `None` only when the game
    /// has been won.
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the session has reached a terminal state (lost or won)
    pub fn is_over(&self) -> bool {
        self.state != SessionState::Playing
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }
}

fn new_snake(config: Config, grid: Grid) -> Snake {
    Snake::new(
        grid.center(),
        consts::START_DIRECTION,
        usize::from(config.initial_snake_length),
        grid,
    )
}
