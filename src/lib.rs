//! Simulation core for a snake game played on a fixed-size toroidal grid.
//!
//! The crate models discrete-time snake gameplay — movement, buffered turns,
//! wrap-around, growth, self-collision, and food placement — behind a single
//! [`GameSession`] state machine.  It contains no rendering, windowing, or
//! key-binding code: a front end drives the session by forwarding direction
//! input, calling [`GameSession::tick()`] once per frame, and reading the
//! snake segments, food position, and score back out to draw them however it
//! likes.
//!
//! ```
//! use std::time::Duration;
//! use wrapsnake::{Config, Direction, GameSession};
//!
//! let mut session = GameSession::new(Config::default());
//! session.queue_turn(Direction::North);
//! session.tick(Duration::from_millis(16));
//! for segment in session.segments() {
//!     // hand off to the rendering layer
//!     let _ = (segment.x, segment.z);
//! }
//! ```

pub mod config;
pub mod consts;
pub mod direction;
pub mod food;
pub mod grid;
pub mod session;
pub mod snake;

pub use crate::config::{Config, ConfigError};
pub use crate::direction::{Direction, TurnQueue};
pub use crate::grid::{Grid, Position};
pub use crate::session::{GameSession, SessionState};
pub use crate::snake::{MoveResult, Snake};
