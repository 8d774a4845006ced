//! Update engine for a grid-based Snake game: a tick-driven simulation of
//! the snake, food, and power-ups on a square board, with score, level, and
//! lives progression, a session state machine, and persistent lifetime
//! statistics.
//!
//! The engine does no rendering and no input handling; a frontend owns a
//! [`Game`], feeds it direction requests, and calls [`Game::advance()`] once
//! per tick, paced by a [`TickClock`] at [`Game::tick_interval()`].
//!
//! ```
//! use gridsnake::{Direction, Game, Options, Status};
//!
//! let mut game = Game::new(Options::default());
//! game.start();
//! game.queue_direction(Direction::Up);
//! let outcome = game.advance();
//! assert!(!outcome.collided);
//! assert_eq!(game.status(), Status::Playing);
//! ```
mod clock;
pub mod config;
pub mod consts;
mod game;
pub mod options;
pub mod stats;

pub use crate::clock::TickClock;
pub use crate::config::Config;
pub use crate::game::{Bounds, Cell, Direction, Game, PowerUp, Snake, Status, TickOutcome};
pub use crate::options::{Difficulty, GameMode, GridSize, Options};
pub use crate::stats::{SessionSummary, Stats};
