//! Assorted constants & hard-coded configuration
use std::time::Duration;

/// Default side length of the (square) board
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Smallest allowed side length; smaller requests are clamped
pub const MIN_GRID_SIZE: u16 = 10;

/// Largest allowed side length; larger requests are clamped
pub const MAX_GRID_SIZE: u16 = 30;

/// Snake length at the start of a session, before any food has been eaten
pub const INITIAL_SNAKE_LENGTH: usize = 1;

/// Number of lives a session starts with
pub const INITIAL_LIVES: u32 = 3;

/// Base score for eating one piece of food, multiplied by the current level
pub const POINTS_PER_FOOD: u32 = 10;

/// Eating this many pieces of food advances the session one level
pub const FOOD_PER_LEVEL: u32 = 5;

/// How much the tick interval shrinks on each level-up
pub const SPEED_STEP: Duration = Duration::from_millis(10);

/// The tick interval never drops below this, no matter how many level-ups
/// occur
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(40);

/// Probability of a power-up appearing after each piece of food eaten
pub const POWER_UP_PROBABILITY: f64 = 0.15;

/// Score multiplier applied to [`POINTS_PER_FOOD`] when a power-up is
/// collected
pub const POWER_UP_MULTIPLIER: u32 = 3;

/// How long an uncollected power-up stays on the board.  Converted to a tick
/// budget at spawn time using the tick interval in effect.
pub const POWER_UP_LIFETIME: Duration = Duration::from_millis(5000);

/// Number of uniform draws attempted when placing food or a power-up before
/// falling back to choosing among the explicitly-enumerated free cells
pub const SPAWN_RETRY_LIMIT: usize = 128;
