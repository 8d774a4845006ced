//! The tick engine: the single authoritative state transition for a Snake
//! session, plus the session state machine and spawn logic.
mod direction;
mod grid;
mod snake;
pub use self::direction::Direction;
pub use self::grid::{Bounds, Cell};
pub use self::snake::Snake;
use crate::consts;
use crate::options::Options;
use crate::stats::SessionSummary;
use rand::{
    distr::{Bernoulli, Distribution},
    seq::IteratorRandom,
    Rng,
};
use std::collections::HashSet;
use std::time::Duration;

/// The session state machine.
///
/// `Idle → Playing ⇄ Paused` and `Playing → GameOver`; `start` re-enters
/// `Playing` from `Idle` or `GameOver` with a fresh board.  There is no
/// `Idle → Paused` or `GameOver → Paused` transition.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Status {
    #[default]
    Idle,
    Playing,
    Paused,
    GameOver,
}

/// What a single call to [`Game::advance()`] did
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TickOutcome {
    /// The snake hit a wall or itself; the attempted move was discarded
    pub collided: bool,
    /// The snake's head landed on the food
    pub ate_food: bool,
}

/// A time-limited bonus pickup worth a score multiplier, independent of the
/// regular food item.  At most one is active at a time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PowerUp {
    cell: Cell,

    /// Ticks until the power-up disappears.  The wall-clock lifetime is
    /// converted to a tick budget at spawn time, so a paused session does
    /// not burn it down.
    ticks_left: u32,
}

impl PowerUp {
    fn new(cell: Cell, tick_interval: Duration) -> PowerUp {
        let ticks = consts::POWER_UP_LIFETIME
            .as_millis()
            .div_ceil(tick_interval.as_millis().max(1));
        PowerUp {
            cell,
            ticks_left: u32::try_from(ticks).unwrap_or(u32::MAX).max(1),
        }
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn ticks_left(&self) -> u32 {
        self.ticks_left
    }
}

/// One Snake session: the snake, the pickups, and the score/level/lives
/// bookkeeping, advanced one tick at a time by [`advance()`][Game::advance].
///
/// All mutation happens through explicit calls — `advance` plus the control
/// actions (`start`, `toggle_pause`, `reset`, `queue_direction`).  Renderers
/// and HUDs only read.  Each `advance` call is atomic with respect to
/// observers; no partial state is ever visible.
#[derive(Clone, Debug)]
pub struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    options: Options,
    bounds: Bounds,
    status: Status,
    score: u32,
    level: u32,
    speed: Duration,
    lives: u32,
    food_eaten: u32,
    snake: Snake,
    food: Cell,
    power_up: Option<PowerUp>,
    won: bool,
}

impl Game<rand::rngs::ThreadRng> {
    pub fn new(options: Options) -> Self {
        Game::new_with_rng(options, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn new_with_rng(options: Options, rng: R) -> Game<R> {
        let bounds = Bounds::new(options.grid_size.get(), options.mode.wraps());
        let mut game = Game {
            rng,
            options,
            bounds,
            status: Status::Idle,
            score: 0,
            level: 1,
            speed: options.difficulty.tick_interval(),
            lives: consts::INITIAL_LIVES,
            food_eaten: 0,
            snake: Snake::new(
                bounds.center(),
                Direction::Right,
                consts::INITIAL_SNAKE_LENGTH,
                bounds,
            ),
            food: Cell::new(0, 0),
            power_up: None,
            won: false,
        };
        let _ = game.spawn_food();
        game
    }

    /// Begin a fresh session.  Everything — snake, food, score, level,
    /// speed, lives — is reinitialized from the options; this is the only
    /// operation that does so.
    pub fn start(&mut self) {
        self.reset_board();
        self.status = Status::Playing;
    }

    /// Toggle between `Playing` and `Paused`.  In any other state this does
    /// nothing.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            Status::Playing => Status::Paused,
            Status::Paused => Status::Playing,
            other => other,
        };
    }

    /// Discard the session and return to `Idle` with a fresh board
    pub fn reset(&mut self) {
        self.reset_board();
        self.status = Status::Idle;
    }

    /// Replace the session options.  Ignored unless the session is `Idle`;
    /// the board is rebuilt to match.
    pub fn set_options(&mut self, options: Options) {
        if self.status == Status::Idle {
            self.options = options;
            self.reset_board();
        }
    }

    /// Request a direction change for the next tick.  Ignored unless the
    /// session is `Playing`; a request directly opposite the current heading
    /// is ignored; the latest legal request wins.
    pub fn queue_direction(&mut self, direction: Direction) {
        if self.status == Status::Playing {
            self.snake.queue_turn(direction);
        }
    }

    /// Advance the simulation one tick.  A no-op unless the session is
    /// `Playing`.
    ///
    /// Exactly one collision or one pickup is resolved per tick.  On a
    /// collision the move is discarded and a life is lost; at zero lives the
    /// session ends.  Eating food grows the snake by one cell, scores
    /// `POINTS_PER_FOOD × level`, and may trigger a level-up and a power-up
    /// spawn; collecting a power-up scores a bonus without growth.
    pub fn advance(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.status != Status::Playing {
            return outcome;
        }
        self.tick_power_up();
        self.snake.commit_turn();
        let step = self
            .snake
            .direction()
            .advance(self.snake.head(), self.bounds)
            .filter(|&cell| !self.snake.contains(cell));
        let Some(new_head) = step else {
            // Wall or self-collision: the snake stays put and loses a life.
            outcome.collided = true;
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                self.status = Status::GameOver;
            }
            return outcome;
        };
        if new_head == self.food {
            outcome.ate_food = true;
            self.snake.step_to(new_head, true);
            self.score += consts::POINTS_PER_FOOD * self.level;
            self.food_eaten += 1;
            if self.food_eaten % consts::FOOD_PER_LEVEL == 0 {
                self.level += 1;
                self.speed = self
                    .speed
                    .saturating_sub(consts::SPEED_STEP)
                    .max(consts::MIN_TICK_INTERVAL);
            }
            if !self.spawn_food() {
                // The snake fills the board; nothing left to collect.
                self.won = true;
                self.status = Status::GameOver;
                return outcome;
            }
            self.maybe_spawn_power_up();
        } else if self.power_up.is_some_and(|p| p.cell == new_head) {
            self.snake.step_to(new_head, false);
            self.score += consts::POINTS_PER_FOOD * consts::POWER_UP_MULTIPLIER;
            self.power_up = None;
        } else {
            self.snake.step_to(new_head, false);
        }
        outcome
    }

    /// Count down an active power-up and expire it when its budget runs out
    fn tick_power_up(&mut self) {
        if let Some(power_up) = self.power_up.as_mut() {
            power_up.ticks_left = power_up.ticks_left.saturating_sub(1);
        }
        let _ = self.power_up.take_if(|p| p.ticks_left == 0);
    }

    /// Place food on a cell not occupied by the snake or an active power-up.
    /// Returns `false` if the board has no free cell.
    fn spawn_food(&mut self) -> bool {
        for _ in 0..consts::SPAWN_RETRY_LIMIT {
            let cell = self.bounds.random_cell(&mut self.rng);
            if self.is_free(cell) {
                self.food = cell;
                return true;
            }
        }
        // The board is crowded enough that rejection sampling keeps missing;
        // enumerate the free cells instead.
        let occupied = self.snake.cells().collect::<HashSet<Cell>>();
        let power_up = self.power_up.map(|p| p.cell);
        if let Some(cell) = self
            .bounds
            .cells()
            .filter(|cell| !occupied.contains(cell) && Some(*cell) != power_up)
            .choose(&mut self.rng)
        {
            self.food = cell;
            true
        } else {
            false
        }
    }

    /// Roll the power-up spawn that follows a food-eat.  At most one
    /// power-up is active at a time; it never lands on the snake or the
    /// food.
    fn maybe_spawn_power_up(&mut self) {
        if self.power_up.is_some() {
            return;
        }
        let dist = Bernoulli::new(consts::POWER_UP_PROBABILITY)
            .expect("POWER_UP_PROBABILITY should be between 0 and 1");
        if !dist.sample(&mut self.rng) {
            return;
        }
        for _ in 0..consts::SPAWN_RETRY_LIMIT {
            let cell = self.bounds.random_cell(&mut self.rng);
            if !self.snake.contains(cell) && cell != self.food {
                self.power_up = Some(PowerUp::new(cell, self.speed));
                return;
            }
        }
        // Too crowded to place one; skip this spawn.
    }

    fn is_free(&self, cell: Cell) -> bool {
        !self.snake.contains(cell) && self.power_up.is_none_or(|p| p.cell != cell)
    }

    fn reset_board(&mut self) {
        self.bounds = Bounds::new(self.options.grid_size.get(), self.options.mode.wraps());
        self.snake = Snake::new(
            self.bounds.center(),
            Direction::Right,
            consts::INITIAL_SNAKE_LENGTH,
            self.bounds,
        );
        self.score = 0;
        self.level = 1;
        self.speed = self.options.difficulty.tick_interval();
        self.lives = consts::INITIAL_LIVES;
        self.food_eaten = 0;
        self.power_up = None;
        self.won = false;
        let _ = self.spawn_food();
    }
}

impl<R> Game<R> {
    pub fn options(&self) -> Options {
        self.options
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// The current time between ticks.  Shrinks on level-up, never below
    /// [`MIN_TICK_INTERVAL`][consts::MIN_TICK_INTERVAL].
    pub fn tick_interval(&self) -> Duration {
        self.speed
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn food_eaten(&self) -> u32 {
        self.food_eaten
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn power_up(&self) -> Option<&PowerUp> {
        self.power_up.as_ref()
    }

    /// Did the session end by filling the board rather than by running out
    /// of lives?
    pub fn won(&self) -> bool {
        self.won
    }

    /// Summarize the session for [`Stats::record_game()`]
    /// [crate::stats::Stats::record_game]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.score,
            food_eaten: self.food_eaten,
            snake_length: self.snake.len(),
            won: self.won,
        }
    }
}
