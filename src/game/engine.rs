use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::{debug, info};

use super::{
    action::Direction,
    config::{FoodSpawnPolicy, GameConfig, ReversalPolicy},
    error::GameError,
    grid::{Coordinate, GridSpace},
    state::{Food, RoundState, Snake, Snapshot},
};

/// Information about a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInfo {
    /// Whether the snake ate the visible food this tick
    pub ate_food: bool,
    /// Whether a pending force-food request made the snake grow
    pub forced_growth: bool,
    /// Whether the wall stopped the move
    pub blocked: bool,
    /// Whether the head landed on the body
    pub self_collision: bool,
}

/// Result of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Round state after the tick
    pub state: RoundState,
    pub info: TickInfo,
}

impl TickResult {
    pub fn terminated(&self) -> bool {
        self.state == RoundState::GameOver
    }
}

/// The simulation engine: owns the snake, the food slot and the heading,
/// and advances the round one cell per tick.
pub struct SimulationEngine<R: Rng = SmallRng> {
    grid: GridSpace,
    initial_snake: Snake,
    snake: Snake,
    /// Heading applied on the next tick
    pending: Direction,
    food: Food,
    force_growth: bool,
    state: RoundState,
    reversal_policy: ReversalPolicy,
    food_spawn: FoodSpawnPolicy,
    score: u32,
    ticks: u64,
    rng: R,
}

impl SimulationEngine<SmallRng> {
    /// Create an engine from config, seeding from `config.seed` or entropy
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> SimulationEngine<R> {
    /// Create an engine with an injected random source
    pub fn with_rng(config: &GameConfig, rng: R) -> Result<Self, GameError> {
        let grid = config.validate()?;
        let snake = Snake::new(grid.center(), Direction::Right, config.initial_snake_length);
        Ok(Self::assemble(grid, snake, config, rng))
    }

    /// Create an engine that starts, and resets to, an explicit body
    pub fn with_snake(config: &GameConfig, snake: Snake, rng: R) -> Result<Self, GameError> {
        let grid = config.validate()?;

        if let Some(outside) = snake.segments().iter().find(|c| !grid.contains(**c)) {
            return Err(GameError::InvalidConfig(format!(
                "snake segment ({}, {}) lies outside the playable area",
                outside.x, outside.y
            )));
        }

        let distinct: HashSet<_> = snake.segments().iter().collect();
        if distinct.len() != snake.len() {
            return Err(GameError::InvalidConfig(
                "snake segments must be distinct".into(),
            ));
        }

        Ok(Self::assemble(grid, snake, config, rng))
    }

    fn assemble(grid: GridSpace, snake: Snake, config: &GameConfig, rng: R) -> Self {
        let mut engine = Self {
            grid,
            pending: snake.direction(),
            initial_snake: snake.clone(),
            snake,
            food: Food::hidden(),
            force_growth: false,
            state: RoundState::Running,
            reversal_policy: config.reversal_policy,
            food_spawn: config.food_spawn,
            score: 0,
            ticks: 0,
            rng,
        };
        engine.respawn_food_if_hidden();
        engine
    }

    /// Restore the starting body, heading and a fresh food for a new round
    pub fn reset(&mut self) {
        self.snake = self.initial_snake.clone();
        self.pending = self.snake.direction();
        self.food.hide();
        self.force_growth = false;
        self.state = RoundState::Running;
        self.score = 0;
        self.ticks = 0;
        self.respawn_food_if_hidden();

        info!(
            head_x = self.snake.head().x,
            head_y = self.snake.head().y,
            length = self.snake.len(),
            "round reset"
        );
    }

    /// Set the heading for the next tick; the last request before a tick wins.
    ///
    /// Under [`ReversalPolicy::Reject`] a request opposite to the direction the
    /// snake last moved, which would put the head on the neck, is refused and
    /// the pending heading is left unchanged.
    pub fn set_direction(&mut self, requested: Direction) -> Result<(), GameError> {
        if self.reversal_policy == ReversalPolicy::Reject {
            if let Some(travel) = self.snake.travel_direction() {
                if travel.is_opposite(requested) {
                    debug!(from = %travel, to = %requested, "reversal rejected");
                    return Err(GameError::IllegalDirectionTransition {
                        from: travel,
                        to: requested,
                    });
                }
            }
        }

        self.pending = requested;
        Ok(())
    }

    /// Grow on the next accepted move no matter where the food is
    pub fn request_food(&mut self) {
        debug!("forced growth requested");
        self.force_growth = true;
    }

    /// Advance the round by one step.
    ///
    /// A move into the wall is refused and leaves the whole body in place.
    /// Landing on any segment of the body as it stood before the move, the
    /// tail cell included, ends the round without growth.
    pub fn tick(&mut self) -> TickResult {
        let mut info = TickInfo::default();

        if self.state == RoundState::GameOver {
            return TickResult {
                state: self.state,
                info,
            };
        }

        self.ticks += 1;
        self.snake.set_direction(self.pending);
        let candidate = self.snake.head().moved_in_direction(self.pending);

        if !self.grid.contains(candidate) {
            info.blocked = true;
            self.respawn_food_if_hidden();
            return TickResult {
                state: self.state,
                info,
            };
        }

        if self.snake.occupies(candidate) {
            // The fatal move neither grows the snake nor scores
            self.snake.shift_to(candidate);
            info.self_collision = true;
            self.state = RoundState::GameOver;
            info!(
                x = candidate.x,
                y = candidate.y,
                score = self.score,
                ticks = self.ticks,
                "self-collision, round over"
            );
        } else if self.food.is_at(candidate) || self.force_growth {
            info.ate_food = self.food.is_at(candidate);
            info.forced_growth = self.force_growth;

            self.snake.grow_to(candidate);
            self.force_growth = false;
            self.score += 1;
            self.food.hide();

            debug!(
                x = candidate.x,
                y = candidate.y,
                length = self.snake.len(),
                forced = info.forced_growth,
                "snake grew"
            );
        } else {
            self.snake.shift_to(candidate);
        }

        self.respawn_food_if_hidden();

        TickResult {
            state: self.state,
            info,
        }
    }

    fn respawn_food_if_hidden(&mut self) {
        if self.food.is_visible() {
            return;
        }

        match self.food_spawn {
            FoodSpawnPolicy::Anywhere => self.food.refresh(&self.grid, &mut self.rng),
            FoodSpawnPolicy::AvoidSnake => {
                if !self
                    .food
                    .refresh_avoiding(&self.grid, &self.snake, &mut self.rng)
                {
                    debug!("no free cell left for food");
                }
            }
        }
    }

    /// Show food at `pos`, replacing the current one
    pub fn place_food(&mut self, pos: Coordinate) {
        self.food = Food::visible_at(pos);
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.grid,
            segments: self.snake.segments(),
            direction: self.snake.direction(),
            food: self.food,
            state: self.state,
            score: self.score,
            ticks: self.ticks,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RoundState::Running
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Food {
        self.food
    }

    pub fn grid(&self) -> GridSpace {
        self.grid
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn is_growth_forced(&self) -> bool {
        self.force_growth
    }

    /// Segments grown since the round started
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
