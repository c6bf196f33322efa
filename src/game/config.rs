use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::GameError;
use super::grid::GridSpace;

/// How `set_direction` treats a request to turn straight back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReversalPolicy {
    /// Any heading is accepted, including a turn into the neck
    Allow,
    /// A 180-degree turn is refused while the snake is longer than one cell
    #[default]
    Reject,
}

/// Where fresh food may appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FoodSpawnPolicy {
    /// Any interior cell, including ones under the snake
    Anywhere,
    /// Only interior cells the snake does not occupy
    #[default]
    AvoidSnake,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the grid, wall border included
    pub grid_width: i32,
    /// Height of the grid, wall border included
    pub grid_height: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,

    pub reversal_policy: ReversalPolicy,
    pub food_spawn: FoodSpawnPolicy,
    /// Seed for food placement; entropy when absent
    pub seed: Option<u64>,

    // Pacing (used by the host loop)
    /// Starting delay between ticks
    pub tick_delay_ms: u64,
    /// Lowest delay the speed-up command may reach
    pub min_tick_delay_ms: u64,
    /// Amount each speed command changes the delay by
    pub tick_delay_step_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 72,
            grid_height: 20,
            initial_snake_length: 3,
            reversal_policy: ReversalPolicy::default(),
            food_spawn: FoodSpawnPolicy::default(),
            seed: None,
            tick_delay_ms: 50,
            min_tick_delay_ms: 10,
            tick_delay_step_ms: 10,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every field and build the grid the config describes
    pub fn validate(&self) -> Result<GridSpace, GameError> {
        let grid = GridSpace::new(self.grid_width, self.grid_height)?;

        if self.initial_snake_length == 0 {
            return Err(GameError::InvalidConfig(
                "initial snake length must be at least 1".into(),
            ));
        }

        // The body extends left from the center and must stay off the wall
        let room = grid.center().x as usize;
        if self.initial_snake_length > room {
            return Err(GameError::InvalidConfig(format!(
                "initial snake length {} does not fit a grid {} cells wide",
                self.initial_snake_length, self.grid_width
            )));
        }

        if self.tick_delay_ms == 0 || self.min_tick_delay_ms == 0 {
            return Err(GameError::InvalidConfig(
                "tick delays must be positive".into(),
            ));
        }

        if self.min_tick_delay_ms > self.tick_delay_ms {
            return Err(GameError::InvalidConfig(format!(
                "minimum tick delay {}ms exceeds starting delay {}ms",
                self.min_tick_delay_ms, self.tick_delay_ms
            )));
        }

        Ok(grid)
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file; missing fields fall back to defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
