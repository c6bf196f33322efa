//! Core simulation for grid snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The host loop drives it through [`SimulationEngine`] and hands [`Snapshot`]s to a renderer.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::{FoodSpawnPolicy, GameConfig, ReversalPolicy};
pub use engine::{SimulationEngine, TickInfo, TickResult};
pub use error::GameError;
pub use grid::{Coordinate, GridSpace};
pub use state::{Food, RoundState, Snake, Snapshot};
