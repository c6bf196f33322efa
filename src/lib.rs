//! Grid Snake - a snake simulation on a bounded grid
//!
//! This library provides:
//! - Core simulation (game module): grid, snake, food, tick engine
//! - Keyboard and autopilot input (input module)
//! - Terminal rendering of engine snapshots (render module)
//! - Session metrics (metrics module)
//! - The interactive round loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
