use thiserror::Error;

use super::action::Direction;

/// Errors surfaced by the simulation core.
///
/// Gameplay events (wall contact, eating, self-collision) are never errors;
/// they are reported through [`RoundState`](super::RoundState) and
/// [`TickInfo`](super::TickInfo).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The grid cannot host a playable interior.
    #[error("invalid grid bounds {width}x{height}: each side must be between 3 and 1000")]
    InvalidBounds { width: i32, height: i32 },

    /// A 180-degree turn into the snake's own neck was refused.
    #[error("cannot reverse from {from} to {to}")]
    IllegalDirectionTransition { from: Direction, to: Direction },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
