use rand::Rng;
use rand::rngs::SmallRng;

use crate::game::Direction;

/// Random steering for unattended play.
///
/// Each poll rolls the horizontal and vertical axes independently, each
/// landing on one of its two directions or on nothing. When both axes pick a
/// direction the horizontal one wins.
pub struct Autopilot {
    rng: SmallRng,
}

impl Autopilot {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    /// Next heading, or `None` to keep the current one
    pub fn next_direction(&mut self) -> Option<Direction> {
        let horizontal = match self.rng.gen_range(0..3) {
            0 => Some(Direction::Left),
            2 => Some(Direction::Right),
            _ => None,
        };
        let vertical = match self.rng.gen_range(0..3) {
            0 => Some(Direction::Down),
            2 => Some(Direction::Up),
            _ => None,
        };

        horizontal.or(vertical)
    }
}
