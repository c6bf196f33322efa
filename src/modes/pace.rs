use std::time::Duration;

use crate::game::GameConfig;

/// Delay between ticks, adjustable at runtime down to a floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickPace {
    delay: Duration,
    floor: Duration,
    step: Duration,
}

impl TickPace {
    pub fn new(delay: Duration, floor: Duration, step: Duration) -> Self {
        Self {
            delay: delay.max(floor),
            floor,
            step,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            Duration::from_millis(config.tick_delay_ms),
            Duration::from_millis(config.min_tick_delay_ms),
            Duration::from_millis(config.tick_delay_step_ms),
        )
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Shorten the delay by one step, never below the floor.
    /// Returns whether the delay changed.
    pub fn faster(&mut self) -> bool {
        let next = self.delay.saturating_sub(self.step).max(self.floor);
        let changed = next != self.delay;
        self.delay = next;
        changed
    }

    /// Lengthen the delay by one step
    pub fn slower(&mut self) -> bool {
        let next = self.delay.saturating_add(self.step);
        let changed = next != self.delay;
        self.delay = next;
        changed
    }
}

impl Default for TickPace {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
