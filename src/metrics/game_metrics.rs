//! Session statistics fed by tick results and end-of-round snapshots

use std::time::{Duration, Instant};

use crate::game::{Snapshot, TickInfo};

/// Growth and wall counts for the round in progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundTally {
    pub food_eaten: u32,
    pub forced_growths: u32,
    pub blocked_ticks: u32,
}

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub score: u32,
    pub ticks: u64,
    pub length: usize,
    pub tally: RoundTally,
    pub duration: Duration,
}

/// In-memory statistics for one play session
#[derive(Debug)]
pub struct GameMetrics {
    round_started: Instant,
    round_elapsed: Duration,
    tally: RoundTally,
    pub best_score: u32,
    pub longest_snake: usize,
    pub rounds_played: u32,
    pub last_round: Option<RoundSummary>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            round_started: Instant::now(),
            round_elapsed: Duration::ZERO,
            tally: RoundTally::default(),
            best_score: 0,
            longest_snake: 0,
            rounds_played: 0,
            last_round: None,
        }
    }

    pub fn tally(&self) -> RoundTally {
        self.tally
    }

    pub fn round_elapsed(&self) -> Duration {
        self.round_elapsed
    }

    /// Advance the round clock; the host stops calling this once the round ends
    pub fn update_clock(&mut self) {
        self.round_elapsed = self.round_started.elapsed();
    }

    pub fn record_tick(&mut self, info: &TickInfo) {
        if info.ate_food {
            self.tally.food_eaten += 1;
        }
        if info.forced_growth {
            self.tally.forced_growths += 1;
        }
        if info.blocked {
            self.tally.blocked_ticks += 1;
        }
    }

    /// Close the round described by `snapshot` and fold it into the session
    pub fn finish_round(&mut self, snapshot: &Snapshot<'_>) -> RoundSummary {
        self.update_clock();

        let summary = RoundSummary {
            score: snapshot.score,
            ticks: snapshot.ticks,
            length: snapshot.segments.len(),
            tally: self.tally,
            duration: self.round_elapsed,
        };

        self.rounds_played += 1;
        self.best_score = self.best_score.max(summary.score);
        self.longest_snake = self.longest_snake.max(summary.length);
        self.last_round = Some(summary);
        summary
    }

    pub fn start_round(&mut self) {
        self.round_started = Instant::now();
        self.round_elapsed = Duration::ZERO;
        self.tally = RoundTally::default();
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// `mm:ss`; minutes keep counting past the hour
pub fn format_clock(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
