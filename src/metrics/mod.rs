pub mod game_metrics;

pub use game_metrics::{GameMetrics, RoundSummary, RoundTally, format_clock};
