use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::{FoodSpawnPolicy, GameConfig, ReversalPolicy};
use grid_snake::input::Autopilot;
use grid_snake::modes::PlayMode;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a bounded grid in the terminal")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width, wall border included
    #[arg(long, allow_hyphen_values = true)]
    width: Option<i32>,

    /// Grid height, wall border included
    #[arg(long, allow_hyphen_values = true)]
    height: Option<i32>,

    /// Initial snake length
    #[arg(long)]
    length: Option<usize>,

    /// Starting delay between ticks in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Fastest allowed delay between ticks in milliseconds
    #[arg(long)]
    min_tick_ms: Option<u64>,

    /// Seed for food placement and the autopilot
    #[arg(long)]
    seed: Option<u64>,

    /// Accept 180-degree turns into the snake's own neck
    #[arg(long)]
    allow_reversal: bool,

    /// Let food spawn on cells the snake occupies
    #[arg(long)]
    food_anywhere: bool,

    /// Steer randomly instead of reading the arrow keys
    #[arg(long)]
    autopilot: bool,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Defaults, then the config file, then flags
    fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(length) = self.length {
            config.initial_snake_length = length;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_delay_ms = tick_ms;
        }
        if let Some(min_tick_ms) = self.min_tick_ms {
            config.min_tick_delay_ms = min_tick_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.allow_reversal {
            config.reversal_policy = ReversalPolicy::Allow;
        }
        if self.food_anywhere {
            config.food_spawn = FoodSpawnPolicy::Anywhere;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = cli.resolve_config()?;
    info!(
        width = config.grid_width,
        height = config.grid_height,
        seed = ?config.seed,
        "starting grid snake"
    );

    let mut mode = PlayMode::new(&config)?;
    if cli.autopilot {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(1)),
            None => SmallRng::from_entropy(),
        };
        mode = mode.with_autopilot(Autopilot::new(rng));
    }

    mode.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::parse_from(["grid_snake"]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"grid_width": 40, "grid_height": 15, "seed": 1}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let cli = Cli::parse_from([
            "grid_snake",
            "--config",
            path.as_str(),
            "--height",
            "12",
            "--seed",
            "9",
            "--allow-reversal",
            "--food-anywhere",
        ]);
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.grid_width, 40);
        assert_eq!(config.grid_height, 12);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.reversal_policy, ReversalPolicy::Allow);
        assert_eq!(config.food_spawn, FoodSpawnPolicy::Anywhere);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let cli = Cli::parse_from(["grid_snake", "--width", "-4"]);
        let err = cli.resolve_config().unwrap_err();
        assert!(err.to_string().contains("Invalid game configuration"));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let cli = Cli::parse_from([
            "grid_snake",
            "--width",
            "2000000000",
            "--height",
            "2000000000",
        ]);
        let err = cli.resolve_config().unwrap_err();
        assert!(format!("{err:#}").contains("between 3 and 1000"));
    }
}
