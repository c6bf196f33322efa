//! Interactive round loop
//!
//! Owns the single [`SimulationEngine`], polls the keyboard without blocking,
//! ticks at the current [`TickPace`] and renders at a fixed frame rate. A
//! finished round waits on the continue prompt and is reset in place.

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, interval, interval_at};
use tracing::{debug, info};

use super::pace::TickPace;
use crate::game::{Command, GameConfig, SimulationEngine};
use crate::input::{Autopilot, InputHandler};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

pub struct PlayMode {
    engine: SimulationEngine,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    pace: TickPace,
    autopilot: Option<Autopilot>,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: &GameConfig) -> Result<Self> {
        let engine = SimulationEngine::new(config).context("Failed to create simulation")?;

        Ok(Self {
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            pace: TickPace::from_config(config),
            autopilot: None,
            should_quit: false,
        })
    }

    /// Steer with the autopilot instead of the arrow keys
    pub fn with_autopilot(mut self, autopilot: Autopilot) -> Self {
        self.autopilot = Some(autopilot);
        self
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            delay_ms = self.pace.delay().as_millis() as u64,
            autopilot = self.autopilot.is_some(),
            "session started"
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            rounds = self.metrics.rounds_played,
            best = self.metrics.best_score,
            longest = self.metrics.longest_snake,
            "session ended"
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.pace.delay());

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, &mut tick_timer);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.engine.is_running() {
                        self.update_game();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    if self.engine.is_running() {
                        self.metrics.update_clock();
                    }
                    let snapshot = self.engine.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.metrics, self.pace.delay());
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event, tick_timer: &mut Interval) {
        let Event::Key(key) = event else {
            return;
        };

        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        if let Some(command) = self.input_handler.handle_key_event(key) {
            if self.apply_command(command) {
                let delay = self.pace.delay();
                *tick_timer = interval_at(Instant::now() + delay, delay);
            }
        }
    }

    /// Apply one command; returns true when the tick pace changed
    fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::Move(direction) => {
                if self.autopilot.is_none() && self.engine.is_running() {
                    if let Err(err) = self.engine.set_direction(direction) {
                        debug!(%err, "direction request ignored");
                    }
                }
            }
            Command::ForceFood => {
                if self.engine.is_running() {
                    self.engine.request_food();
                }
            }
            Command::IncreaseSpeed | Command::DecreaseSpeed => {
                let changed = if command == Command::IncreaseSpeed {
                    self.pace.faster()
                } else {
                    self.pace.slower()
                };
                if changed {
                    info!(delay_ms = self.pace.delay().as_millis() as u64, "tick pace changed");
                }
                return changed;
            }
            Command::Restart => self.reset_round(),
            Command::Quit => self.should_quit = true,
        }

        false
    }

    fn update_game(&mut self) {
        if let Some(direction) = self.autopilot.as_mut().and_then(Autopilot::next_direction) {
            // Autopilot picks blindly; refused reversals just keep the heading
            let _ = self.engine.set_direction(direction);
        }

        let result = self.engine.tick();
        self.metrics.record_tick(&result.info);

        if result.terminated() {
            let summary = self.metrics.finish_round(&self.engine.snapshot());
            info!(
                score = summary.score,
                length = summary.length,
                ticks = summary.ticks,
                eaten = summary.tally.food_eaten,
                forced = summary.tally.forced_growths,
                rounds = self.metrics.rounds_played,
                "round over"
            );
        }
    }

    fn reset_round(&mut self) {
        self.engine.reset();
        self.metrics.start_round();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
