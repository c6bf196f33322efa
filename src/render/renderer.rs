use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::time::Duration;

use super::canvas::{Canvas, Cell, Renderable, SnakeBody};
use crate::game::Snapshot;
use crate::metrics::{GameMetrics, format_clock};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        snapshot: &Snapshot<'_>,
        metrics: &GameMetrics,
        tick_delay: Duration,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(snapshot, metrics, tick_delay);
        frame.render_widget(stats, chunks[0]);

        if snapshot.is_running() {
            let board = self.render_board(snapshot);
            frame.render_widget(board, chunks[1]);
        } else {
            let area = centered(chunks[1], 44, 10);
            let game_over = self.render_game_over(snapshot, metrics);
            frame.render_widget(game_over, area);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// Compose the board layers into a canvas
    pub fn compose(snapshot: &Snapshot<'_>) -> Canvas {
        let mut canvas = Canvas::for_grid(&snapshot.grid);
        let body = SnakeBody(snapshot.segments);
        let layers: [&dyn Renderable; 3] = [&snapshot.grid, &snapshot.food, &body];
        for layer in layers {
            layer.paint(&mut canvas);
        }
        canvas
    }

    fn render_board(&self, snapshot: &Snapshot<'_>) -> Paragraph<'static> {
        let canvas = Self::compose(snapshot);

        let lines: Vec<Line> = canvas
            .rows()
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|cell| Span::styled(cell.glyph(), cell_style(*cell)))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        Paragraph::new(lines).alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        snapshot: &Snapshot<'_>,
        metrics: &GameMetrics,
        tick_delay: Duration,
    ) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                snapshot.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(snapshot.segments.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Heading: ", label),
            Span::styled(snapshot.direction.to_string(), value),
            Span::raw("    "),
            Span::styled("Speed: ", label),
            Span::styled(format!("{}ms", tick_delay.as_millis()), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(format_clock(metrics.round_elapsed()), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_score.to_string(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Plain),
        )
    }

    fn render_game_over(&self, snapshot: &Snapshot<'_>, metrics: &GameMetrics) -> Paragraph<'static> {
        let detail = Style::default().fg(Color::Gray);
        let tally = metrics.tally();
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "OUCH! You lose!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("   Rounds: {}", metrics.rounds_played), detail),
            ]),
            Line::from(vec![Span::styled(
                format!(
                    "Ticks: {}   Eaten: {}   Forced: {}",
                    snapshot.ticks, tally.food_eaten, tally.forced_growths
                ),
                detail,
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Continue? ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Y",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" / ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "N",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let key = Style::default().fg(Color::Cyan);
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", key),
            Span::raw(" or "),
            Span::styled("WASD", key),
            Span::raw(" to move | "),
            Span::styled("= -", key),
            Span::raw(" speed | "),
            Span::styled("M", key),
            Span::raw(" food | "),
            Span::styled("P", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_style(cell: Cell) -> Style {
    match cell {
        Cell::Head => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        Cell::Body => Style::default().fg(Color::Green),
        Cell::Food => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Cell::Wall => Style::default().fg(Color::White),
        Cell::Floor => Style::default(),
    }
}

/// A `width` x `height` rect centered in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
