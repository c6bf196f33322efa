use rand::Rng;
use rand::seq::IteratorRandom;
use serde::Serialize;

use super::action::Direction;
use super::grid::{Coordinate, GridSpace};

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Coordinate>,
    /// Heading committed by the last tick
    direction: Direction,
}

impl Snake {
    /// Create a straight snake whose body trails behind `head`.
    /// A zero `length` still yields the head segment.
    pub fn new(head: Coordinate, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length.max(1) as i32)
            .map(|i| head.moved_by(-dx * i, -dy * i))
            .collect();

        Self { body, direction }
    }

    /// Build a snake from explicit segments, head first
    ///
    /// Returns `None` for an empty body.
    pub fn from_segments(body: Vec<Coordinate>, direction: Direction) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        Some(Self { body, direction })
    }

    /// Get the head position
    pub fn head(&self) -> Coordinate {
        self.body[0]
    }

    pub fn segments(&self) -> &[Coordinate] {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction of the last accepted move, read from the neck-to-head step.
    /// `None` while the snake is a single segment.
    pub fn travel_direction(&self) -> Option<Direction> {
        match self.body.as_slice() {
            [head, neck, ..] => Direction::ALL
                .into_iter()
                .find(|dir| neck.moved_in_direction(*dir) == *head),
            _ => None,
        }
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Check if position collides with any segment, tail included
    pub fn occupies(&self, pos: Coordinate) -> bool {
        self.body.contains(&pos)
    }

    /// Put a new head in front without dropping the tail
    pub(crate) fn grow_to(&mut self, new_head: Coordinate) {
        self.body.insert(0, new_head);
    }

    /// Every segment takes its predecessor's cell and `new_head` leads
    pub(crate) fn shift_to(&mut self, new_head: Coordinate) {
        self.body.rotate_right(1);
        self.body[0] = new_head;
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for the `len` convention
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// The single food slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Food {
    position: Coordinate,
    visible: bool,
}

impl Food {
    /// Hidden food parked off the board
    pub fn hidden() -> Self {
        Self {
            position: Coordinate::new(-1, -1),
            visible: false,
        }
    }

    pub fn visible_at(position: Coordinate) -> Self {
        Self {
            position,
            visible: true,
        }
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// True when visible food sits on `pos`
    pub fn is_at(&self, pos: Coordinate) -> bool {
        self.visible && self.position == pos
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Draw a fresh interior cell uniformly and show the food there
    pub fn refresh<R: Rng + ?Sized>(&mut self, grid: &GridSpace, rng: &mut R) {
        self.position = Coordinate::new(
            rng.gen_range(grid.interior_x()),
            rng.gen_range(grid.interior_y()),
        );
        self.visible = true;
    }

    /// Like [`Food::refresh`], restricted to cells the snake does not occupy.
    ///
    /// Returns false and leaves the food hidden when no free cell is left.
    pub fn refresh_avoiding<R: Rng + ?Sized>(
        &mut self,
        grid: &GridSpace,
        snake: &Snake,
        rng: &mut R,
    ) -> bool {
        if snake.len() >= grid.interior_len() {
            self.visible = false;
            return false;
        }

        match grid
            .interior_cells()
            .filter(|cell| !snake.occupies(*cell))
            .choose(rng)
        {
            Some(cell) => {
                self.position = cell;
                self.visible = true;
                true
            }
            None => {
                self.visible = false;
                false
            }
        }
    }
}

/// Whether a round is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundState {
    Running,
    GameOver,
}

/// Read-only view of the engine handed to renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<'a> {
    pub grid: GridSpace,
    /// Head first; never empty
    pub segments: &'a [Coordinate],
    pub direction: Direction,
    pub food: Food,
    pub state: RoundState,
    /// Segments grown this round
    pub score: u32,
    pub ticks: u64,
}

impl Snapshot<'_> {
    pub fn head(&self) -> Coordinate {
        self.segments[0]
    }

    pub fn is_running(&self) -> bool {
        self.state == RoundState::Running
    }
}
