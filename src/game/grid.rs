use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::error::GameError;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move coordinate by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move coordinate one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    pub fn manhattan_distance(&self, other: Coordinate) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Bounded coordinate system of the board.
///
/// `low_bound` is `(0, 0)` and `up_bound` is `(width, height)`. The outermost
/// ring of cells is wall; only cells strictly inside it are playable, on both
/// axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpace {
    width: i32,
    height: i32,
}

impl GridSpace {
    /// Smallest side that still leaves one interior cell.
    pub const MIN_SIDE: i32 = 3;
    /// Largest side accepted; keeps cell enumeration and frame buffers bounded.
    pub const MAX_SIDE: i32 = 1000;

    pub fn new(width: i32, height: i32) -> Result<Self, GameError> {
        let sides = Self::MIN_SIDE..=Self::MAX_SIDE;
        if !sides.contains(&width) || !sides.contains(&height) {
            return Err(GameError::InvalidBounds { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn low_bound(&self) -> Coordinate {
        Coordinate::new(0, 0)
    }

    pub fn up_bound(&self) -> Coordinate {
        Coordinate::new(self.width, self.height)
    }

    /// True iff `c` is a playable cell: `low < c < up - 1` on both axes
    pub fn contains(&self, c: Coordinate) -> bool {
        let low = self.low_bound();
        let up = self.up_bound();
        low.x < c.x && c.x < up.x - 1 && low.y < c.y && c.y < up.y - 1
    }

    /// True iff `c` lies on the wall ring around the playable area
    pub fn is_border(&self, c: Coordinate) -> bool {
        let on_grid = (0..self.width).contains(&c.x) && (0..self.height).contains(&c.y);
        on_grid && !self.contains(c)
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.width / 2, self.height / 2)
    }

    /// Inclusive range of playable x values
    pub fn interior_x(&self) -> std::ops::RangeInclusive<i32> {
        1..=self.width - 2
    }

    /// Inclusive range of playable y values
    pub fn interior_y(&self) -> std::ops::RangeInclusive<i32> {
        1..=self.height - 2
    }

    /// Number of playable cells
    pub fn interior_len(&self) -> usize {
        (self.width - 2) as usize * (self.height - 2) as usize
    }

    /// Every playable cell, row by row
    pub fn interior_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.interior_y()
            .flat_map(move |y| self.interior_x().map(move |x| Coordinate::new(x, y)))
    }
}
