use crate::game::{Coordinate, Food, GridSpace};

/// What occupies one board cell in a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Floor,
    Wall,
    Food,
    Head,
    Body,
}

impl Cell {
    pub fn glyph(&self) -> &'static str {
        match self {
            Cell::Floor => " ",
            Cell::Wall => "#",
            Cell::Food => "*",
            Cell::Head => "@",
            Cell::Body => "=",
        }
    }
}

/// Cell buffer covering the whole grid, border included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Floor; width * height],
        }
    }

    pub fn for_grid(grid: &GridSpace) -> Self {
        Self::new(grid.width() as usize, grid.height() as usize)
    }

    fn index(&self, pos: Coordinate) -> Option<usize> {
        let (x, y) = (usize::try_from(pos.x).ok()?, usize::try_from(pos.y).ok()?);
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    /// Paint one cell; positions off the canvas are ignored
    pub fn set(&mut self, pos: Coordinate, cell: Cell) {
        if let Some(idx) = self.index(pos) {
            self.cells[idx] = cell;
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Plain-text form, one line per row
    pub fn to_text(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(Cell::glyph).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Something that can draw itself onto a [`Canvas`]
pub trait Renderable {
    fn paint(&self, canvas: &mut Canvas);
}

impl Renderable for GridSpace {
    fn paint(&self, canvas: &mut Canvas) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let pos = Coordinate::new(x, y);
                let cell = if self.is_border(pos) {
                    Cell::Wall
                } else {
                    Cell::Floor
                };
                canvas.set(pos, cell);
            }
        }
    }
}

impl Renderable for Food {
    fn paint(&self, canvas: &mut Canvas) {
        if self.is_visible() {
            canvas.set(self.position(), Cell::Food);
        }
    }
}

/// Snake segments as a paintable layer, head first
pub struct SnakeBody<'a>(pub &'a [Coordinate]);

impl Renderable for SnakeBody<'_> {
    fn paint(&self, canvas: &mut Canvas) {
        // Tail first so the head stays on top after a collision
        for pos in self.0.iter().skip(1).rev() {
            canvas.set(*pos, Cell::Body);
        }
        if let Some(head) = self.0.first() {
            canvas.set(*head, Cell::Head);
        }
    }
}
