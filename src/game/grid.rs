use rand::Rng;
use std::fmt;

/// A single board coordinate, 0-indexed from the top-left corner
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
}

impl Cell {
    pub const fn new(x: u16, y: u16) -> Cell {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The coordinate space of a session: a square board of side `size`, either
/// bounded by walls or wrapping around at the edges
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bounds {
    size: u16,
    wrap: bool,
}

impl Bounds {
    pub fn new(size: u16, wrap: bool) -> Bounds {
        Bounds { size, wrap }
    }

    pub fn size(self) -> u16 {
        self.size
    }

    pub fn wrap(self) -> bool {
        self.wrap
    }

    pub fn contains(self, cell: Cell) -> bool {
        cell.x < self.size && cell.y < self.size
    }

    /// The cell at the middle of the board, where the snake starts
    pub fn center(self) -> Cell {
        Cell::new(self.size / 2, self.size / 2)
    }

    /// Iterate over every cell on the board, row by row
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Cell::new(x, y)))
    }

    /// Draw a cell uniformly at random from the whole board
    pub fn random_cell<R: Rng>(self, rng: &mut R) -> Cell {
        Cell::new(
            rng.random_range(0..self.size),
            rng.random_range(0..self.size),
        )
    }
}
