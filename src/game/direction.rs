use super::grid::{Bounds, Cell};

/// One of the four headings the snake can move in
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Move `cell` one step in this direction within `bounds`.  Returns
    /// `None` if the step would cross a non-wraparound edge.
    pub fn advance(self, cell: Cell, bounds: Bounds) -> Option<Cell> {
        let Cell { mut x, mut y } = cell;
        match self {
            Direction::Up => {
                y = decrement_in_bounds(y, bounds.size(), bounds.wrap())?;
            }
            Direction::Down => {
                y = increment_in_bounds(y, bounds.size(), bounds.wrap())?;
            }
            Direction::Left => {
                x = decrement_in_bounds(x, bounds.size(), bounds.wrap())?;
            }
            Direction::Right => {
                x = increment_in_bounds(x, bounds.size(), bounds.wrap())?;
            }
        }
        Some(Cell { x, y })
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

fn decrement_in_bounds(x: u16, max: u16, wrap: bool) -> Option<u16> {
    if let Some(x2) = x.checked_sub(1) {
        Some(x2)
    } else if wrap {
        Some(max - 1)
    } else {
        None
    }
}

fn increment_in_bounds(x: u16, max: u16, wrap: bool) -> Option<u16> {
    if let Some(x2) = x.checked_add(1).filter(|&xx| xx < max) {
        Some(x2)
    } else if wrap {
        Some(0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        Direction::Up,
        Cell::new(2, 7),
        Bounds::new(15, false),
        Some(Cell::new(2, 6))
    )]
    #[case(
        Direction::Down,
        Cell::new(2, 7),
        Bounds::new(15, false),
        Some(Cell::new(2, 8))
    )]
    #[case(
        Direction::Right,
        Cell::new(2, 7),
        Bounds::new(15, false),
        Some(Cell::new(3, 7))
    )]
    #[case(
        Direction::Left,
        Cell::new(2, 7),
        Bounds::new(15, false),
        Some(Cell::new(1, 7))
    )]
    #[case(Direction::Up, Cell::new(2, 0), Bounds::new(15, false), None)]
    #[case(
        Direction::Up,
        Cell::new(2, 0),
        Bounds::new(15, true),
        Some(Cell::new(2, 14))
    )]
    #[case(Direction::Down, Cell::new(2, 14), Bounds::new(15, false), None)]
    #[case(
        Direction::Down,
        Cell::new(2, 14),
        Bounds::new(15, true),
        Some(Cell::new(2, 0))
    )]
    #[case(Direction::Right, Cell::new(14, 7), Bounds::new(15, false), None)]
    #[case(
        Direction::Right,
        Cell::new(14, 7),
        Bounds::new(15, true),
        Some(Cell::new(0, 7))
    )]
    #[case(Direction::Left, Cell::new(0, 7), Bounds::new(15, false), None)]
    #[case(
        Direction::Left,
        Cell::new(0, 7),
        Bounds::new(15, true),
        Some(Cell::new(14, 7))
    )]
    fn test_direction_advance(
        #[case] d: Direction,
        #[case] cell: Cell,
        #[case] bounds: Bounds,
        #[case] r: Option<Cell>,
    ) {
        assert_eq!(d.advance(cell, bounds), r);
    }

    #[rstest]
    #[case(Direction::Up, Direction::Down)]
    #[case(Direction::Down, Direction::Up)]
    #[case(Direction::Left, Direction::Right)]
    #[case(Direction::Right, Direction::Left)]
    fn test_opposite(#[case] d: Direction, #[case] opp: Direction) {
        assert_eq!(d.opposite(), opp);
    }
}
