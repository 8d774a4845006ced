use super::direction::Direction;
use super::grid::{Bounds, Cell};
use std::collections::VecDeque;

/// Snake state.
///
/// The body holds every occupied cell except the head, with the most recent
/// at the end; the cell at the front is the tail, vacated first.  A snake is
/// never shorter than one cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snake {
    /// The position of the snake's head
    pub(super) head: Cell,

    /// The positions of all of the cells in the snake's body, with the most
    /// recent at the end
    pub(super) body: VecDeque<Cell>,

    /// The heading the snake is committed to moving in
    pub(super) direction: Direction,

    /// A direction change requested since the last tick, committed at the
    /// start of the next one.  At most one is pending; the latest legal
    /// request wins.
    pub(super) queued: Option<Direction>,
}

impl Snake {
    /// Create a new snake with its head at `head`, facing `direction`, with
    /// `length` cells laid out behind the head (truncated at a
    /// non-wraparound edge).
    pub(super) fn new(head: Cell, direction: Direction, length: usize, bounds: Bounds) -> Snake {
        let mut body = VecDeque::new();
        let backwards = direction.opposite();
        let mut cell = head;
        for _ in 1..length {
            let Some(next) = backwards.advance(cell, bounds) else {
                break;
            };
            body.push_front(next);
            cell = next;
        }
        Snake {
            head,
            body,
            direction,
            queued: None,
        }
    }

    /// Return the position of the snake's head
    pub fn head(&self) -> Cell {
        self.head
    }

    /// Return the heading the snake is committed to
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Total number of cells the snake occupies, head included
    pub fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Always false; a snake occupies at least its head cell
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the occupied cells, head first, tail last
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.body.iter().rev().copied())
    }

    /// Does the snake occupy `cell`?
    pub fn contains(&self, cell: Cell) -> bool {
        self.head == cell || self.body.contains(&cell)
    }

    /// Request a direction change.  A request directly opposite the
    /// committed heading is silently ignored; a later legal request replaces
    /// an earlier one.
    pub(super) fn queue_turn(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.queued = Some(direction);
        }
    }

    /// Commit the queued direction change, if any, as the new heading
    pub(super) fn commit_turn(&mut self) {
        if let Some(direction) = self.queued.take() {
            self.direction = direction;
        }
    }

    /// Move the head to `new_head`.  If `grow` is false, the tail cell is
    /// vacated, keeping the length unchanged; otherwise the snake gains one
    /// cell.
    pub(super) fn step_to(&mut self, new_head: Cell, grow: bool) {
        self.body.push_back(self.head);
        self.head = new_head;
        if !grow {
            let _ = self.body.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(20, false)
    }

    #[test]
    fn new_single_cell() {
        let snake = Snake::new(Cell::new(10, 10), Direction::Right, 1, bounds());
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(10, 10));
        assert_eq!(snake.cells().collect::<Vec<_>>(), vec![Cell::new(10, 10)]);
    }

    #[test]
    fn new_lays_body_behind_head() {
        let snake = Snake::new(Cell::new(10, 10), Direction::Right, 3, bounds());
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            vec![Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)]
        );
    }

    #[test]
    fn new_truncates_at_edge() {
        let snake = Snake::new(Cell::new(1, 10), Direction::Right, 5, bounds());
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn queue_turn_rejects_reversal() {
        let mut snake = Snake::new(Cell::new(10, 10), Direction::Right, 1, bounds());
        snake.queue_turn(Direction::Left);
        snake.commit_turn();
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn queue_turn_accepts_perpendicular() {
        let mut snake = Snake::new(Cell::new(10, 10), Direction::Right, 1, bounds());
        snake.queue_turn(Direction::Up);
        snake.commit_turn();
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn latest_legal_request_wins() {
        let mut snake = Snake::new(Cell::new(10, 10), Direction::Right, 1, bounds());
        snake.queue_turn(Direction::Up);
        snake.queue_turn(Direction::Down);
        snake.commit_turn();
        assert_eq!(snake.direction(), Direction::Down);
    }

    #[test]
    fn illegal_request_keeps_earlier_one() {
        let mut snake = Snake::new(Cell::new(10, 10), Direction::Right, 1, bounds());
        snake.queue_turn(Direction::Up);
        snake.queue_turn(Direction::Left);
        snake.commit_turn();
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn step_without_growth_keeps_length() {
        let mut snake = Snake::new(Cell::new(10, 10), Direction::Right, 3, bounds());
        snake.step_to(Cell::new(11, 10), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(11, 10));
        assert!(!snake.contains(Cell::new(8, 10)));
    }

    #[test]
    fn step_with_growth_adds_one_cell() {
        let mut snake = Snake::new(Cell::new(10, 10), Direction::Right, 3, bounds());
        snake.step_to(Cell::new(11, 10), true);
        assert_eq!(snake.len(), 4);
        assert!(snake.contains(Cell::new(8, 10)));
    }

    #[test]
    fn no_duplicate_cells_after_steps() {
        use std::collections::HashSet;
        let mut snake = Snake::new(Cell::new(10, 10), Direction::Right, 4, bounds());
        for x in 11..=15 {
            snake.step_to(Cell::new(x, 10), false);
            let cells = snake.cells().collect::<Vec<_>>();
            let unique = cells.iter().copied().collect::<HashSet<_>>();
            assert_eq!(cells.len(), unique.len());
        }
    }
}
