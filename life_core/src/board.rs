// board.rs - Flat boolean grid for Conway's Game of Life

/// Default board width (cells).
pub const DEFAULT_WIDTH: usize = 100;
/// Default board height (cells).
pub const DEFAULT_HEIGHT: usize = 100;

/// Relative positions of the Moore neighborhood.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// One cell flipping state, as reported to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellChange {
    pub x: usize,
    pub y: usize,
    pub alive: bool,
}

/// Fixed-size W×H grid of cells stored row-major (`y * width + x`).
///
/// The dimensions are set once in [`Board::new`] and never change. There is
/// no wraparound: cells beyond the edge simply do not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Creates a board with every cell dead.
    ///
    /// # Panics
    /// If either dimension is zero or `width * height` overflows.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");
        let len = width.checked_mul(height)
            .unwrap_or_else(|| panic!("board {width}x{height} has too many cells"));
        Self { width, height, cells: vec![false; len] }
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    /// Explicit bounds test for signed coordinates.
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Flat index of (x, y), or `None` when outside the board.
    pub fn index(&self, x: isize, y: isize) -> Option<usize> {
        self.contains(x, y).then(|| y as usize * self.width + x as usize)
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width && y < self.height,
                "cell ({x}, {y}) outside {}x{} board", self.width, self.height);
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.offset(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let i = self.offset(x, y);
        self.cells[i] = alive;
    }

    /// Flips a cell and returns its new state.
    pub fn flip(&mut self, x: usize, y: usize) -> bool {
        let i = self.offset(x, y);
        self.cells[i] = !self.cells[i];
        self.cells[i]
    }

    /// Live cells among the up-to-8 neighbors of (x, y). Neighbors outside
    /// the board are excluded, so edges and corners have fewer candidates.
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height,
                "cell ({x}, {y}) outside {}x{} board", self.width, self.height);
        let mut count = 0;
        for &(dx, dy) in &NEIGHBORS {
            let (nx, ny) = (x as isize + dx, y as isize + dy);
            if let Some(i) = self.index(nx, ny) {
                if self.cells[i] { count += 1; }
            }
        }
        count
    }

    /// Changes the next generation would make, computed from the current
    /// board without mutating it.
    pub fn pending_changes(&self) -> Vec<CellChange> {
        let mut changes = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let alive = self.cells[y * self.width + x];
                let next = match (alive, self.neighbor_count(x, y)) {
                    (true, 2) | (true, 3) => true,   // Survival
                    (false, 3)            => true,   // Birth
                    _                     => false,  // Death or stays dead
                };
                if next != alive {
                    changes.push(CellChange { x, y, alive: next });
                }
            }
        }
        changes
    }

    /// Advances one generation in two passes: every next state is decided
    /// from the untouched snapshot, then the changes are written back.
    pub fn next_generation(&mut self) -> Vec<CellChange> {
        let changes = self.pending_changes();
        for change in &changes {
            self.set(change.x, change.y, change.alive);
        }
        changes
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Coordinates of every live cell in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i % width, i / width))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Board {
        let mut board = Board::new(width, height);
        for &(x, y) in alive { board.set(x, y, true); }
        board
    }

    #[test]
    fn test_new_board_is_dead() {
        let board = Board::default();
        assert_eq!(board.width(), 100);
        assert_eq!(board.height(), 100);
        assert!(board.is_empty());
        assert_eq!(board.population(), 0);
    }

    #[test]
    #[should_panic]
    fn test_zero_dimension_panics() {
        Board::new(0, 10);
    }

    #[test]
    #[should_panic(expected = "too many cells")]
    fn test_overflowing_dimensions_panic() {
        Board::new(usize::MAX, 2);
    }

    #[test]
    fn test_contains_and_index() {
        let board = Board::new(4, 3);
        assert!(board.contains(0, 0));
        assert!(board.contains(3, 2));
        assert!(!board.contains(-1, 0));
        assert!(!board.contains(0, -1));
        assert!(!board.contains(4, 0));
        assert!(!board.contains(0, 3));
        assert_eq!(board.index(2, 1), Some(6));
        assert_eq!(board.index(4, 1), None);
    }

    #[test]
    fn test_flat_layout_is_row_major() {
        let board = board_with(5, 4, &[(3, 2)]);
        assert_eq!(board.alive_cells().collect::<Vec<_>>(), vec![(3, 2)]);
        assert!(board.get(3, 2));
        assert!(!board.get(2, 3));
    }

    #[test]
    fn test_neighbor_count_interior() {
        let board = board_with(5, 5, &[(1, 1), (2, 1), (3, 1), (1, 3), (2, 2)]);
        // (2, 2) itself is alive but never counts
        assert_eq!(board.neighbor_count(2, 2), 4);
        assert_eq!(board.neighbor_count(2, 0), 3);
    }

    #[test]
    fn test_neighbor_count_corner_has_three_candidates() {
        let full = {
            let mut b = Board::new(3, 3);
            for y in 0..3 { for x in 0..3 { b.set(x, y, true); } }
            b
        };
        assert_eq!(full.neighbor_count(0, 0), 3);
        assert_eq!(full.neighbor_count(2, 2), 3);
        assert_eq!(full.neighbor_count(1, 0), 5);
        assert_eq!(full.neighbor_count(1, 1), 8);
    }

    #[test]
    fn test_no_wraparound() {
        let board = board_with(5, 5, &[(4, 4), (4, 0), (0, 4)]);
        assert_eq!(board.neighbor_count(0, 0), 0);
    }

    #[test]
    #[should_panic(expected = "outside 3x3 board")]
    fn test_neighbor_count_out_of_bounds_panics() {
        Board::new(3, 3).neighbor_count(3, 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut board = board_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let before = board.clone();
        assert!(board.next_generation().is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_next_generation_reports_changes() {
        let mut board = board_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let mut changes = board.next_generation();
        changes.sort_by_key(|c| (c.y, c.x));
        assert_eq!(changes, vec![
            CellChange { x: 2, y: 1, alive: true },
            CellChange { x: 1, y: 2, alive: false },
            CellChange { x: 3, y: 2, alive: false },
            CellChange { x: 2, y: 3, alive: true },
        ]);
    }
}
