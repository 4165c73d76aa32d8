use std::collections::HashSet;

use super::Cell;

/// CellGrid is the sparse live-cell field of one simulation.
/// Only live cells are stored, so patterns may grow without bound.
/// Population is always the size of the live set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellGrid {
    cells: HashSet<Cell>,
    generation: u64,
}

impl CellGrid {
    /// Create an empty grid at generation 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid at generation 0 holding the given live cells
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            generation: 0,
        }
    }

    /// Successor grid produced by the rule engine
    pub(crate) fn with_generation(cells: HashSet<Cell>, generation: u64) -> Self {
        Self { cells, generation }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn set_alive(&mut self, cell: Cell) {
        self.cells.insert(cell);
    }

    pub fn set_dead(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }

    /// Flip a cell and return its new state
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.cells.remove(&cell) {
            false
        } else {
            self.cells.insert(cell);
            true
        }
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.cells.clear();
        self.generation = 0;
    }

    /// Live cells in the Moore neighborhood (0..=8), no wraparound
    pub fn neighbor_count(&self, cell: Cell) -> u8 {
        cell.neighbors().filter(|n| self.is_alive(*n)).count() as u8
    }

    /// Iterate over live cells in no particular order
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Inclusive bounding box of the live cells as (top-left, bottom-right)
    pub fn bounds(&self) -> Option<(Cell, Cell)> {
        self.iter().fold(None, |acc, c| match acc {
            None => Some((c, c)),
            Some((lo, hi)) => Some((
                Cell::new(lo.row.min(c.row), lo.col.min(c.col)),
                Cell::new(hi.row.max(c.row), hi.col.max(c.col)),
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = CellGrid::new();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 0);
        assert!(grid.bounds().is_none());
    }

    #[test]
    fn test_set_alive_is_idempotent() {
        let mut grid = CellGrid::new();
        grid.set_alive(Cell::new(2, 3));
        grid.set_alive(Cell::new(2, 3));
        assert_eq!(grid.population(), 1);
        assert!(grid.is_alive(Cell::new(2, 3)));
    }

    #[test]
    fn test_set_dead_is_idempotent() {
        let mut grid = CellGrid::from_cells([Cell::new(0, 0)]);
        grid.set_dead(Cell::new(0, 0));
        grid.set_dead(Cell::new(0, 0));
        grid.set_dead(Cell::new(9, 9));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_negative_coordinates() {
        let mut grid = CellGrid::new();
        grid.set_alive(Cell::new(-1_000, -5));
        assert!(grid.is_alive(Cell::new(-1_000, -5)));
        assert_eq!(grid.neighbor_count(Cell::new(-999, -4)), 1);
    }

    #[test]
    fn test_toggle() {
        let mut grid = CellGrid::new();
        assert!(grid.toggle(Cell::new(1, 1)));
        assert!(!grid.toggle(Cell::new(1, 1)));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_neighbor_count() {
        // Full 3x3 block
        let grid = CellGrid::from_cells(
            (0..3).flat_map(|r| (0..3).map(move |c| Cell::new(r, c))),
        );
        assert_eq!(grid.neighbor_count(Cell::new(1, 1)), 8);
        assert_eq!(grid.neighbor_count(Cell::new(0, 0)), 3);
        assert_eq!(grid.neighbor_count(Cell::new(-1, -1)), 1);
        assert_eq!(grid.neighbor_count(Cell::new(5, 5)), 0);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut grid = CellGrid::with_generation([Cell::new(4, 4)].into_iter().collect(), 12);
        grid.clear();
        grid.clear();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn test_bounds() {
        let grid = CellGrid::from_cells([Cell::new(-2, 5), Cell::new(3, -1), Cell::new(0, 0)]);
        assert_eq!(grid.bounds(), Some((Cell::new(-2, -1), Cell::new(3, 5))));
    }
}
