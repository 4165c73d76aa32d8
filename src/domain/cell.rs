/// A coordinate on the unbounded Life plane.
/// Rows grow downward, columns grow to the right; both may be negative.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

/// Relative (dr, dc) displacement from a pattern's anchor
pub type Offset = (i32, i32);

/// The eight Moore-neighborhood displacements
const NEIGHBOR_OFFSETS: [Offset; 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Cell displaced by a relative offset
    pub const fn offset(self, (dr, dc): Offset) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// The 8 cells surrounding this one (no wraparound)
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS.into_iter().map(move |o| self.offset(o))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// B3/S23 transition for a single cell:
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
pub const fn conway(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert!(!conway(true, 0));
        assert!(!conway(true, 1));
    }

    #[test]
    fn test_survival() {
        assert!(conway(true, 2));
        assert!(conway(true, 3));
    }

    #[test]
    fn test_overpopulation() {
        assert!(!conway(true, 4));
        assert!(!conway(true, 8));
    }

    #[test]
    fn test_reproduction() {
        assert!(conway(false, 3));
        assert!(!conway(false, 2));
        assert!(!conway(false, 6));
    }

    #[test]
    fn test_neighbors_surround_cell() {
        let center = Cell::new(-3, 7);
        let around: Vec<Cell> = center.neighbors().collect();
        assert_eq!(around.len(), 8);
        assert!(!around.contains(&center));
        assert!(around.iter().all(|c| (c.row - center.row).abs() <= 1 && (c.col - center.col).abs() <= 1));
    }
}
