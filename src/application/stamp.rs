use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::SoupConfig;
use crate::domain::{Action, CatalogEntry, Cell, CellGrid, Pattern, PatternId, PatternLibrary};

/// The pattern currently armed for placement
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveStamp {
    pub id: PatternId,
    pub pattern: Pattern,
}

impl ActiveStamp {
    /// Preview bounding box as (rows, cols)
    pub fn bounds(&self) -> (i32, i32) {
        (self.pattern.rows, self.pattern.cols)
    }

    /// Absolute cells this stamp would cover at `anchor`
    pub fn footprint(&self, anchor: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.pattern.offsets.iter().map(move |&o| anchor.offset(o))
    }
}

/// StampTool composes catalog patterns into a grid.
///
/// Idle until a shape is selected; stays armed across commits so the same
/// shape can be stamped repeatedly. Reselecting the armed shape, `cancel`,
/// or the Clear action returns it to Idle.
#[derive(Clone, Debug)]
pub struct StampTool {
    library: PatternLibrary,
    active: Option<ActiveStamp>,
    soup: SoupConfig,
    soup_center: Cell,
    rng: StdRng,
}

impl StampTool {
    pub fn new(soup: SoupConfig) -> Self {
        Self::with_seed(soup, rand::random())
    }

    /// Deterministic soup placement, for tests and replays
    pub fn with_seed(soup: SoupConfig, seed: u64) -> Self {
        Self {
            library: PatternLibrary::new(),
            active: None,
            soup,
            soup_center: Cell::new(0, 0),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn active(&self) -> Option<&ActiveStamp> {
        self.active.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    pub fn is_selected(&self, id: PatternId) -> bool {
        self.active.as_ref().is_some_and(|a| a.id == id)
    }

    /// Where Random Soup lands; the UI keeps this at the visible center
    pub fn set_soup_center(&mut self, center: Cell) {
        self.soup_center = center;
    }

    pub fn soup_center(&self) -> Cell {
        self.soup_center
    }

    /// Handle a catalog click. Shapes toggle the armed stamp; actions run
    /// immediately against `grid` and leave the tool Idle.
    pub fn select(&mut self, entry: impl Into<CatalogEntry>, grid: &mut CellGrid) {
        match entry.into() {
            CatalogEntry::Action(Action::Clear) => {
                grid.clear();
                self.active = None;
                debug!("grid cleared");
            }
            CatalogEntry::Action(Action::RandomSoup) => {
                let before = grid.population();
                scatter_soup(grid, self.soup_center, self.soup, &mut self.rng);
                self.active = None;
                debug!(
                    added = grid.population() - before,
                    center = ?self.soup_center,
                    "random soup scattered"
                );
            }
            CatalogEntry::Pattern(id) if self.is_selected(id) => {
                self.active = None;
                debug!(pattern = id.name(), "stamp deselected");
            }
            CatalogEntry::Pattern(id) => {
                let pattern = self.library.pattern(id).clone();
                debug!(pattern = id.name(), rows = pattern.rows, cols = pattern.cols, "stamp selected");
                self.active = Some(ActiveStamp { id, pattern });
            }
        }
    }

    /// Select by display name. Names outside the catalog change nothing.
    pub fn select_name(&mut self, name: &str, grid: &mut CellGrid) {
        match CatalogEntry::from_name(name) {
            Some(entry) => self.select(entry, grid),
            None => debug!(name, "unknown catalog name ignored"),
        }
    }

    /// Stamp the armed pattern with its (0, 0) offset at `anchor`.
    /// Only turns cells on. Does nothing while Idle.
    pub fn commit(&self, anchor: Cell, grid: &mut CellGrid) {
        let Some(active) = &self.active else {
            return;
        };
        active.footprint(anchor).for_each(|cell| grid.set_alive(cell));
    }

    /// Disarm without touching the grid
    pub fn cancel(&mut self) {
        self.active = None;
    }
}

impl Default for StampTool {
    fn default() -> Self {
        Self::new(SoupConfig::default())
    }
}

/// Turn on `soup.count` cells drawn uniformly within `soup.radius` of
/// `center` on each axis. Repeats land on live cells and collapse.
pub fn scatter_soup(grid: &mut CellGrid, center: Cell, soup: SoupConfig, rng: &mut impl Rng) {
    let radius = soup.radius.max(0);
    for _ in 0..soup.count {
        let dr = rng.random_range(-radius..=radius);
        let dc = rng.random_range(-radius..=radius);
        grid.set_alive(center.offset((dr, dc)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool() -> StampTool {
        StampTool::with_seed(SoupConfig::default(), 7)
    }

    #[test]
    fn test_starts_idle() {
        assert!(tool().is_idle());
    }

    #[test]
    fn test_select_arms_pattern() {
        let mut tool = tool();
        let mut grid = CellGrid::new();
        tool.select(PatternId::Glider, &mut grid);
        let active = tool.active().unwrap();
        assert_eq!(active.id, PatternId::Glider);
        assert_eq!(active.bounds(), (3, 3));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_reselect_toggles_off() {
        let mut tool = tool();
        let mut grid = CellGrid::new();
        tool.select(PatternId::Glider, &mut grid);
        tool.select(PatternId::Glider, &mut grid);
        assert!(tool.is_idle());
    }

    #[test]
    fn test_select_other_switches() {
        let mut tool = tool();
        let mut grid = CellGrid::new();
        tool.select(PatternId::Glider, &mut grid);
        tool.select(PatternId::Block, &mut grid);
        assert!(tool.is_selected(PatternId::Block));
    }

    #[test]
    fn test_commit_places_offsets_at_anchor() {
        let mut tool = tool();
        let mut grid = CellGrid::new();
        tool.select(PatternId::Blinker, &mut grid);
        tool.commit(Cell::new(5, 5), &mut grid);

        let live: Vec<_> = {
            let mut v: Vec<_> = grid.iter().collect();
            v.sort();
            v
        };
        assert_eq!(live, vec![Cell::new(5, 5), Cell::new(6, 5), Cell::new(7, 5)]);
        assert!(tool.is_selected(PatternId::Blinker));
    }

    #[test]
    fn test_commit_is_additive() {
        let mut tool = tool();
        let mut grid = CellGrid::from_cells([Cell::new(0, 0), Cell::new(-4, 9)]);
        tool.select(PatternId::Block, &mut grid);
        tool.commit(Cell::new(0, 0), &mut grid);
        assert!(grid.is_alive(Cell::new(-4, 9)));
        assert_eq!(grid.population(), 5);
    }

    #[test]
    fn test_commit_while_idle_is_noop() {
        let tool = tool();
        let mut grid = CellGrid::from_cells([Cell::new(1, 1)]);
        tool.commit(Cell::new(0, 0), &mut grid);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_commit_leaves_generation_alone() {
        let mut tool = tool();
        let mut grid = crate::domain::RuleEngine::new().run(&CellGrid::new(), 3);
        tool.select(PatternId::Glider, &mut grid);
        tool.commit(Cell::new(0, 0), &mut grid);
        assert_eq!(grid.generation(), 3);
    }

    #[test]
    fn test_cancel_keeps_grid() {
        let mut tool = tool();
        let mut grid = CellGrid::new();
        tool.select(PatternId::Glider, &mut grid);
        tool.commit(Cell::new(0, 0), &mut grid);
        tool.cancel();
        assert!(tool.is_idle());
        assert_eq!(grid.population(), 5);
    }

    #[test]
    fn test_clear_action_clears_grid_and_selection() {
        let mut tool = tool();
        let mut grid = CellGrid::new();
        tool.select(PatternId::Glider, &mut grid);
        tool.commit(Cell::new(0, 0), &mut grid);
        tool.select(Action::Clear, &mut grid);
        assert!(tool.is_idle());
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn test_random_soup_stays_in_radius() {
        let mut tool = tool();
        let mut grid = CellGrid::new();
        tool.set_soup_center(Cell::new(45, 40));
        assert_eq!(tool.soup_center(), Cell::new(45, 40));
        tool.select(PatternId::Glider, &mut grid);
        tool.select(Action::RandomSoup, &mut grid);

        assert!(tool.is_idle());
        assert!(grid.population() > 0);
        assert!(grid.population() <= 400);
        assert!(grid.iter().all(|c| (c.row - 45).abs() <= 15 && (c.col - 40).abs() <= 15));
    }

    #[test]
    fn test_random_soup_is_reproducible_with_seed() {
        let mut a = CellGrid::new();
        let mut b = CellGrid::new();
        tool().select(Action::RandomSoup, &mut a);
        tool().select(Action::RandomSoup, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_select_name() {
        let mut tool = tool();
        let mut grid = CellGrid::new();
        tool.select_name("Gosper Glider Gun", &mut grid);
        assert!(tool.is_selected(PatternId::GosperGliderGun));
        tool.select_name("No Such Thing", &mut grid);
        assert!(tool.is_selected(PatternId::GosperGliderGun));
        tool.select_name("Clear", &mut grid);
        assert!(tool.is_idle());
    }
}
