use std::collections::HashSet;

use tracing::trace;

use super::{CellGrid, cell};

/// Trait for the per-cell transition of a Life-like automaton
pub trait Rule {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Next state of a cell given its current state and live-neighbor count
    fn evolve(&self, alive: bool, neighbors: u8) -> bool;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - Classic"
    }

    fn evolve(&self, alive: bool, neighbors: u8) -> bool {
        cell::conway(alive, neighbors)
    }
}

/// RuleEngine computes successor generations of a sparse grid.
/// Stepping never mutates its input; every generation reads a complete
/// snapshot of the previous one.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleEngine<R = ConwayRule> {
    rule: R,
}

impl RuleEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Rule> RuleEngine<R> {
    pub fn with_rule(rule: R) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Produce the next generation.
    /// Only live cells and their neighbors are examined, so the cost is
    /// proportional to population rather than to any grid area.
    pub fn step(&self, grid: &CellGrid) -> CellGrid {
        let candidates: HashSet<_> = grid
            .iter()
            .flat_map(|c| std::iter::once(c).chain(c.neighbors()))
            .collect();

        let next: HashSet<_> = candidates
            .into_iter()
            .filter(|&c| self.rule.evolve(grid.is_alive(c), grid.neighbor_count(c)))
            .collect();

        let stepped = CellGrid::with_generation(next, grid.generation() + 1);
        trace!(
            generation = stepped.generation(),
            population = stepped.population(),
            "stepped"
        );
        stepped
    }

    /// Apply `generations` successive steps
    pub fn run(&self, grid: &CellGrid, generations: u64) -> CellGrid {
        (0..generations).fold(grid.clone(), |g, _| self.step(&g))
    }
}
