//! Property-based tests for the stepping, stamping and playback contracts.

use std::collections::HashSet;

use proptest::prelude::*;
use stamp_life::config::{PlaybackConfig, SoupConfig};
use stamp_life::{Action, Cell, CellGrid, PatternId, PlaybackController, RuleEngine, Session, StampTool};

fn live(grid: &CellGrid) -> HashSet<Cell> {
    grid.iter().collect()
}

/// Reference B3/S23 step over a plain set, counting neighbors per candidate
fn step_naive(cells: &HashSet<Cell>) -> HashSet<Cell> {
    let candidates: HashSet<Cell> = cells
        .iter()
        .flat_map(|c| (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| c.offset((dr, dc)))))
        .collect();
    candidates
        .into_iter()
        .filter(|c| {
            let n = c.neighbors().filter(|x| cells.contains(x)).count();
            matches!((cells.contains(c), n), (true, 2 | 3) | (false, 3))
        })
        .collect()
}

fn arb_cells() -> impl Strategy<Value = Vec<Cell>> {
    prop::collection::vec((-12i32..12, -12i32..12).prop_map(Cell::from), 0..80)
}

fn arb_pattern() -> impl Strategy<Value = PatternId> {
    prop::sample::select(PatternId::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_generation_counts_steps(cells in arb_cells(), n in 0u64..12) {
        let grid = CellGrid::from_cells(cells);
        let snapshot = grid.clone();
        let stepped = RuleEngine::new().run(&grid, n);
        prop_assert_eq!(stepped.generation(), grid.generation() + n);
        prop_assert_eq!(grid, snapshot);
    }

    #[test]
    fn prop_population_matches_live_set(cells in arb_cells(), n in 0u64..6) {
        let stepped = RuleEngine::new().run(&CellGrid::from_cells(cells), n);
        prop_assert_eq!(stepped.population(), stepped.iter().count());
    }

    #[test]
    fn prop_step_matches_reference(cells in arb_cells()) {
        let grid = CellGrid::from_cells(cells);
        let expected = step_naive(&live(&grid));
        prop_assert_eq!(live(&RuleEngine::new().step(&grid)), expected);
    }

    #[test]
    fn prop_commit_is_additive(
        cells in arb_cells(),
        id in arb_pattern(),
        row in -50i32..50,
        col in -50i32..50,
    ) {
        let mut grid = CellGrid::from_cells(cells);
        let before = live(&grid);
        let mut tool = StampTool::with_seed(SoupConfig::default(), 0);
        tool.select(id, &mut grid);
        tool.commit(Cell::new(row, col), &mut grid);

        let after = live(&grid);
        prop_assert!(after.is_superset(&before));
        prop_assert!(tool.is_selected(id));
    }

    #[test]
    fn prop_paused_advance_never_steps(cells in arb_cells(), dts in prop::collection::vec(0.0f32..100.0, 1..20)) {
        let mut playback = PlaybackController::new(&PlaybackConfig::default());
        let mut grid = CellGrid::from_cells(cells);
        let snapshot = grid.clone();
        for dt in dts {
            prop_assert!(!playback.advance(dt, &mut grid));
        }
        prop_assert_eq!(grid, snapshot);
    }

    #[test]
    fn prop_set_speed_always_in_range(index in 0usize..1000) {
        let mut playback = PlaybackController::default();
        playback.set_speed(index);
        prop_assert!(playback.speed_index() < 10);
        prop_assert_eq!(playback.speed_index(), index.min(9));
    }
}

#[test]
fn glider_reappears_shifted_after_four_steps() {
    let mut session = Session::default();
    session.select(PatternId::Glider);
    session.commit(Cell::new(10, -3));
    let start = live(session.grid());

    let grid = RuleEngine::new().run(session.grid(), 4);
    let shifted: HashSet<Cell> = start.iter().map(|c| c.offset((1, 1))).collect();
    assert_eq!(live(&grid), shifted);
    assert_eq!(grid.population(), 5);
}

#[test]
fn pulsar_has_period_three() {
    let mut grid = CellGrid::new();
    let mut tool = StampTool::with_seed(SoupConfig::default(), 0);
    tool.select(PatternId::Pulsar, &mut grid);
    tool.commit(Cell::new(0, 0), &mut grid);

    let engine = RuleEngine::new();
    let once = engine.step(&grid);
    assert_ne!(live(&once), live(&grid));
    assert_eq!(live(&engine.run(&grid, 3)), live(&grid));
}

#[test]
fn glider_gun_keeps_growing() {
    let mut grid = CellGrid::new();
    let mut tool = StampTool::with_seed(SoupConfig::default(), 0);
    tool.select(PatternId::GosperGliderGun, &mut grid);
    tool.commit(Cell::new(0, 0), &mut grid);

    let engine = RuleEngine::new();
    let early = engine.run(&grid, 60).population();
    let late = engine.run(&grid, 240).population();
    assert!(late > early, "gun should keep emitting gliders ({early} -> {late})");
}

#[test]
fn toggle_then_clear_scenario() {
    let mut session = Session::default();
    session.select(PatternId::Glider);
    session.select(PatternId::Glider);
    assert!(session.stamp().is_idle());

    session.select(PatternId::Block);
    session.commit(Cell::new(0, 0));
    session.commit(Cell::new(10, 10));
    assert_eq!(session.population(), 8);

    session.select(Action::Clear);
    session.select(Action::Clear);
    assert_eq!(session.population(), 0);
    assert_eq!(session.generation(), 0);
    assert!(session.stamp().is_idle());
}
