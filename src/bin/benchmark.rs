//! Step-cost benchmark on patterns that keep growing

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use stamp_life::application::scatter_soup;
use stamp_life::config::SoupConfig;
use stamp_life::{Cell, CellGrid, PatternId, PatternLibrary, RuleEngine};

fn seeded(id: PatternId) -> CellGrid {
    let library = PatternLibrary::new();
    CellGrid::from_cells(library.pattern(id).offsets.iter().map(|&o| Cell::new(0, 0).offset(o)))
}

fn soup() -> CellGrid {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut grid = CellGrid::new();
    scatter_soup(&mut grid, Cell::new(0, 0), SoupConfig { count: 4_000, radius: 60 }, &mut rng);
    grid
}

/// Returns (ms per generation, final population)
fn benchmark(grid: CellGrid, generations: u64) -> (f64, usize) {
    let engine = RuleEngine::new();
    let mut grid = grid;

    let start = Instant::now();
    for _ in 0..generations {
        grid = engine.step(&grid);
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / generations as f64;
    (ms, grid.population())
}

fn main() {
    println!("=== Sparse Life Step Benchmark ===\n");

    let cases: Vec<(&str, CellGrid, u64)> = vec![
        ("Acorn", seeded(PatternId::Acorn), 1_000),
        ("Switch Engine", seeded(PatternId::SwitchEngine), 1_000),
        ("Gosper Glider Gun", seeded(PatternId::GosperGliderGun), 1_000),
        ("Infinite Growth 2", seeded(PatternId::InfiniteGrowth2), 1_000),
        ("Random Soup (4000 draws)", soup(), 500),
    ];

    println!("{:<28} {:>8} {:>12} {:>12}", "Pattern", "Gens", "ms/gen", "Final pop");
    println!("{}", "-".repeat(64));

    for (name, grid, generations) in cases {
        let (ms, population) = benchmark(grid, generations);
        println!("{:<28} {:>8} {:>12.3} {:>12}", name, generations, ms, population);
    }
}
