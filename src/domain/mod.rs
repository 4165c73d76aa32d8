mod cell;
mod grid;
mod rules;
mod patterns;

pub use cell::{Cell, Offset, conway};
pub use grid::CellGrid;
pub use rules::{Rule, ConwayRule, RuleEngine};
pub use patterns::{Action, CatalogEntry, Category, Pattern, PatternId, PatternLibrary, CATALOG};
