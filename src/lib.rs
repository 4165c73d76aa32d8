// Domain layer - cells, grid, rule engine, pattern catalog
pub mod domain;

// Application layer - session, stamping, playback
pub mod application;

// Configuration
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Action, CatalogEntry, Cell, CellGrid, Pattern, PatternId, PatternLibrary, RuleEngine};
pub use application::{Camera, PlaybackController, Session, StampTool};
pub use config::{ConfigError, SimConfig};
