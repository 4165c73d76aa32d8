use tracing::debug;

use crate::config::SimConfig;
use crate::domain::{CatalogEntry, Cell, CellGrid};

use super::{Brush, PlaybackController, StampTool};

/// Session owns one running simulation and the tools that edit it.
/// This is the application layer the frontend drives; nothing here is
/// global, so independent sessions can run side by side.
#[derive(Clone, Debug)]
pub struct Session {
    grid: CellGrid,
    stamp: StampTool,
    playback: PlaybackController,
    brush: Brush,
}

impl Session {
    pub fn new(config: &SimConfig) -> Self {
        Self::from_parts(StampTool::new(config.soup), PlaybackController::new(&config.playback))
    }

    /// Assemble a session around preconfigured tools (e.g. a seeded stamp tool)
    pub fn from_parts(stamp: StampTool, playback: PlaybackController) -> Self {
        Self {
            grid: CellGrid::new(),
            stamp,
            playback,
            brush: Brush::new(),
        }
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn stamp(&self) -> &StampTool {
        &self.stamp
    }

    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn generation(&self) -> u64 {
        self.grid.generation()
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Advance the simulation by one frame of wall time
    pub fn tick(&mut self, real_dt: f32) -> bool {
        self.playback.advance(real_dt, &mut self.grid)
    }

    pub fn select(&mut self, entry: impl Into<CatalogEntry>) {
        self.stamp.select(entry, &mut self.grid);
    }

    pub fn select_name(&mut self, name: &str) {
        self.stamp.select_name(name, &mut self.grid);
    }

    pub fn commit(&mut self, anchor: Cell) {
        self.stamp.commit(anchor, &mut self.grid);
    }

    pub fn cancel_stamp(&mut self) {
        self.stamp.cancel();
    }

    pub fn set_soup_center(&mut self, center: Cell) {
        self.stamp.set_soup_center(center);
    }

    pub fn toggle_play(&mut self) {
        self.playback.toggle_play();
    }

    pub fn set_speed(&mut self, index: usize) {
        self.playback.set_speed(index);
    }

    pub fn speed_up(&mut self) {
        self.playback.speed_up();
    }

    pub fn speed_down(&mut self) {
        self.playback.speed_down();
    }

    /// Clear the grid and stop playback
    pub fn reset(&mut self) {
        self.grid.clear();
        self.playback.pause();
        debug!("session reset");
    }

    /// Start a freehand stroke; ignored while a stamp is armed
    pub fn begin_stroke(&mut self, cell: Cell) {
        if self.stamp.is_idle() {
            self.brush.begin(cell, &mut self.grid);
        }
    }

    pub fn extend_stroke(&mut self, cell: Cell) {
        if self.stamp.is_idle() {
            self.brush.extend(cell, &mut self.grid);
        }
    }

    pub fn end_stroke(&mut self) {
        self.brush.end();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&SimConfig::default())
    }
}
