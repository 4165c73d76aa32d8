use tracing::debug;

use crate::config::PlaybackConfig;
use crate::domain::{CellGrid, RuleEngine};

/// PlaybackController turns wall-clock time into simulation steps.
/// The accumulator decouples the generation cadence from the render
/// frame rate: each frame feeds in scaled real time, and a step fires once
/// a whole base interval has built up.
#[derive(Clone, Debug)]
pub struct PlaybackController {
    engine: RuleEngine,
    playing: bool,
    speed_index: usize,
    speed_levels: Vec<f32>,
    base_interval: f32,
    accumulator: f32,
}

impl PlaybackController {
    /// Build a paused controller. The config is expected to be validated;
    /// an empty speed table falls back to a single 1x level.
    pub fn new(config: &PlaybackConfig) -> Self {
        let speed_levels = if config.speed_levels.is_empty() {
            vec![1.0]
        } else {
            config.speed_levels.clone()
        };
        let mut controller = Self {
            engine: RuleEngine::new(),
            playing: false,
            speed_index: 0,
            speed_levels,
            base_interval: config.base_interval(),
            accumulator: 0.0,
        };
        controller.set_speed(config.default_speed_index);
        controller
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
        debug!(playing = self.playing, "playback toggled");
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn speed_index(&self) -> usize {
        self.speed_index
    }

    /// Select a speed level, clamped into the table
    pub fn set_speed(&mut self, index: usize) {
        self.speed_index = index.min(self.speed_levels.len() - 1);
        debug!(index = self.speed_index, multiplier = self.multiplier(), "speed set");
    }

    pub fn speed_up(&mut self) {
        self.set_speed(self.speed_index.saturating_add(1));
    }

    pub fn speed_down(&mut self) {
        self.set_speed(self.speed_index.saturating_sub(1));
    }

    pub fn multiplier(&self) -> f32 {
        self.speed_levels[self.speed_index]
    }

    /// Multiplier formatted for display, e.g. "0.25x" or "10x"
    pub fn speed_label(&self) -> String {
        format!("{}x", self.multiplier())
    }

    /// Position of the current level in the table, 0.0 (slowest) to 1.0 (fastest)
    pub fn speed_fraction(&self) -> f32 {
        match self.speed_levels.len() {
            1 => 1.0,
            n => self.speed_index as f32 / (n - 1) as f32,
        }
    }

    pub fn base_interval(&self) -> f32 {
        self.base_interval
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Feed `real_dt` seconds of wall time. Steps the grid at most once and
    /// reports whether it did. The leftover carries over, capped at one
    /// interval so a fast run cannot bank steps for a later, slower one.
    pub fn advance(&mut self, real_dt: f32, grid: &mut CellGrid) -> bool {
        if !self.playing {
            return false;
        }

        self.accumulator += real_dt.max(0.0) * self.multiplier();
        if self.accumulator < self.base_interval {
            return false;
        }

        self.accumulator = (self.accumulator - self.base_interval).min(self.base_interval);
        *grid = self.engine.step(grid);
        true
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(&PlaybackConfig::default())
    }
}
