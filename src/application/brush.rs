use crate::domain::{Cell, CellGrid};

/// What a drag stroke does to the cells it passes over
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StrokeMode {
    Draw,
    Erase,
}

/// Freehand single-cell editing.
/// The first cell of a stroke is toggled, and its new state decides
/// whether the rest of the drag draws or erases.
#[derive(Clone, Copy, Debug, Default)]
pub struct Brush {
    stroke: Option<StrokeMode>,
}

impl Brush {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stroke(&self) -> Option<StrokeMode> {
        self.stroke
    }

    pub fn begin(&mut self, cell: Cell, grid: &mut CellGrid) {
        self.stroke = Some(if grid.toggle(cell) {
            StrokeMode::Draw
        } else {
            StrokeMode::Erase
        });
    }

    pub fn extend(&self, cell: Cell, grid: &mut CellGrid) {
        match self.stroke {
            Some(StrokeMode::Draw) => grid.set_alive(cell),
            Some(StrokeMode::Erase) => grid.set_dead(cell),
            None => {}
        }
    }

    pub fn end(&mut self) {
        self.stroke = None;
    }
}
