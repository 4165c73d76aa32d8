use crate::domain::Cell;

/// Camera manages viewport and zoom over the unbounded plane
#[derive(Clone, Debug)]
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32,  // 1.0 = normal, 2.0 = 2x zoomed in
    cell_size: f32,
}

impl Camera {
    pub fn new(cell_size: f32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
            cell_size,
        }
    }

    /// On-screen size of one cell at the current zoom
    pub fn scaled_cell_size(&self) -> f32 {
        self.cell_size * self.zoom
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(0.2, 10.0);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(0.2, 10.0);
    }

    /// Pan camera
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Convert screen coordinates to the cell under them.
    /// Floors so that points left of or above the origin map to negative cells.
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> Cell {
        let size = self.scaled_cell_size();
        let col = ((screen_x - self.offset_x) / size).floor() as i32;
        let row = ((screen_y - self.offset_y) / size).floor() as i32;
        Cell::new(row, col)
    }

    /// Top-left screen corner of a cell
    pub fn cell_to_screen(&self, cell: Cell) -> (f32, f32) {
        let size = self.scaled_cell_size();
        let screen_x = cell.col as f32 * size + self.offset_x;
        let screen_y = cell.row as f32 * size + self.offset_y;
        (screen_x, screen_y)
    }

    /// Inclusive cell range covered by a viewport, for culling
    pub fn visible_cells(&self, viewport_width: f32, viewport_height: f32) -> (Cell, Cell) {
        let top_left = self.screen_to_cell(0.0, 0.0);
        let bottom_right = self.screen_to_cell(viewport_width, viewport_height);
        (top_left, bottom_right)
    }

    /// Cell at the middle of a viewport
    pub fn center_cell(&self, viewport_width: f32, viewport_height: f32) -> Cell {
        self.screen_to_cell(viewport_width / 2.0, viewport_height / 2.0)
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.zoom = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_cell_at_origin() {
        let camera = Camera::new(10.0);
        assert_eq!(camera.screen_to_cell(0.0, 0.0), Cell::new(0, 0));
        assert_eq!(camera.screen_to_cell(25.0, 99.0), Cell::new(9, 2));
    }

    #[test]
    fn test_panned_camera_yields_negative_cells() {
        let mut camera = Camera::new(10.0);
        camera.pan(50.0, 50.0);
        assert_eq!(camera.screen_to_cell(45.0, 0.0), Cell::new(-5, -1));
    }

    #[test]
    fn test_round_trip_through_screen() {
        let mut camera = Camera::new(10.0);
        camera.zoom_in(2.0);
        camera.pan(-13.0, 7.0);
        let cell = Cell::new(-4, 11);
        let (x, y) = camera.cell_to_screen(cell);
        // Sample the cell's interior to stay clear of edges
        assert_eq!(camera.screen_to_cell(x + 1.0, y + 1.0), cell);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera::new(10.0);
        (0..100).for_each(|_| camera.zoom_in(1.5));
        assert_eq!(camera.zoom, 10.0);
        camera.reset();
        (0..100).for_each(|_| camera.zoom_out(1.5));
        assert_eq!(camera.zoom, 0.2);
    }

    #[test]
    fn test_center_cell() {
        let camera = Camera::new(10.0);
        assert_eq!(camera.center_cell(800.0, 900.0), Cell::new(45, 40));
    }
}
