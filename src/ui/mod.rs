mod button;
mod catalog;

pub use button::Button;
pub use catalog::{CatalogList, CatalogRow};

use macroquad::prelude::{screen_height, screen_width};

use crate::config::ViewConfig;

pub const BUTTON_HEIGHT: f32 = 32.0;

/// Vertical position where the scrollable catalog begins
pub const CATALOG_TOP: f32 = 300.0;

/// Responsive layout: play area on the left, sidebar on the right
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub sidebar_width: f32,
}

impl Layout {
    pub fn new(view: &ViewConfig) -> Self {
        Self { sidebar_width: view.sidebar_width }
    }

    /// X position where the sidebar starts
    pub fn panel_x(&self) -> f32 {
        (screen_width() - self.sidebar_width).max(0.0)
    }

    /// Width of the play area
    pub fn grid_area_width(&self) -> f32 {
        self.panel_x()
    }

    /// Height of the play area
    pub fn grid_area_height(&self) -> f32 {
        screen_height()
    }

    pub fn in_grid_area(&self, pos: (f32, f32)) -> bool {
        pos.0 < self.grid_area_width()
    }

    /// Transport buttons, in the order `input::process_button_clicks` expects
    pub fn buttons(&self) -> Vec<Button> {
        let px = self.panel_x() + 10.0;
        let w = (self.sidebar_width - 30.0) / 3.0;
        vec![
            Button::new(px, 250.0, w, BUTTON_HEIGHT, "Play"),
            Button::new(px + w + 5.0, 250.0, w, BUTTON_HEIGHT, "Reset"),
            Button::new(px + 2.0 * (w + 5.0), 250.0, w, BUTTON_HEIGHT, "Soup"),
        ]
    }
}
