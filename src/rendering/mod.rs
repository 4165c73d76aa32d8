use macroquad::prelude::*;

use crate::application::{ActiveStamp, Camera, Session};
use crate::domain::{Cell, CellGrid, Rule};
use crate::ui::{Button, CatalogList, Layout};

const GRID_BG: Color = Color::new(0.96, 0.96, 0.96, 1.0);
const GRID_LINE: Color = Color::new(0.82, 0.82, 0.82, 1.0);
const CELL_COLOR: Color = Color::new(0.08, 0.08, 0.08, 1.0);
const SIDEBAR_BG: Color = Color::new(0.15, 0.15, 0.15, 1.0);
const SIDEBAR_TEXT: Color = Color::new(0.86, 0.86, 0.86, 1.0);

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw the play area: background, grid lines when zoomed in, live cells
pub fn draw_grid(grid: &CellGrid, camera: &Camera, layout: &Layout) {
    let area_width = layout.grid_area_width();
    let area_height = layout.grid_area_height();
    let cell_size = camera.scaled_cell_size();

    draw_rectangle(0.0, 0.0, area_width, area_height, GRID_BG);

    let (min, max) = camera.visible_cells(area_width, area_height);

    if cell_size >= 4.0 {
        for col in min.col..=max.col + 1 {
            let (x, _) = camera.cell_to_screen(Cell::new(0, col));
            if x <= area_width {
                draw_line(x, 0.0, x, area_height, 1.0, GRID_LINE);
            }
        }
        for row in min.row..=max.row + 1 {
            let (_, y) = camera.cell_to_screen(Cell::new(row, 0));
            draw_line(0.0, y, area_width, y, 1.0, GRID_LINE);
        }
    }

    // Sparse grid: walk live cells and cull, instead of scanning the viewport
    let inset = if cell_size >= 4.0 { 1.0 } else { 0.0 };
    grid.iter()
        .filter(|c| c.row >= min.row && c.row <= max.row && c.col >= min.col && c.col <= max.col)
        .for_each(|c| {
            let (x, y) = camera.cell_to_screen(c);
            let w = cell_size.min(area_width - x);
            if w > 0.0 {
                draw_rectangle(x + inset, y + inset, w - inset, cell_size - inset, CELL_COLOR);
            }
        });
}

/// Draw a semi-transparent preview of the armed stamp at the cursor
pub fn draw_stamp_preview(stamp: &ActiveStamp, camera: &Camera, layout: &Layout, mouse_pos: (f32, f32)) {
    if !layout.in_grid_area(mouse_pos) {
        return;
    }
    let cell_size = camera.scaled_cell_size();
    let anchor = camera.screen_to_cell(mouse_pos.0, mouse_pos.1);

    for cell in stamp.footprint(anchor) {
        let (x, y) = camera.cell_to_screen(cell);
        if x < layout.grid_area_width() {
            draw_rectangle(x, y, cell_size, cell_size, Color::from_rgba(100, 160, 255, 120));
        }
    }

    // Bounding box around the whole footprint
    let (rows, cols) = stamp.bounds();
    let (box_x, box_y) = camera.cell_to_screen(anchor);
    draw_rectangle_lines(
        box_x,
        box_y,
        cols as f32 * cell_size,
        rows as f32 * cell_size,
        2.0,
        Color::from_rgba(100, 160, 255, 200),
    );
}

/// Speed meter: filled bar whose color shifts from green to red
fn draw_speed_meter(session: &Session, x: f32, y: f32, width: f32) {
    let playback = session.playback();
    let height = 14.0;
    draw_rectangle(x, y, width, height, Color::from_rgba(25, 25, 25, 255));

    let ratio = playback.speed_fraction();
    let fill = width * ratio;
    if fill > 0.0 {
        let (r, g) = if ratio < 0.5 {
            (50.0 + ratio * 2.0 * 200.0, 205.0)
        } else {
            (255.0, 205.0 - (ratio - 0.5) * 2.0 * 180.0)
        };
        draw_rectangle(x, y, fill, height, Color::from_rgba(r as u8, g as u8, 50, 255));
    }
    draw_rectangle_lines(x, y, width, height, 1.0, Color::from_rgba(80, 80, 80, 255));

    let label = playback.speed_label();
    let size = measure_text(&label, None, 13, 1.0);
    draw_text(&label, x + (width - size.width) / 2.0, y + 11.0, 13.0, WHITE);
}

/// Draw the sidebar: stats, transport state, tool mode, buttons and catalog
pub fn draw_sidebar(
    session: &Session,
    camera: &Camera,
    layout: &Layout,
    buttons: &[Button],
    catalog: &CatalogList,
    mouse_pos: (f32, f32),
) {
    let px = layout.panel_x();
    let tx = px + 15.0;
    draw_rectangle(px, 0.0, layout.sidebar_width, screen_height(), SIDEBAR_BG);

    draw_text("Game of Life", tx, 30.0, 24.0, WHITE);
    draw_text(
        &format!(
            "Gen: {}   Pop: {}",
            session.generation(),
            format_number(session.population())
        ),
        tx,
        52.0,
        15.0,
        SIDEBAR_TEXT,
    );

    let rule = session.playback().engine().rule();
    let (status, color) = if session.playback().is_playing() {
        ("RUNNING", Color::from_rgba(50, 205, 50, 255))
    } else {
        ("PAUSED", Color::from_rgba(220, 50, 50, 255))
    };
    draw_text(status, tx, 74.0, 18.0, color);
    draw_text(&format!("{} {}", rule.name(), rule.description()), tx + 90.0, 74.0, 13.0, GRAY);

    draw_text("Speed:", tx, 98.0, 14.0, SIDEBAR_TEXT);
    draw_speed_meter(session, px + 70.0, 87.0, layout.sidebar_width - 85.0);

    let (mode, hint, mode_color) = match session.stamp().active() {
        Some(active) => (
            format!("Placing: {}", active.pattern.name),
            "Click grid to place - Esc/Right-click cancel",
            Color::from_rgba(100, 180, 255, 255),
        ),
        None => (
            "Draw Mode".to_owned(),
            "Click a preset to stamp it",
            Color::from_rgba(180, 180, 180, 255),
        ),
    };
    draw_text(&mode, tx, 122.0, 15.0, mode_color);
    draw_text(hint, tx, 138.0, 12.0, Color::from_rgba(120, 120, 120, 255));

    let controls = [
        "Space: Play / Pause",
        "C: Reset    R: Random soup",
        "+/-: Speed    Click: Draw",
        "Wheel: Zoom    Mid-drag: Pan    H: Home",
    ];
    controls.iter().enumerate().for_each(|(i, line)| {
        draw_text(line, tx, 160.0 + i as f32 * 17.0, 13.0, Color::from_rgba(150, 150, 150, 255));
    });
    draw_text(&format!("Zoom: {:.1}x", camera.zoom), tx, 238.0, 12.0, GRAY);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    catalog.draw(mouse_pos, session.stamp().active().map(|a| a.id));
}
