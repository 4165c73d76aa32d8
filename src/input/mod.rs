use macroquad::prelude::*;

use crate::application::{Camera, Session};
use crate::domain::Action;
use crate::ui::{Button, CatalogList, Layout};

/// Tracks middle-button drag between frames
#[derive(Default)]
pub struct PanState {
    last_pos: Option<(f32, f32)>,
}

/// Mouse wheel scrolls the catalog over the sidebar and zooms over the grid
pub fn handle_wheel(camera: &mut Camera, catalog: &mut CatalogList, layout: &Layout, mouse_pos: (f32, f32)) {
    let wheel = mouse_wheel().1;
    if wheel == 0.0 {
        return;
    }
    if layout.in_grid_area(mouse_pos) {
        if wheel > 0.0 {
            camera.zoom_in(1.1);
        } else {
            camera.zoom_out(1.1);
        }
    } else {
        catalog.scroll_by(wheel.signum());
    }
}

/// Handle pan with middle mouse button drag
pub fn handle_pan(pan: &mut PanState, camera: &mut Camera, mouse_pos: (f32, f32)) {
    if is_mouse_button_down(MouseButton::Middle) {
        if let Some(last) = pan.last_pos {
            camera.pan(mouse_pos.0 - last.0, mouse_pos.1 - last.1);
        }
        pan.last_pos = Some(mouse_pos);
    } else {
        pan.last_pos = None;
    }
}

/// Catalog clicks, stamping, freehand strokes and right-click cancel
pub fn handle_mouse(
    session: &mut Session,
    camera: &Camera,
    catalog: &CatalogList,
    layout: &Layout,
    mouse_pos: (f32, f32),
) {
    if is_mouse_button_pressed(MouseButton::Right) {
        session.cancel_stamp();
    }

    if is_mouse_button_released(MouseButton::Left) {
        session.end_stroke();
    }

    if !layout.in_grid_area(mouse_pos) {
        if is_mouse_button_pressed(MouseButton::Left) {
            if let Some(entry) = catalog.entry_at(mouse_pos) {
                session.select(entry);
            }
        }
        return;
    }

    let cell = camera.screen_to_cell(mouse_pos.0, mouse_pos.1);
    if is_mouse_button_pressed(MouseButton::Left) {
        if session.stamp().is_idle() {
            session.begin_stroke(cell);
        } else {
            session.commit(cell);
        }
    } else if is_mouse_button_down(MouseButton::Left) {
        session.extend_stroke(cell);
    }
}

/// Keyboard transport and editing shortcuts
pub fn process_keyboard_input(session: &mut Session, camera: &mut Camera) {
    if is_key_pressed(KeyCode::Space) {
        session.toggle_play();
    }
    if is_key_pressed(KeyCode::C) {
        session.reset();
    }
    if is_key_pressed(KeyCode::R) {
        session.select(Action::RandomSoup);
    }
    if is_key_pressed(KeyCode::Escape) {
        session.cancel_stamp();
    }
    if is_key_pressed(KeyCode::Equal) || is_key_pressed(KeyCode::KpAdd) {
        session.speed_up();
    }
    if is_key_pressed(KeyCode::Minus) || is_key_pressed(KeyCode::KpSubtract) {
        session.speed_down();
    }
    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }
}

/// Buttons are laid out as [Play, Reset, Soup]; see `Layout::buttons`
pub fn process_button_clicks(session: &mut Session, buttons: &[Button], mouse_pos: (f32, f32)) {
    let Some(idx) = buttons.iter().position(|btn| btn.is_clicked(mouse_pos)) else {
        return;
    };
    match idx {
        0 => session.toggle_play(),
        1 => session.reset(),
        2 => session.select(Action::RandomSoup),
        _ => {}
    }
}
