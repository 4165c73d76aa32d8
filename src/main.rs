use std::path::PathBuf;
use std::sync::OnceLock;

use macroquad::prelude::*;
use stamp_life::{
    Camera, Session, SimConfig,
    ui::{CATALOG_TOP, CatalogList, Layout},
    rendering, input,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable naming a TOML config file
const CONFIG_ENV: &str = "STAMP_LIFE_CONFIG";

/// Configuration is loaded once and shared by `window_conf` and `main`
fn config() -> &'static SimConfig {
    static CONFIG: OnceLock<SimConfig> = OnceLock::new();
    CONFIG.get_or_init(load_config)
}

fn load_config() -> SimConfig {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok())
        .map(PathBuf::from);

    let Some(path) = path else {
        return SimConfig::default();
    };
    match SimConfig::from_file(&path) {
        Ok(config) => {
            info!(path = %path.display(), "loaded config");
            config
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "falling back to default config");
            SimConfig::default()
        }
    }
}

fn window_conf() -> Conf {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let view = &config().view;
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: view.window_width,
        window_height: view.window_height,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config();
    let layout = Layout::new(&config.view);
    let mut session = Session::new(config);
    let mut camera = Camera::new(config.view.cell_size);
    let mut catalog = CatalogList::new();
    let mut pan = input::PanState::default();

    info!(
        base_tick_rate = config.playback.base_tick_rate,
        speed_levels = config.playback.speed_levels.len(),
        "session started"
    );

    loop {
        let mouse_pos = mouse_position();

        // Responsive layout
        let px = layout.panel_x();
        catalog.set_viewport(px, CATALOG_TOP, layout.sidebar_width, screen_height() - CATALOG_TOP);
        session.set_soup_center(camera.center_cell(layout.grid_area_width(), layout.grid_area_height()));
        let buttons = layout.buttons();

        // Input
        input::process_button_clicks(&mut session, &buttons, mouse_pos);
        input::handle_wheel(&mut camera, &mut catalog, &layout, mouse_pos);
        input::handle_pan(&mut pan, &mut camera, mouse_pos);
        input::handle_mouse(&mut session, &camera, &catalog, &layout, mouse_pos);
        input::process_keyboard_input(&mut session, &mut camera);

        // Simulation runs on its own cadence, independent of frame rate
        session.tick(get_frame_time());

        // Render
        clear_background(BLACK);
        rendering::draw_grid(session.grid(), &camera, &layout);
        if let Some(stamp) = session.stamp().active() {
            rendering::draw_stamp_preview(stamp, &camera, &layout, mouse_pos);
        }
        rendering::draw_sidebar(&session, &camera, &layout, &buttons, &catalog, mouse_pos);

        next_frame().await;
    }
}
