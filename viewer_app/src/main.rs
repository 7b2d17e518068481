//! Viewer demo application
//!
//! Opens the viewer window and runs the present/input loop until the user
//! closes it. Drive the camera with W/S/A/D/Q/E, the arrow keys, and R to
//! reset the viewpoint.

use viewer_engine::foundation::logging;
use viewer_engine::prelude::*;

const CONFIG_PATH: &str = "viewer.toml";

fn load_config() -> ViewerConfig {
    match ViewerConfig::load_from_file(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Could not read {CONFIG_PATH} ({e}), using defaults");
            ViewerConfig::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = load_config();
    let mut window = Window::new(config)?;
    window.open_default("Viewer")?;

    log::info!(
        "Window open at {}x{}",
        window.get_width(),
        window.get_height()
    );

    while window.is_open() {
        // Draw calls for a loaded scene would go here, between clearing the
        // framebuffer and presenting it.
        window.update_display();
    }

    let camera = window.camera();
    log::info!("Viewer exited with eye point {:?}", camera.eye_point());

    Ok(())
}
