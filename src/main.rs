use std::{thread, time::Duration};

use eyre::Result;
use glam::Vec2;
use renderer::Renderer;
use settings::Settings;
use window::MyWindow;

mod ogl;
mod renderer;
mod settings;
mod shaders;
mod window;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env()?;
    let mut window = MyWindow::new(&settings)?;

    ogl::init_debug();

    let mut renderer = Renderer::new(&settings)?;
    // The projection uses the drawable size, which differs from the
    // requested size on HiDPI displays
    for polygon in scene_polygons(window.width, window.height) {
        renderer.add_polygon(&polygon)?;
    }
    log::info!("Scene built for a {}x{} drawable", window.width, window.height);

    'render_loop: loop {
        renderer.render(window.width, window.height);

        let should_quit = window.end_frame();
        if should_quit {
            break 'render_loop;
        }

        thread::sleep(Duration::from_millis(10));
    }

    renderer.delete();
    Ok(())
}

/// A quad and a hexagon, in drawable pixels
fn scene_polygons(width: u32, height: u32) -> Vec<Vec<Vec2>> {
    let w = width as f32;
    let h = height as f32;

    let quad = vec![
        Vec2::new(0.1 * w, 0.2 * h),
        Vec2::new(0.4 * w, 0.2 * h),
        Vec2::new(0.4 * w, 0.8 * h),
        Vec2::new(0.1 * w, 0.8 * h),
    ];

    let center = Vec2::new(0.7 * w, 0.5 * h);
    let radius = 0.2 * h.min(w);
    let hexagon = (0..6)
        .map(|i| {
            let a = (i as f32 * 60.).to_radians();
            center + radius * Vec2::new(a.cos(), a.sin())
        })
        .collect();

    vec![quad, hexagon]
}
