//! Slingshot Sandbox entry point
//!
//! Opens the window, builds the scene and runs the frame loop:
//! drain input → draw → step physics → wait for the frame budget.

use macroquad::miniquad::conf::Platform;
use macroquad::window::{Conf, next_frame, screen_height, screen_width};

use slingshot_sandbox::Settings;
use slingshot_sandbox::platform::{FrameLimiter, InputCollector};
use slingshot_sandbox::renderer::Renderer;
use slingshot_sandbox::sim::{SandboxState, dispatch, tick};

fn window_conf() -> Conf {
    // Runs before main; start logging here so the settings load is reported
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let settings = Settings::shared();
    let (width, height) = settings.window_size;
    Conf {
        window_title: "Slingshot Sandbox".to_string(),
        window_width: width as i32,
        window_height: height as i32,
        fullscreen: settings.fullscreen,
        platform: Platform {
            // Frame pacing is done by FrameLimiter
            swap_interval: Some(0),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let settings = Settings::shared();
    log::info!("Slingshot Sandbox starting at {} fps", settings.target_fps);

    // Fullscreen dimensions are only known once the first frame is up
    next_frame().await;
    let (width, height) = (screen_width(), screen_height());
    log::info!("Display {}x{}", width, height);

    let mut state = SandboxState::new(settings, width, height);
    let mut input = InputCollector::new();
    let mut renderer = Renderer::new(settings);
    let mut limiter = FrameLimiter::new(settings.target_fps);

    while state.running {
        dispatch(&mut state, settings, input.drain());
        if !state.running {
            break;
        }

        renderer.draw(&state, InputCollector::pointer());
        tick(&mut state);

        next_frame().await;
        limiter.wait();
    }

    log::info!(
        "Shutting down after {} steps ({:.1}s simulated)",
        state.steps,
        state.elapsed()
    );
}
