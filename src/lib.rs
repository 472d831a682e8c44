//! Slingshot Sandbox - an interactive 2D rigid-body playground
//!
//! Core modules:
//! - `sim`: Physics world, scene fixtures, projectile lifecycle, input dispatch
//! - `renderer`: Frame drawing and physics debug-draw backend
//! - `platform`: Window input translation and frame pacing
//! - `settings`: Runtime configuration (stock defaults; a JSON override file is
//!   read only when `SLINGSHOT_SETTINGS` is set, for development)

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Key, Settings};

use glam::Vec2;

/// Sandbox configuration constants
pub mod consts {
    /// Target frame rate; one physics step is taken per frame
    pub const TARGET_FPS: u32 = 240;
    /// Fixed simulation timestep (matched to the frame rate)
    pub const SIM_DT: f32 = 1.0 / TARGET_FPS as f32;

    /// Gravity in screen pixels/s² (y points down)
    pub const GRAVITY_Y: f32 = 981.0;

    /// Launch impulse per pixel of drag distance
    pub const LAUNCH_IMPULSE_SCALE: f32 = 50.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 30.0;
    pub const PROJECTILE_MASS: f32 = 10.0;
    pub const PROJECTILE_ELASTICITY: f32 = 0.9;
    pub const PROJECTILE_FRICTION: f32 = 0.4;

    /// Thickness of the screen-edge walls (half of it lies off-screen)
    pub const BOUNDARY_THICKNESS: f32 = 20.0;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(p1: Vec2, p2: Vec2) -> f32 {
    ((p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)).sqrt()
}

/// Angle of the vector from `p1` to `p2`, in [-π, π]
#[inline]
pub fn angle(p1: Vec2, p2: Vec2) -> f32 {
    (p2.y - p1.y).atan2(p2.x - p1.x)
}
