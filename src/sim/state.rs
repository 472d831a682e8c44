//! Sandbox state
//!
//! Everything the main loop mutates between frames lives here.

use glam::Vec2;

use super::projectile::{AimLine, Projectile};
use super::scene::{Scene, build_scene};
use super::world::PhysicsWorld;
use crate::settings::Settings;

/// Whether physics time advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimPhase {
    /// One step per frame
    #[default]
    Running,
    /// World frozen; input and rendering continue
    Paused,
}

impl SimPhase {
    pub fn toggled(self) -> Self {
        match self {
            SimPhase::Running => SimPhase::Paused,
            SimPhase::Paused => SimPhase::Running,
        }
    }
}

/// Complete sandbox state
pub struct SandboxState {
    /// Physics world (scene fixtures + projectile)
    pub world: PhysicsWorld,
    /// Handles to the startup fixtures
    pub scene: Scene,
    /// Projectile lifecycle
    pub projectile: Projectile,
    /// Running / paused
    pub phase: SimPhase,
    /// Cleared when a close or quit request arrives
    pub running: bool,
    /// Physics steps taken so far
    pub steps: u64,
    /// Launch impulse per pixel of drag
    pub impulse_scale: f32,
}

impl SandboxState {
    /// Build the world and every fixture for a screen of `width` x `height`
    pub fn new(settings: &Settings, width: f32, height: f32) -> Self {
        let mut world = PhysicsWorld::new(settings.gravity, settings.timestep());
        let scene = build_scene(&mut world, width, height);

        Self {
            world,
            scene,
            projectile: Projectile::Absent,
            phase: SimPhase::Running,
            running: true,
            steps: 0,
            impulse_scale: settings.impulse_scale,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.phase == SimPhase::Paused
    }

    pub fn toggle_pause(&mut self) {
        self.phase = self.phase.toggled();
        log::debug!("Simulation {:?}", self.phase);
    }

    /// Stop the main loop at the next iteration
    pub fn request_quit(&mut self) {
        self.running = false;
    }

    /// Simulated seconds elapsed
    pub fn elapsed(&self) -> f64 {
        self.steps as f64 * self.world.dt() as f64
    }

    /// Aim line to draw this frame, if the projectile is being aimed
    pub fn aim_line(&self, pointer: Vec2) -> Option<AimLine> {
        self.projectile.aim_line(pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_running() {
        let state = SandboxState::new(&Settings::default(), 1920.0, 1080.0);
        assert_eq!(state.phase, SimPhase::Running);
        assert!(state.running);
        assert_eq!(state.steps, 0);
        assert_eq!(state.projectile, Projectile::Absent);
        assert_eq!(state.elapsed(), 0.0);
    }

    #[test]
    fn test_toggle_pause() {
        let mut state = SandboxState::new(&Settings::default(), 1920.0, 1080.0);
        state.toggle_pause();
        assert!(state.is_paused());
        state.toggle_pause();
        assert!(!state.is_paused());
    }

    #[test]
    fn test_settings_flow_into_world() {
        let settings = Settings {
            target_fps: 120,
            impulse_scale: 10.0,
            ..Default::default()
        };
        let state = SandboxState::new(&settings, 1280.0, 720.0);
        assert!((state.world.dt() - 1.0 / 120.0).abs() < 1e-9);
        assert_eq!(state.impulse_scale, 10.0);
        assert_eq!(state.world.gravity(), settings.gravity);
    }
}
