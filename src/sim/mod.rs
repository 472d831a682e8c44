//! Simulation module
//!
//! Physics world, scene fixtures and the interaction protocol:
//! - Fixed timestep only, one step per frame
//! - No rendering or platform dependencies

pub mod projectile;
pub mod scene;
pub mod state;
pub mod tick;
pub mod world;

pub use projectile::{AimLine, PressOutcome, Projectile, launch_impulse, spawn_ball};
pub use scene::{
    Pendulum, Scene, build_boundaries, build_pendulum, build_scene, build_static_decorative_ball,
    build_structure,
};
pub use state::{SandboxState, SimPhase};
pub use tick::{InputEvent, PointerButton, dispatch, tick};
pub use world::{BodyKind, PhysicsWorld, ShapeColor, ShapeDesc, ShapeFill, ShapeMaterial};
