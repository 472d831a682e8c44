//! Scene fixtures
//!
//! Each builder is called once at startup. Positions are screen pixels with
//! the origin in the top-left corner.

use glam::Vec2;
use rapier2d::prelude::{ColliderHandle, ImpulseJointHandle, RigidBodyHandle};

use super::world::{BodyKind, PhysicsWorld, ShapeColor, ShapeDesc, ShapeMaterial};
use crate::consts::BOUNDARY_THICKNESS;

pub const BOUNDARY_COLOR: ShapeColor = ShapeColor::rgba(97, 62, 115, 255);
pub const STRUCTURE_COLOR: ShapeColor = ShapeColor::rgba(11, 154, 157, 62);
pub const PENDULUM_COLOR: ShapeColor = ShapeColor::rgba(229, 242, 184, 95);
pub const DECORATIVE_BALL_COLOR: ShapeColor = ShapeColor::rgba(157, 130, 111, 62);

/// Fixed pivot of the pendulum
pub const PENDULUM_ANCHOR: Vec2 = Vec2::new(1000.0, 200.0);
/// Initial origin of the swinging arm body
pub const PENDULUM_BODY_START: Vec2 = Vec2::new(1000.0, 300.0);
/// Arm length along the body's local x axis; the bob sits at its end
pub const PENDULUM_ARM_LENGTH: f32 = 255.0;
pub const PENDULUM_BOB_RADIUS: f32 = 40.0;

pub const DECORATIVE_BALL_POS: Vec2 = Vec2::new(300.0, 300.0);
pub const DECORATIVE_BALL_RADIUS: f32 = 50.0;

/// Handles to the pendulum assembly
#[derive(Debug, Clone, Copy)]
pub struct Pendulum {
    pub anchor: RigidBodyHandle,
    pub body: RigidBodyHandle,
    pub arm: ColliderHandle,
    pub bob: ColliderHandle,
    pub joint: Option<ImpulseJointHandle>,
}

/// Everything placed at startup
#[derive(Debug, Clone)]
pub struct Scene {
    pub boundaries: Vec<RigidBodyHandle>,
    pub structure: Vec<RigidBodyHandle>,
    pub pendulum: Pendulum,
    pub decorative_ball: RigidBodyHandle,
}

/// Build every fixture for a screen of the given size
pub fn build_scene(world: &mut PhysicsWorld, width: f32, height: f32) -> Scene {
    let scene = Scene {
        boundaries: build_boundaries(world, width, height),
        structure: build_structure(world, width, height),
        pendulum: build_pendulum(world),
        decorative_ball: build_static_decorative_ball(world),
    };
    log::info!(
        "Scene built for {}x{}: {} bodies, {} shapes, {} joints",
        width,
        height,
        world.body_count(),
        world.shape_count(),
        world.joint_count()
    );
    scene
}

/// Four static walls centered on the screen edges
pub fn build_boundaries(world: &mut PhysicsWorld, width: f32, height: f32) -> Vec<RigidBodyHandle> {
    let walls = [
        (Vec2::new(width / 2.0, height), Vec2::new(width, BOUNDARY_THICKNESS)),
        (Vec2::new(width / 2.0, 0.0), Vec2::new(width, BOUNDARY_THICKNESS)),
        (Vec2::new(0.0, height / 2.0), Vec2::new(BOUNDARY_THICKNESS, height)),
        (Vec2::new(width, height / 2.0), Vec2::new(BOUNDARY_THICKNESS, height)),
    ];

    let material = ShapeMaterial {
        mass: None,
        elasticity: 0.4,
        friction: 0.5,
        color: Some(BOUNDARY_COLOR),
    };

    walls
        .iter()
        .map(|&(pos, size)| {
            let body = world.add_body(BodyKind::Static, pos);
            world.add_shape(
                body,
                &ShapeDesc::Box {
                    width: size.x,
                    height: size.y,
                },
                &material,
            );
            body
        })
        .collect()
}

/// Two legs and a beam forming a table near the bottom of the screen
pub fn build_structure(world: &mut PhysicsWorld, _width: f32, height: f32) -> Vec<RigidBodyHandle> {
    // (center, size, mass)
    let parts = [
        (Vec2::new(600.0, height - 120.0), Vec2::new(40.0, 200.0), 100.0),
        (Vec2::new(900.0, height - 120.0), Vec2::new(40.0, 200.0), 100.0),
        (Vec2::new(750.0, height - 240.0), Vec2::new(340.0, 40.0), 150.0),
    ];

    parts
        .iter()
        .map(|&(pos, size, mass)| {
            let body = world.add_body(BodyKind::Dynamic, pos);
            world.add_shape(
                body,
                &ShapeDesc::Box {
                    width: size.x,
                    height: size.y,
                },
                &ShapeMaterial {
                    mass: Some(mass),
                    elasticity: 0.4,
                    friction: 0.4,
                    color: Some(STRUCTURE_COLOR),
                },
            );
            body
        })
        .collect()
}

/// Arm + bob body pinned to a fixed pivot above it
pub fn build_pendulum(world: &mut PhysicsWorld) -> Pendulum {
    let anchor = world.add_body(BodyKind::Static, PENDULUM_ANCHOR);
    let body = world.add_body(BodyKind::Dynamic, PENDULUM_BODY_START);

    let tip = Vec2::new(PENDULUM_ARM_LENGTH, 0.0);
    let arm = world.add_shape(
        body,
        &ShapeDesc::Segment {
            a: Vec2::ZERO,
            b: tip,
            radius: 5.0,
        },
        &ShapeMaterial {
            mass: Some(8.0),
            elasticity: 0.0,
            friction: 1.0,
            color: Some(PENDULUM_COLOR),
        },
    );
    let bob = world.add_shape(
        body,
        &ShapeDesc::Circle {
            radius: PENDULUM_BOB_RADIUS,
            offset: tip,
        },
        &ShapeMaterial {
            mass: Some(30.0),
            elasticity: 0.95,
            friction: 1.0,
            color: Some(PENDULUM_COLOR),
        },
    );

    let joint = world.add_pin_joint(body, anchor, Vec2::ZERO, Vec2::ZERO);

    Pendulum {
        anchor,
        body,
        arm,
        bob,
        joint,
    }
}

/// A fixed ball that other bodies bounce off
pub fn build_static_decorative_ball(world: &mut PhysicsWorld) -> RigidBodyHandle {
    let body = world.add_body(BodyKind::Static, DECORATIVE_BALL_POS);
    world.add_shape(
        body,
        &ShapeDesc::Circle {
            radius: DECORATIVE_BALL_RADIUS,
            offset: Vec2::ZERO,
        },
        &ShapeMaterial {
            mass: Some(1.0),
            elasticity: 0.2,
            friction: 2.0,
            color: Some(DECORATIVE_BALL_COLOR),
        },
    );
    body
}
