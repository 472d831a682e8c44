//! Projectile ball lifecycle
//!
//! One click places a pinned ball, the next launches it slingshot-style
//! (away from the pointer), the third removes it.

use glam::Vec2;
use rapier2d::prelude::RigidBodyHandle;

use super::world::{BodyKind, PhysicsWorld, ShapeColor, ShapeDesc, ShapeMaterial};
use crate::consts::*;
use crate::{angle, distance};

pub const PROJECTILE_COLOR: ShapeColor = ShapeColor::rgba(180, 239, 242, 95);

/// Aim indicator from the placement point to the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimLine {
    pub start: Vec2,
    pub end: Vec2,
}

/// Where the projectile is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Projectile {
    /// No projectile in the world
    #[default]
    Absent,
    /// Held static at `anchor`, waiting for the launch click
    Placed { body: RigidBodyHandle, anchor: Vec2 },
    /// Flying (dynamic); the next click deletes it
    Launched { body: RigidBodyHandle },
}

/// What a primary press did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressOutcome {
    Placed { at: Vec2 },
    Launched { impulse: Vec2 },
    Removed,
}

impl Projectile {
    pub fn body(&self) -> Option<RigidBodyHandle> {
        match *self {
            Projectile::Absent => None,
            Projectile::Placed { body, .. } | Projectile::Launched { body } => Some(body),
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, Projectile::Placed { .. })
    }

    /// Aim line for the current pointer, present only while placed
    pub fn aim_line(&self, pointer: Vec2) -> Option<AimLine> {
        match *self {
            Projectile::Placed { anchor, .. } => Some(AimLine {
                start: anchor,
                end: pointer,
            }),
            _ => None,
        }
    }

    /// Advance the lifecycle for a primary-button press at `pointer`
    pub fn press(&mut self, world: &mut PhysicsWorld, pointer: Vec2, impulse_scale: f32) -> PressOutcome {
        match *self {
            Projectile::Absent => {
                let body = spawn_ball(world, pointer);
                *self = Projectile::Placed {
                    body,
                    anchor: pointer,
                };
                log::debug!("Projectile placed at ({:.0}, {:.0})", pointer.x, pointer.y);
                PressOutcome::Placed { at: pointer }
            }
            Projectile::Placed { body, anchor } => {
                let impulse = launch_impulse(anchor, pointer, impulse_scale);
                world.set_body_kind(body, BodyKind::Dynamic);
                world.apply_impulse_at_local_point(body, impulse, Vec2::ZERO);
                *self = Projectile::Launched { body };
                log::debug!("Projectile launched with impulse ({:.1}, {:.1})", impulse.x, impulse.y);
                PressOutcome::Launched { impulse }
            }
            Projectile::Launched { body } => {
                world.remove_body(body);
                *self = Projectile::Absent;
                log::debug!("Projectile removed");
                PressOutcome::Removed
            }
        }
    }
}

/// Impulse for a drag from `anchor` to `pointer`: proportional to the drag
/// length, pointing the opposite way (pull back to shoot forward).
pub fn launch_impulse(anchor: Vec2, pointer: Vec2, scale: f32) -> Vec2 {
    let theta = angle(anchor, pointer);
    let force = distance(anchor, pointer) * scale;
    let fx = theta.cos() * force;
    let fy = theta.sin() * force;
    Vec2::new(-fx, -fy)
}

/// Static projectile ball at `pos`; gravity and contacts leave it alone until launch
pub fn spawn_ball(world: &mut PhysicsWorld, pos: Vec2) -> RigidBodyHandle {
    let body = world.add_body(BodyKind::Static, pos);
    world.add_shape(
        body,
        &ShapeDesc::Circle {
            radius: PROJECTILE_RADIUS,
            offset: Vec2::ZERO,
        },
        &ShapeMaterial {
            mass: Some(PROJECTILE_MASS),
            elasticity: PROJECTILE_ELASTICITY,
            friction: PROJECTILE_FRICTION,
            color: Some(PROJECTILE_COLOR),
        },
    );
    body
}
