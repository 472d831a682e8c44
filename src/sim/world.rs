//! Physics world
//!
//! Thin owner of the rapier2d sets and pipeline. Bodies, shapes and joints are
//! described with sandbox types so nothing outside this file builds rapier
//! objects directly.

use glam::Vec2;
use rapier2d::prelude::*;

fn to_vector(v: Vec2) -> Vector<Real> {
    vector![v.x, v.y]
}

fn to_point(v: Vec2) -> Point<Real> {
    point![v.x, v.y]
}

fn from_vector(v: &Vector<Real>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

fn from_point(p: &Point<Real>) -> Vec2 {
    Vec2::new(p.x, p.y)
}

/// Display color attached to a shape, stored in the collider's `user_data`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ShapeColor {
    /// Marks `user_data` as carrying a color (so black/transparent is representable)
    const TAG: u128 = 1 << 32;

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_user_data(self) -> u128 {
        let packed = u32::from_be_bytes([self.r, self.g, self.b, self.a]);
        Self::TAG | packed as u128
    }

    pub fn from_user_data(data: u128) -> Option<Self> {
        if data & Self::TAG == 0 {
            return None;
        }
        let [r, g, b, a] = (data as u32).to_be_bytes();
        Some(Self { r, g, b, a })
    }
}

/// Kinematic classification of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Infinite mass, never moves
    Static,
    /// Moved by gravity, contacts and impulses
    Dynamic,
}

impl BodyKind {
    fn to_rapier(self) -> RigidBodyType {
        match self {
            BodyKind::Static => RigidBodyType::Fixed,
            BodyKind::Dynamic => RigidBodyType::Dynamic,
        }
    }
}

/// Geometry of a shape, in the owning body's local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeDesc {
    /// Axis-aligned box centered on the body origin
    Box { width: f32, height: f32 },
    /// Circle whose center is offset from the body origin
    Circle { radius: f32, offset: Vec2 },
    /// Thick line segment between two local points
    Segment { a: Vec2, b: Vec2, radius: f32 },
}

impl ShapeDesc {
    fn collider_builder(&self) -> ColliderBuilder {
        match *self {
            ShapeDesc::Box { width, height } => ColliderBuilder::cuboid(width / 2.0, height / 2.0),
            ShapeDesc::Circle { radius, offset } => {
                ColliderBuilder::ball(radius).translation(to_vector(offset))
            }
            ShapeDesc::Segment { a, b, radius } => {
                ColliderBuilder::capsule_from_endpoints(to_point(a), to_point(b), radius)
            }
        }
    }
}

/// Physical and display properties of a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeMaterial {
    /// Explicit mass; `None` leaves the engine's unit density
    pub mass: Option<f32>,
    pub elasticity: f32,
    pub friction: f32,
    pub color: Option<ShapeColor>,
}

impl Default for ShapeMaterial {
    fn default() -> Self {
        Self {
            mass: None,
            elasticity: 0.0,
            friction: 0.7,
            color: None,
        }
    }
}

/// World-space geometry of a shape, for filled drawing
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeFill {
    Circle { center: Vec2, radius: f32 },
    /// Convex polygon, vertices in winding order
    Polygon(Vec<Vec2>),
    Capsule { a: Vec2, b: Vec2, radius: f32 },
}

/// The physics simulation container
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// Create an empty world with the given gravity and fixed timestep
    pub fn new(gravity: Vec2, dt: f32) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = dt;

        Self {
            gravity: to_vector(gravity),
            integration_parameters,
            pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    pub fn gravity(&self) -> Vec2 {
        from_vector(&self.gravity)
    }

    pub fn dt(&self) -> f32 {
        self.integration_parameters.dt
    }

    /// Add a bare body; attach shapes with [`PhysicsWorld::add_shape`]
    pub fn add_body(&mut self, kind: BodyKind, position: Vec2) -> RigidBodyHandle {
        let body = RigidBodyBuilder::new(kind.to_rapier())
            .translation(to_vector(position))
            .build();
        self.bodies.insert(body)
    }

    /// Attach a shape to an existing body
    pub fn add_shape(
        &mut self,
        body: RigidBodyHandle,
        shape: &ShapeDesc,
        material: &ShapeMaterial,
    ) -> ColliderHandle {
        let mut builder = shape
            .collider_builder()
            .restitution(material.elasticity)
            .friction(material.friction);
        if let Some(mass) = material.mass {
            builder = builder.mass(mass);
        }
        if let Some(color) = material.color {
            builder = builder.user_data(color.to_user_data());
        }

        self.colliders
            .insert_with_parent(builder.build(), body, &mut self.bodies)
    }

    /// Pin two bodies together at local anchor points.
    ///
    /// The anchor-to-anchor distance at creation time is held fixed in both
    /// directions; both bodies rotate freely about their anchors.
    pub fn add_pin_joint(
        &mut self,
        body_a: RigidBodyHandle,
        body_b: RigidBodyHandle,
        anchor_a: Vec2,
        anchor_b: Vec2,
    ) -> Option<ImpulseJointHandle> {
        let world_a = self.bodies.get(body_a)?.position() * to_point(anchor_a);
        let world_b = self.bodies.get(body_b)?.position() * to_point(anchor_b);
        let length = (world_b - world_a).norm();

        // Coupled linear axes limit the anchor distance; min == max pins it.
        let joint = GenericJointBuilder::new(JointAxesMask::empty())
            .coupled_axes(JointAxesMask::LIN_AXES)
            .limits(JointAxis::LinX, [length, length])
            .local_anchor1(to_point(anchor_a))
            .local_anchor2(to_point(anchor_b))
            .build();
        Some(self.impulse_joints.insert(body_a, body_b, joint, true))
    }

    /// Remove a body together with its shapes and joints.
    /// Returns false if the handle was already gone.
    pub fn remove_body(&mut self, body: RigidBodyHandle) -> bool {
        self.bodies
            .remove(
                body,
                &mut self.island_manager,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    /// Reclassify a body (e.g. static → dynamic on launch)
    pub fn set_body_kind(&mut self, body: RigidBodyHandle, kind: BodyKind) {
        if let Some(rb) = self.bodies.get_mut(body) {
            rb.set_body_type(kind.to_rapier(), true);
            // Effective mass is only refreshed on step otherwise, which would
            // swallow an impulse applied in the same frame.
            rb.recompute_mass_properties_from_colliders(&self.colliders);
        }
    }

    /// Apply an instantaneous impulse at a point given in the body's local frame
    pub fn apply_impulse_at_local_point(&mut self, body: RigidBodyHandle, impulse: Vec2, point: Vec2) {
        if let Some(rb) = self.bodies.get_mut(body) {
            let world_point = rb.position() * to_point(point);
            rb.apply_impulse_at_point(to_vector(impulse), world_point, true);
        }
    }

    /// Advance the simulation by one fixed timestep
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn shape_count(&self) -> usize {
        self.colliders.len()
    }

    pub fn joint_count(&self) -> usize {
        self.impulse_joints.len()
    }

    pub fn contains_body(&self, body: RigidBodyHandle) -> bool {
        self.bodies.contains(body)
    }

    pub fn body_position(&self, body: RigidBodyHandle) -> Option<Vec2> {
        self.bodies.get(body).map(|rb| from_vector(rb.translation()))
    }

    pub fn body_kind(&self, body: RigidBodyHandle) -> Option<BodyKind> {
        self.bodies.get(body).map(|rb| {
            if rb.is_dynamic() {
                BodyKind::Dynamic
            } else {
                BodyKind::Static
            }
        })
    }

    pub fn body_velocity(&self, body: RigidBodyHandle) -> Option<Vec2> {
        self.bodies.get(body).map(|rb| from_vector(rb.linvel()))
    }

    /// World position of a shape's local origin
    pub fn shape_position(&self, shape: ColliderHandle) -> Option<Vec2> {
        self.colliders
            .get(shape)
            .map(|c| from_vector(&c.position().translation.vector))
    }

    pub fn shape_color(&self, shape: ColliderHandle) -> Option<ShapeColor> {
        self.colliders
            .get(shape)
            .and_then(|c| ShapeColor::from_user_data(c.user_data))
    }

    /// Current world-space geometry and color of every shape
    pub fn shape_fills(&self) -> Vec<(ShapeFill, Option<ShapeColor>)> {
        self.colliders
            .iter()
            .filter_map(|(_, collider)| {
                let pos = collider.position();
                let shape = collider.shape();
                let fill = if let Some(ball) = shape.as_ball() {
                    ShapeFill::Circle {
                        center: from_vector(&pos.translation.vector),
                        radius: ball.radius,
                    }
                } else if let Some(cuboid) = shape.as_cuboid() {
                    let h = cuboid.half_extents;
                    let corners = [(-h.x, -h.y), (h.x, -h.y), (h.x, h.y), (-h.x, h.y)];
                    ShapeFill::Polygon(
                        corners
                            .iter()
                            .map(|&(x, y)| from_point(&(pos * point![x, y])))
                            .collect(),
                    )
                } else if let Some(capsule) = shape.as_capsule() {
                    ShapeFill::Capsule {
                        a: from_point(&(pos * capsule.segment.a)),
                        b: from_point(&(pos * capsule.segment.b)),
                        radius: capsule.radius,
                    }
                } else {
                    return None;
                };
                Some((fill, ShapeColor::from_user_data(collider.user_data)))
            })
            .collect()
    }

    /// Hand every body, shape and joint to the engine's debug renderer
    pub fn render_debug(
        &self,
        pipeline: &mut DebugRenderPipeline,
        backend: &mut impl DebugRenderBackend,
    ) {
        pipeline.render(
            backend,
            &self.bodies,
            &self.colliders,
            &self.impulse_joints,
            &self.multibody_joints,
            &self.narrow_phase,
        );
    }
}
