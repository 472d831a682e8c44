//! Physics debug-draw backend
//!
//! rapier2d walks every collider and joint and hands us line segments; we
//! draw them with macroquad, colored by each shape's stored color.

use macroquad::color::{Color, hsl_to_rgb};
use macroquad::shapes::draw_line;
use rapier2d::math::{Point, Real};
use rapier2d::pipeline::{
    DebugRenderBackend, DebugRenderMode, DebugRenderObject, DebugRenderPipeline, DebugRenderStyle,
};

use crate::sim::ShapeColor;

/// Debug pipeline configured for shapes and joints
pub fn shape_pipeline() -> DebugRenderPipeline {
    DebugRenderPipeline::new(
        DebugRenderStyle::default(),
        DebugRenderMode::COLLIDER_SHAPES | DebugRenderMode::IMPULSE_JOINTS,
    )
}

/// Shape color → draw color. Drawn opaque.
pub fn shape_color(color: ShapeColor) -> Color {
    Color::from_rgba(color.r, color.g, color.b, 255)
}

/// rapier's HSLA (hue in degrees) → draw color
pub fn engine_color(hsla: [f32; 4]) -> Color {
    let mut color = hsl_to_rgb(hsla[0] / 360.0, hsla[1], hsla[2]);
    color.a = hsla[3];
    color
}

/// Draws debug lines with macroquad
pub struct MacroquadDebugBackend {
    /// Line width in pixels
    pub thickness: f32,
}

impl Default for MacroquadDebugBackend {
    fn default() -> Self {
        Self { thickness: 2.0 }
    }
}

impl DebugRenderBackend for MacroquadDebugBackend {
    fn draw_line(
        &mut self,
        object: DebugRenderObject,
        a: Point<Real>,
        b: Point<Real>,
        color: [f32; 4],
    ) {
        let color = match object {
            DebugRenderObject::Collider(_, collider) => ShapeColor::from_user_data(collider.user_data)
                .map(shape_color)
                .unwrap_or_else(|| engine_color(color)),
            _ => engine_color(color),
        };
        draw_line(a.x, a.y, b.x, b.y, self.thickness, color);
    }
}
