//! Per-frame drawing
//!
//! Order: background, instructions, aim line, filled shapes, then the physics
//! engine's outlines and joints. Presenting is left to the caller's
//! `next_frame().await`.

use glam::Vec2;
use macroquad::color::Color;
use macroquad::math::vec2;
use macroquad::shapes::{draw_circle, draw_line, draw_triangle};
use macroquad::text::{draw_text, measure_text};
use macroquad::time::get_fps;
use macroquad::window::{clear_background, screen_width};
use rapier2d::prelude::DebugRenderPipeline;

use super::debug_draw::{MacroquadDebugBackend, shape_color, shape_pipeline};
use crate::settings::Settings;
use crate::sim::{AimLine, SandboxState, ShapeFill};

/// Colors for sandbox elements
pub mod colors {
    use macroquad::color::Color;

    pub const BACKGROUND: Color = Color::new(223.0 / 255.0, 184.0 / 255.0, 242.0 / 255.0, 1.0);
    pub const TEXT: Color = Color::new(97.0 / 255.0, 62.0 / 255.0, 115.0 / 255.0, 1.0);
    pub const AIM_LINE: Color = Color::new(96.0 / 255.0, 62.0 / 255.0, 115.0 / 255.0, 1.0);
}

pub const FONT_SIZE: u16 = 36;
/// Top edge of the instruction text
pub const TEXT_TOP: f32 = 50.0;
pub const AIM_LINE_WIDTH: f32 = 3.0;

/// Draws the sandbox each frame
pub struct Renderer {
    debug_pipeline: DebugRenderPipeline,
    backend: MacroquadDebugBackend,
    instructions: String,
    show_fps: bool,
}

impl Renderer {
    pub fn new(settings: &Settings) -> Self {
        Self {
            debug_pipeline: shape_pipeline(),
            backend: MacroquadDebugBackend::default(),
            instructions: settings.instructions(),
            show_fps: settings.show_fps,
        }
    }

    /// Draw the current state; `pointer` feeds the aim line
    pub fn draw(&mut self, state: &SandboxState, pointer: Vec2) {
        clear_background(colors::BACKGROUND);

        self.draw_instructions();

        if let Some(line) = state.aim_line(pointer) {
            draw_aim_line(&line);
        }

        for (fill, color) in state.world.shape_fills() {
            // Uncolored shapes only get the engine's outline
            if let Some(color) = color {
                draw_fill(&fill, shape_color(color));
            }
        }
        state
            .world
            .render_debug(&mut self.debug_pipeline, &mut self.backend);

        if self.show_fps {
            draw_text(&format!("{} fps", get_fps()), 10.0, 30.0, 24.0, colors::TEXT);
        }
    }

    fn draw_instructions(&self) {
        let dims = measure_text(&self.instructions, None, FONT_SIZE, 1.0);
        let x = (screen_width() - dims.width) / 2.0;
        // draw_text positions the baseline
        draw_text(
            &self.instructions,
            x,
            TEXT_TOP + dims.offset_y,
            FONT_SIZE as f32,
            colors::TEXT,
        );
    }
}

fn draw_aim_line(line: &AimLine) {
    draw_line(
        line.start.x,
        line.start.y,
        line.end.x,
        line.end.y,
        AIM_LINE_WIDTH,
        colors::AIM_LINE,
    );
}

fn draw_fill(fill: &ShapeFill, color: Color) {
    match fill {
        ShapeFill::Circle { center, radius } => draw_circle(center.x, center.y, *radius, color),
        ShapeFill::Polygon(points) => {
            // Triangle fan; shapes are convex
            if let Some((first, rest)) = points.split_first() {
                for pair in rest.windows(2) {
                    draw_triangle(
                        vec2(first.x, first.y),
                        vec2(pair[0].x, pair[0].y),
                        vec2(pair[1].x, pair[1].y),
                        color,
                    );
                }
            }
        }
        ShapeFill::Capsule { a, b, radius } => {
            draw_line(a.x, a.y, b.x, b.y, radius * 2.0, color);
            draw_circle(a.x, a.y, *radius, color);
            draw_circle(b.x, b.y, *radius, color);
        }
    }
}
