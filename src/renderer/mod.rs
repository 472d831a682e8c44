//! Rendering module
//!
//! Immediate-mode drawing through macroquad. Shapes are filled from the
//! world's geometry; outlines and joints come from rapier2d's debug-render
//! pipeline.

pub mod debug_draw;
pub mod frame;

pub use debug_draw::MacroquadDebugBackend;
pub use frame::Renderer;
