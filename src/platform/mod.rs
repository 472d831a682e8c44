//! Platform abstraction layer
//!
//! Handles the window library's side of:
//! - Input events
//! - Frame timing

pub mod input;
pub mod time;

pub use input::InputCollector;
pub use time::FrameLimiter;
