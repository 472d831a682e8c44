//! Sandbox settings
//!
//! Passed explicitly into the main loop, renderer and input dispatcher.
//! Defaults reproduce the stock sandbox and are all a normal run uses.
//!
//! Development override: when `SLINGSHOT_SETTINGS` names a JSON file, its
//! fields replace the defaults. Nothing is read unless the variable is set.

use std::sync::OnceLock;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{GRAVITY_Y, LAUNCH_IMPULSE_SCALE, TARGET_FPS};

/// A keyboard key the sandbox can bind an action to.
/// Serialized by name (`"Q"`, `"Space"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    /// A letter key, stored uppercase
    Letter(char),
    Space,
    Escape,
    Enter,
    /// Anything else the platform layer reports
    Other,
}

impl Key {
    /// Parse a key name such as `"q"`, `"Space"` or `"esc"`
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "space" | " " => Some(Key::Space),
            "escape" | "esc" => Some(Key::Escape),
            "enter" | "return" => Some(Key::Enter),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Some(Key::Letter(c.to_ascii_uppercase()))
                    }
                    _ => None,
                }
            }
        }
    }

    pub fn label(&self) -> String {
        match self {
            Key::Letter(c) => c.to_string(),
            Key::Space => "Space".to_string(),
            Key::Escape => "Esc".to_string(),
            Key::Enter => "Enter".to_string(),
            Key::Other => "?".to_string(),
        }
    }
}

impl TryFrom<String> for Key {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Key::from_str(&name).ok_or_else(|| format!("unknown key {:?}", name))
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.label()
    }
}

/// Sandbox settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Gravity in pixels/s² (y down)
    pub gravity: Vec2,
    /// Frame rate; the physics timestep is its reciprocal
    pub target_fps: u32,
    /// Launch impulse per pixel of drag
    pub impulse_scale: f32,

    // === Window ===
    /// Fill the host display
    pub fullscreen: bool,
    /// Window size used when not fullscreen
    pub window_size: (u32, u32),

    // === Bindings ===
    pub quit_key: Key,
    pub pause_key: Key,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, GRAVITY_Y),
            target_fps: TARGET_FPS,
            impulse_scale: LAUNCH_IMPULSE_SCALE,

            fullscreen: true,
            window_size: (1280, 800),

            quit_key: Key::Letter('Q'),
            pause_key: Key::Space,

            show_fps: false,
        }
    }
}

impl Settings {
    /// Environment variable naming an optional JSON settings file
    pub const ENV_VAR: &'static str = "SLINGSHOT_SETTINGS";

    /// Fixed physics timestep in seconds
    pub fn timestep(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    /// Parse settings from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from the file named by [`Settings::ENV_VAR`], if any
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {} - using defaults", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read settings file {}: {} - using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Settings for this process, loaded on first use.
    ///
    /// The window config and the main loop both need them; this keeps the
    /// override file to a single read.
    pub fn shared() -> &'static Settings {
        static SHARED: OnceLock<Settings> = OnceLock::new();
        SHARED.get_or_init(Self::load)
    }

    /// Instruction line shown at the top of the screen
    pub fn instructions(&self) -> String {
        format!(
            "Click to place a ball. Drag to apply the force. Click to launch the ball. \
             Click again to delete the ball. [{}] to pause. [{}] to quit.",
            self.pause_key.label(),
            self.quit_key.label()
        )
    }
}
