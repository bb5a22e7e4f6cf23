//! Physics tunables
//!
//! Defaults match the classic 600x600 arena. The JSON round-trip lets an
//! embedding supply its own values without recompiling; simulation state
//! itself is never persisted.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Arena width in pixels
    pub arena_width: f32,
    /// Arena height in pixels
    pub arena_height: f32,
    /// Maximum number of live bodies; spawns beyond this are ignored
    pub max_bodies: usize,
    /// Smallest spawnable radius
    pub min_radius: f32,
    /// Largest spawnable radius
    pub max_radius: f32,
    /// Gravity gain on velocity.y per second of frame time
    pub gravity: f32,
    /// Spawn radius change per scroll-wheel notch
    pub scroll_step: f32,
    /// Fraction of speed kept after a wall bounce
    pub restitution: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            max_bodies: MAX_BODIES,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            gravity: GRAVITY,
            scroll_step: SCROLL_STEP,
            restitution: RESTITUTION,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("bad settings JSON ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Clamp a requested spawn radius into the allowed range
    pub fn clamp_radius(&self, radius: f32) -> f32 {
        radius.clamp(self.min_radius, self.max_radius)
    }
}
