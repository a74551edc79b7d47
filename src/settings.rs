//! Game settings and tuning
//!
//! Passed into the simulation at construction. Loaded from an optional JSON
//! file; any key left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Debug overlay toggles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugSettings {
    /// Outline every entity's bounding box
    pub draw_bounding_boxes: bool,
    /// Use boxes fitted to the rotated outline instead of the unrotated local extents
    pub tight_bounding_boxes: bool,
    /// Label each asteroid with its size tier and speed
    pub draw_asteroid_info: bool,
    /// Entity counts and ship position in the top-left corner
    pub draw_stats: bool,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            draw_bounding_boxes: false,
            tight_bounding_boxes: true,
            draw_asteroid_info: true,
            draw_stats: true,
        }
    }
}

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play field ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Frame rate the per-frame constants (drag) are expressed against
    pub reference_fps: f32,
    /// Asteroids spawned on (re)start
    pub initial_asteroids: usize,

    // === Ship ===
    pub ship_scale: f32,
    /// Thrust acceleration (units/s²)
    pub ship_thrust: f32,
    /// Fraction of velocity lost per reference frame
    pub ship_drag: f32,
    /// Degrees per second while a rotate key is held
    pub ship_turn_rate: f32,

    // === Bullets ===
    pub bullet_scale: f32,
    /// Units per second
    pub bullet_speed: f32,
    /// Seconds
    pub bullet_lifetime: f32,

    // === Asteroids ===
    /// Spawn speed (units/s)
    pub asteroid_speed: f32,

    // === Debug overlays ===
    pub debug: DebugSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            reference_fps: REFERENCE_FPS,
            initial_asteroids: INITIAL_ASTEROIDS,

            ship_scale: SHIP_SCALE,
            ship_thrust: SHIP_THRUST,
            ship_drag: SHIP_DRAG,
            ship_turn_rate: SHIP_TURN_RATE,

            bullet_scale: BULLET_SCALE,
            bullet_speed: BULLET_SPEED,
            bullet_lifetime: BULLET_LIFETIME,

            asteroid_speed: ASTEROID_SPEED,

            debug: DebugSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON (missing keys fall back to defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Pretty JSON of the effective settings
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load settings from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {} - using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace values the simulation cannot run with by their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        fn fix(name: &str, value: &mut f32, default: f32, valid: bool) {
            if !valid {
                log::warn!("Setting {} = {} is out of range, using {}", name, value, default);
                *value = default;
            }
        }

        let w = self.screen_width;
        fix("screen_width", &mut self.screen_width, defaults.screen_width, w > 0.0 && w.is_finite());
        let h = self.screen_height;
        fix("screen_height", &mut self.screen_height, defaults.screen_height, h > 0.0 && h.is_finite());
        let fps = self.reference_fps;
        fix("reference_fps", &mut self.reference_fps, defaults.reference_fps, fps > 0.0 && fps.is_finite());
        let drag = self.ship_drag;
        fix("ship_drag", &mut self.ship_drag, defaults.ship_drag, (0.0..1.0).contains(&drag));
        let scale = self.ship_scale;
        fix("ship_scale", &mut self.ship_scale, defaults.ship_scale, scale > 0.0);
        let scale = self.bullet_scale;
        fix("bullet_scale", &mut self.bullet_scale, defaults.bullet_scale, scale > 0.0);

        for (name, value, default) in [
            ("ship_thrust", &mut self.ship_thrust, defaults.ship_thrust),
            ("ship_turn_rate", &mut self.ship_turn_rate, defaults.ship_turn_rate),
            ("bullet_speed", &mut self.bullet_speed, defaults.bullet_speed),
            ("bullet_lifetime", &mut self.bullet_lifetime, defaults.bullet_lifetime),
            ("asteroid_speed", &mut self.asteroid_speed, defaults.asteroid_speed),
        ] {
            let v = *value;
            fix(name, value, default, v >= 0.0 && v.is_finite());
        }

        self
    }

    /// Play field extents as a vector
    pub fn screen_size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.screen_width, self.screen_height)
    }

    /// Convert a per-reference-frame quantity into a per-second one
    pub fn per_second(&self, per_frame: f32) -> f32 {
        per_frame * self.reference_fps
    }
}
