//! Rock Drift - A wrap-around asteroid field arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, fragmentation, game state)
//! - `render`: Line-list output for an external renderer
//! - `audio`: Sound cue mapping for an external audio backend
//! - `settings`: Data-driven configuration (screen bounds, tuning, debug overlays)

pub mod audio;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{DebugSettings, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Frame rate the per-frame tuning is calibrated against
    pub const REFERENCE_FPS: f32 = 60.0;

    /// Play field dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 450.0;

    /// Asteroids spawned on (re)start
    pub const INITIAL_ASTEROIDS: usize = 10;

    /// Ship defaults
    pub const SHIP_SCALE: f32 = 20.0;
    /// Thrust acceleration (units/s²)
    pub const SHIP_THRUST: f32 = 300.0;
    /// Fraction of velocity lost per reference frame
    pub const SHIP_DRAG: f32 = 0.015;
    /// Turn rate (degrees/s) - 3° per frame at 60 Hz
    pub const SHIP_TURN_RATE: f32 = 180.0;

    /// Bullet defaults
    pub const BULLET_SCALE: f32 = 10.0;
    /// Bullet speed (units/s) - 8 units per frame at 60 Hz
    pub const BULLET_SPEED: f32 = 480.0;
    /// Bullet lifetime (seconds)
    pub const BULLET_LIFETIME: f32 = 1.0;

    /// Asteroid spawn speed (units/s) - 1 unit per frame at 60 Hz
    pub const ASTEROID_SPEED: f32 = 60.0;
}

/// Unit heading vector for a rotation in degrees
#[inline]
pub fn heading(rotation_deg: f32) -> Vec2 {
    Vec2::from_angle(rotation_deg.to_radians())
}

/// Shortest signed angular difference `to - from`, in degrees, within [-180, 180)
#[inline]
pub fn angle_delta_deg(from: f32, to: f32) -> f32 {
    (to - from + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_axes() {
        let east = heading(0.0);
        assert!((east.x - 1.0).abs() < 1e-6 && east.y.abs() < 1e-6);

        let south = heading(90.0);
        assert!(south.x.abs() < 1e-6 && (south.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_angle_delta_wraps() {
        assert!((angle_delta_deg(350.0, 10.0) - 20.0).abs() < 1e-4);
        assert!((angle_delta_deg(10.0, 350.0) + 20.0).abs() < 1e-4);
        assert!((angle_delta_deg(0.0, 720.0)).abs() < 1e-4);
    }
}
