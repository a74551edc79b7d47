//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Fixed pipeline order within a step
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod fragment;
pub mod geometry;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{point_in_polygon, polygons_intersect, segments_intersect};
pub use fragment::{SIZE_TIERS, SizeTier, fragment};
pub use geometry::{Body, Rect, local_bounding_box, world_bounding_box, world_polygon, wrap_position};
pub use rng::RandomSource;
pub use state::{
    Asteroid, AsteroidSize, Bullet, GameEvent, GamePhase, GameState, Ship, Stats, BULLET_OUTLINE,
    SHIP_OUTLINE,
};
pub use tick::{TickInput, tick};
