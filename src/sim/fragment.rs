//! Asteroid fragmentation
//!
//! Large -> 4 Medium, Medium -> 2 Small, Small -> nothing. The tier table is
//! the single source for scale and split behavior.

use super::rng::RandomSource;
use super::state::{Asteroid, AsteroidSize};
use crate::settings::Settings;

/// Heading offset range (degrees) each fragment draws independently
pub const FRAGMENT_ROTATION_JITTER: i32 = 360;
/// Upper bound of the per-fragment speed draw (reference units per frame, before the tier divisor)
pub const FRAGMENT_SPEED_JITTER: i32 = 3;

/// Per-tier constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeTier {
    pub size: AsteroidSize,
    /// World scale of the outline
    pub base_scale: f32,
    /// Fragments spawned when destroyed
    pub child_count: usize,
    pub child_size: Option<AsteroidSize>,
    /// Divides the fragment speed draw; never zero
    pub jitter_divisor: f32,
}

/// Indexed by `AsteroidSize::index`
pub const SIZE_TIERS: [SizeTier; 3] = [
    SizeTier {
        size: AsteroidSize::Small,
        base_scale: 8.0,
        child_count: 0,
        child_size: None,
        jitter_divisor: 1.0,
    },
    SizeTier {
        size: AsteroidSize::Medium,
        base_scale: 15.0,
        child_count: 2,
        child_size: Some(AsteroidSize::Small),
        jitter_divisor: 3.0,
    },
    SizeTier {
        size: AsteroidSize::Large,
        base_scale: 24.0,
        child_count: 4,
        child_size: Some(AsteroidSize::Medium),
        jitter_divisor: 5.0,
    },
];

impl SizeTier {
    pub fn of(size: AsteroidSize) -> &'static SizeTier {
        &SIZE_TIERS[size.index()]
    }
}

/// Fragments for a destroyed asteroid
///
/// Each child starts at the parent's position, heading parent + U[-360, 360]°,
/// speed parent + U[0, 3] / divisor reference units per frame.
/// `settings` converts that jitter to units per second.
pub fn fragment(parent: &Asteroid, settings: &Settings, rng: &mut impl RandomSource) -> Vec<Asteroid> {
    let tier = parent.size.tier();
    let Some(child_size) = tier.child_size else {
        return Vec::new();
    };

    (0..tier.child_count)
        .map(|_| {
            let rotation = parent.rotation
                + rng.random_f32(-FRAGMENT_ROTATION_JITTER, FRAGMENT_ROTATION_JITTER);
            let jitter = rng.random_f32(0, FRAGMENT_SPEED_JITTER) / tier.jitter_divisor;
            let speed = parent.speed + settings.per_second(jitter);
            Asteroid::new(parent.position, rotation, speed, child_size, rng)
        })
        .collect()
}
