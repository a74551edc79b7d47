//! Game state and core simulation types
//!
//! The game state exclusively owns every entity. Entities are plain records
//! that live exactly as long as they stay in their collection.

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::fragment::SizeTier;
use super::geometry::{Body, wrap_position};
use super::rng::{RandomSource, seeded};
use crate::settings::Settings;

/// Arrow-shaped ship outline, nose along +x
pub const SHIP_OUTLINE: [Vec2; 5] = [
    Vec2::new(0.5, 0.0),
    Vec2::new(-0.5, 0.5),
    Vec2::new(-0.2, 0.3),
    Vec2::new(-0.2, -0.3),
    Vec2::new(-0.5, -0.5),
];

/// Triangular bullet outline, right angle at the nose on +x
pub const BULLET_OUTLINE: [Vec2; 3] = [
    Vec2::new(0.0, FRAC_1_SQRT_2),
    Vec2::new(FRAC_1_SQRT_2, 0.0),
    Vec2::new(0.0, -FRAC_1_SQRT_2),
];

/// Asteroid outline vertex count range (inclusive)
pub const ASTEROID_MIN_VERTICES: i32 = 6;
pub const ASTEROID_MAX_VERTICES: i32 = 10;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ship hit an asteroid - frozen until restart
    GameOver,
    /// Field cleared - frozen until restart
    Won,
}

/// Something a sound or effect can hang off; one per occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BulletFired,
    AsteroidDestroyed { size: AsteroidSize },
    ShipDestroyed,
    GameWon,
}

/// Asteroid size tiers, largest splits first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidSize {
    Small,
    Medium,
    Large,
}

impl AsteroidSize {
    pub const ALL: [AsteroidSize; 3] = [AsteroidSize::Small, AsteroidSize::Medium, AsteroidSize::Large];

    /// Tier index: Small = 0, Medium = 1, Large = 2
    pub fn index(self) -> usize {
        self as usize
    }

    /// Tier for an index, clamped to the valid range
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.clamp(0, 2) as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AsteroidSize::Small => "Small",
            AsteroidSize::Medium => "Medium",
            AsteroidSize::Large => "Large",
        }
    }

    /// World scale for this tier
    pub fn base_scale(self) -> f32 {
        self.tier().base_scale
    }

    pub fn tier(self) -> &'static SizeTier {
        SizeTier::of(self)
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub position: Vec2,
    /// Heading in degrees
    pub rotation: f32,
    pub scale: f32,
    /// Thrust acceleration (units/s²)
    pub speed: f32,
    /// Accumulated velocity (units/s), drag-damped
    pub velocity: Vec2,
}

impl Ship {
    pub fn new(position: Vec2, rotation: f32, scale: f32, speed: f32) -> Self {
        Self {
            position,
            rotation,
            scale,
            speed,
            velocity: Vec2::ZERO,
        }
    }

    pub fn heading(&self) -> Vec2 {
        crate::heading(self.rotation)
    }
}

impl Body for Ship {
    fn position(&self) -> Vec2 {
        self.position
    }
    fn rotation(&self) -> f32 {
        self.rotation
    }
    fn scale(&self) -> f32 {
        self.scale
    }
    fn local_shape(&self) -> &[Vec2] {
        &SHIP_OUTLINE
    }
}

/// A projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub position: Vec2,
    pub scale: f32,
    /// Heading in degrees
    pub rotation: f32,
    /// Units per second along the heading
    pub speed: f32,
    /// Seconds left before it expires
    pub lifetime: f32,
    pub marked_for_removal: bool,
}

impl Bullet {
    pub fn new(position: Vec2, scale: f32, rotation: f32, speed: f32, lifetime: f32) -> Self {
        Self {
            position,
            scale,
            rotation,
            speed,
            lifetime,
            marked_for_removal: false,
        }
    }
}

impl Body for Bullet {
    fn position(&self) -> Vec2 {
        self.position
    }
    fn rotation(&self) -> f32 {
        self.rotation
    }
    fn scale(&self) -> f32 {
        self.scale
    }
    fn local_shape(&self) -> &[Vec2] {
        &BULLET_OUTLINE
    }
}

/// A drifting rock with a procedurally generated outline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub position: Vec2,
    /// Heading in degrees
    pub rotation: f32,
    /// Derived from `size` at spawn
    pub scale: f32,
    /// Units per second along the heading
    pub speed: f32,
    pub size: AsteroidSize,
    pub outline: Vec<Vec2>,
    pub marked_for_removal: bool,
}

impl Asteroid {
    /// Spawn an asteroid with a fresh random outline
    pub fn new(
        position: Vec2,
        rotation: f32,
        speed: f32,
        size: AsteroidSize,
        rng: &mut impl RandomSource,
    ) -> Self {
        let scale = size.base_scale();
        Self {
            position,
            rotation,
            scale,
            speed,
            size,
            outline: generate_outline(scale, rng),
            marked_for_removal: false,
        }
    }

    pub fn heading(&self) -> Vec2 {
        crate::heading(self.rotation)
    }
}

impl Body for Asteroid {
    fn position(&self) -> Vec2 {
        self.position
    }
    fn rotation(&self) -> f32 {
        self.rotation
    }
    fn scale(&self) -> f32 {
        self.scale
    }
    fn local_shape(&self) -> &[Vec2] {
        &self.outline
    }
}

/// Unit-radius ring of 6-10 evenly spaced vertices, each nudged by up to
/// `scale / 100` per axis
pub fn generate_outline(scale: f32, rng: &mut impl RandomSource) -> Vec<Vec2> {
    let count = rng.random_int(ASTEROID_MIN_VERTICES, ASTEROID_MAX_VERTICES).max(3);
    let section = 360.0 / count as f32;
    let jitter = scale as i32;

    (0..count)
        .map(|i| {
            let ring = crate::heading(i as f32 * section);
            let offset = Vec2::new(
                rng.random_f32(-jitter, jitter) / 100.0,
                rng.random_f32(-jitter, jitter) / 100.0,
            );
            ring + offset
        })
        .collect()
}

/// Snapshot of counters for HUDs and logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub frame: u64,
    pub bullets: usize,
    pub asteroids: usize,
    pub ship_position: Vec2,
    pub game_over: bool,
    pub won: bool,
    pub paused: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Play field and tuning
    pub settings: Settings,
    pub rng: Pcg32,
    /// Steps simulated since (re)start (paused/terminal frames excluded)
    pub frame: u64,
    pub phase: GamePhase,
    pub paused: bool,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub asteroids: Vec<Asteroid>,
    /// Events raised by the most recent step
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the standard opening field
    pub fn new(settings: Settings, seed: u64) -> Self {
        let mut state = Self::empty(settings, seed);
        state.spawn_initial_field();
        log::info!(
            "New game (seed {}): {} asteroids",
            seed,
            state.asteroids.len()
        );
        state
    }

    /// Ship at the center, no bullets, no asteroids
    pub fn empty(settings: Settings, seed: u64) -> Self {
        let ship = Self::fresh_ship(&settings);
        Self {
            seed,
            rng: seeded(seed),
            settings,
            frame: 0,
            phase: GamePhase::Playing,
            paused: false,
            ship,
            bullets: Vec::new(),
            asteroids: Vec::new(),
            events: Vec::new(),
        }
    }

    fn fresh_ship(settings: &Settings) -> Ship {
        Ship::new(
            settings.screen_size() * 0.5,
            0.0,
            settings.ship_scale,
            settings.ship_thrust,
        )
    }

    /// Reset to the opening field; the RNG keeps running so each restart differs
    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.paused = false;
        self.frame = 0;
        self.ship = Self::fresh_ship(&self.settings);
        self.bullets.clear();
        self.asteroids.clear();
        self.events.clear();
        self.spawn_initial_field();
        log::info!("Game restarted: {} asteroids", self.asteroids.len());
    }

    /// Random sizes and headings, biased to the upper-left quadrant
    fn spawn_initial_field(&mut self) {
        let max_x = (self.settings.screen_width / 2.0) as i32;
        let max_y = (self.settings.screen_height / 2.0) as i32;
        let speed = self.settings.asteroid_speed;

        for _ in 0..self.settings.initial_asteroids {
            let size = AsteroidSize::from_index(self.rng.random_int(0, 2));
            let x = self.rng.random_f32(0, max_x);
            let y = self.rng.random_f32(0, max_y);
            let rotation = self.rng.random_f32(0, 360);
            let position = wrap_position(Vec2::new(x, y), self.settings.screen_size());
            let asteroid = Asteroid::new(position, rotation, speed, size, &mut self.rng);
            self.asteroids.push(asteroid);
        }
    }

    /// Add an asteroid with a generated outline
    pub fn spawn_asteroid(&mut self, position: Vec2, rotation: f32, speed: f32, size: AsteroidSize) {
        let asteroid = Asteroid::new(position, rotation, speed, size, &mut self.rng);
        self.asteroids.push(asteroid);
    }

    /// Fire a bullet from the ship's position along its heading
    pub fn spawn_bullet_from_ship(&mut self) {
        let s = &self.settings;
        let bullet = Bullet::new(
            self.ship.position,
            s.bullet_scale,
            self.ship.rotation,
            s.bullet_speed,
            s.bullet_lifetime,
        );
        self.bullets.push(bullet);
        self.events.push(GameEvent::BulletFired);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Game over or won
    pub fn is_terminal(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    /// Take this step's events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn stats(&self) -> Stats {
        Stats {
            frame: self.frame,
            bullets: self.bullets.len(),
            asteroids: self.asteroids.len(),
            ship_position: self.ship.position,
            game_over: self.is_game_over(),
            won: self.is_won(),
            paused: self.paused,
        }
    }
}
