//! Per-frame simulation step
//!
//! One call per rendered frame. The pipeline order is fixed: ship, bullets,
//! asteroids, collisions, cleanup, terminal check.

use glam::Vec2;

use super::collision::outlines_collide;
use super::fragment::fragment;
use super::geometry::{world_polygon, wrap_position};
use super::state::{Asteroid, GameEvent, GamePhase, GameState};

/// Input snapshot for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held: accelerate along the heading
    pub thrust: bool,
    /// Held: turn counter-clockwise (decreasing degrees)
    pub rotate_left: bool,
    /// Held: turn clockwise (increasing degrees)
    pub rotate_right: bool,
    /// Pressed this frame
    pub fire: bool,
    /// Pressed this frame
    pub pause: bool,
    /// Pressed this frame
    pub restart: bool,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if input.restart {
        state.restart();
        return;
    }

    if input.pause {
        state.paused = !state.paused;
        log::info!("{}", if state.paused { "Paused" } else { "Resumed" });
    }

    // Paused or terminal: keep rendering the last state, simulate nothing
    if state.paused || state.is_terminal() {
        return;
    }

    state.frame += 1;

    update_ship(state, input, dt);
    update_bullets(state, dt);
    update_asteroids(state, dt);
    let spawned = resolve_collisions(state);
    cleanup(state, spawned);
    check_win(state);
}

/// Steering, thrust, drag, integration, wrap, fire
fn update_ship(state: &mut GameState, input: &TickInput, dt: f32) {
    let s = &state.settings;
    let bounds = s.screen_size();
    let ship = &mut state.ship;

    if input.rotate_left {
        ship.rotation -= s.ship_turn_rate * dt;
    }
    if input.rotate_right {
        ship.rotation += s.ship_turn_rate * dt;
    }

    if input.thrust {
        ship.velocity += ship.heading() * ship.speed * dt;
    }
    // Drag is tuned per reference frame
    ship.velocity *= (1.0 - s.ship_drag).powf(dt * s.reference_fps);
    ship.position = wrap_position(ship.position + ship.velocity * dt, bounds);

    if input.fire {
        state.spawn_bullet_from_ship();
    }
}

/// Lifetime decay, then movement for bullets still alive
fn update_bullets(state: &mut GameState, dt: f32) {
    let bounds = state.settings.screen_size();
    for bullet in &mut state.bullets {
        bullet.lifetime -= dt;
        if bullet.lifetime <= 0.0 {
            bullet.marked_for_removal = true;
            continue;
        }
        let step = crate::heading(bullet.rotation) * bullet.speed * dt;
        bullet.position = wrap_position(bullet.position + step, bounds);
    }
}

fn update_asteroids(state: &mut GameState, dt: f32) {
    let bounds = state.settings.screen_size();
    for asteroid in &mut state.asteroids {
        let step = asteroid.heading() * asteroid.speed * dt;
        asteroid.position = wrap_position(asteroid.position + step, bounds);
    }
}

/// Bullet-vs-asteroid then ship-vs-asteroid
///
/// Marks hits and returns the fragments to append after cleanup. Anything
/// already marked this frame is skipped, so each hit is counted once.
fn resolve_collisions(state: &mut GameState) -> Vec<Asteroid> {
    let mut spawned = Vec::new();

    let asteroid_polys: Vec<Vec<Vec2>> = state.asteroids.iter().map(world_polygon).collect();

    for bullet in state.bullets.iter_mut().filter(|b| !b.marked_for_removal) {
        let bullet_poly = world_polygon(&*bullet);

        for (asteroid, poly) in state.asteroids.iter_mut().zip(&asteroid_polys) {
            if asteroid.marked_for_removal || !outlines_collide(poly, &bullet_poly) {
                continue;
            }

            asteroid.marked_for_removal = true;
            bullet.marked_for_removal = true;
            spawned.extend(fragment(asteroid, &state.settings, &mut state.rng));
            state.events.push(GameEvent::AsteroidDestroyed { size: asteroid.size });
            log::debug!(
                "{} asteroid destroyed at ({:.0}, {:.0})",
                asteroid.size.as_str(),
                asteroid.position.x,
                asteroid.position.y
            );
            break;
        }
    }

    let ship_poly = world_polygon(&state.ship);
    let ship_hit = state
        .asteroids
        .iter()
        .zip(&asteroid_polys)
        .any(|(asteroid, poly)| !asteroid.marked_for_removal && outlines_collide(poly, &ship_poly));

    if ship_hit {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::ShipDestroyed);
        log::info!("Ship destroyed on frame {}", state.frame);
    }

    spawned
}

/// Drop marked entities, then append this frame's fragments
fn cleanup(state: &mut GameState, spawned: Vec<Asteroid>) {
    state.bullets.retain(|b| !b.marked_for_removal);
    state.asteroids.retain(|a| !a.marked_for_removal);
    state.asteroids.extend(spawned);
}

fn check_win(state: &mut GameState) {
    if state.phase == GamePhase::Playing && state.asteroids.is_empty() {
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::GameWon);
        log::info!("Field cleared on frame {}", state.frame);
    }
}
