//! Idle/demo mode - steers the ship like a player would
//!
//! Produces an ordinary `TickInput`, so the simulation cannot tell it apart
//! from keyboard play.

use glam::Vec2;

use super::state::{Asteroid, GameState};
use super::tick::TickInput;
use crate::angle_delta_deg;

/// Fire when the target is within this many degrees of the nose
pub const AIM_TOLERANCE_DEG: f32 = 10.0;
/// Dead zone so the ship doesn't jitter around the exact heading
const TURN_DEAD_ZONE_DEG: f32 = 2.0;

/// Shortest displacement from `from` to `to` on the wrapped field
pub fn toroidal_delta(from: Vec2, to: Vec2, bounds: Vec2) -> Vec2 {
    let mut d = to - from;
    if d.x > bounds.x / 2.0 {
        d.x -= bounds.x;
    } else if d.x < -bounds.x / 2.0 {
        d.x += bounds.x;
    }
    if d.y > bounds.y / 2.0 {
        d.y -= bounds.y;
    } else if d.y < -bounds.y / 2.0 {
        d.y += bounds.y;
    }
    d
}

/// Nearest live asteroid and the wrapped displacement to it
fn nearest_target(state: &GameState) -> Option<(&Asteroid, Vec2)> {
    let bounds = state.settings.screen_size();
    state
        .asteroids
        .iter()
        .filter(|a| !a.marked_for_removal)
        .map(|a| (a, toroidal_delta(state.ship.position, a.position, bounds)))
        .min_by(|(_, a), (_, b)| {
            a.length_squared()
                .partial_cmp(&b.length_squared())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

/// Input for the next frame
///
/// `fired_last_frame` is the `fire` value this returned on the previous
/// frame; fire is edge-triggered so presses have to alternate.
pub fn steer(state: &GameState, fired_last_frame: bool) -> TickInput {
    let mut input = TickInput::default();
    let Some((_, to_target)) = nearest_target(state) else {
        return input;
    };

    let target_deg = to_target.y.atan2(to_target.x).to_degrees();
    let off = angle_delta_deg(state.ship.rotation, target_deg);

    input.rotate_right = off > TURN_DEAD_ZONE_DEG;
    input.rotate_left = off < -TURN_DEAD_ZONE_DEG;

    let aligned = off.abs() <= AIM_TOLERANCE_DEG;
    let keep_away = state.settings.screen_width.min(state.settings.screen_height) / 3.0;
    input.thrust = aligned && to_target.length() > keep_away;
    input.fire = aligned && !fired_last_frame;

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::AsteroidSize;
    use crate::sim::tick::tick;

    fn lone_target(at: Vec2) -> GameState {
        let mut state = GameState::empty(Settings::default(), 4);
        state.spawn_asteroid(at, 0.0, 0.0, AsteroidSize::Large);
        state
    }

    #[test]
    fn test_toroidal_delta_takes_short_way() {
        let bounds = Vec2::new(800.0, 450.0);
        let d = toroidal_delta(Vec2::new(790.0, 10.0), Vec2::new(10.0, 440.0), bounds);
        assert_eq!(d, Vec2::new(20.0, -20.0));
    }

    #[test]
    fn test_turns_toward_target() {
        // Target straight "below" the ship (+y) -> clockwise
        let state = lone_target(Vec2::new(400.0, 350.0));
        let input = steer(&state, false);
        assert!(input.rotate_right && !input.rotate_left);
        assert!(!input.fire);

        // Target "above" -> counter-clockwise
        let state = lone_target(Vec2::new(400.0, 100.0));
        let input = steer(&state, false);
        assert!(input.rotate_left && !input.rotate_right);
    }

    #[test]
    fn test_fires_when_aligned_and_alternates() {
        let state = lone_target(Vec2::new(500.0, 225.0));
        let input = steer(&state, false);
        assert!(input.fire);
        assert!(!input.rotate_left && !input.rotate_right);
        // Close target: no thrust
        assert!(!input.thrust);

        let input = steer(&state, true);
        assert!(!input.fire);
    }

    #[test]
    fn test_thrusts_toward_far_target() {
        let state = lone_target(Vec2::new(780.0, 225.0));
        // 380 units out, beyond a third of the 450-unit height
        let input = steer(&state, false);
        assert!(input.thrust);
    }

    #[test]
    fn test_no_targets_no_input() {
        let state = GameState::empty(Settings::default(), 4);
        let input = steer(&state, false);
        assert!(!input.fire && !input.thrust && !input.rotate_left && !input.rotate_right);
        assert!(!input.pause && !input.restart);
    }

    #[test]
    fn test_autopilot_hits_a_still_target() {
        let mut state = lone_target(Vec2::new(400.0, 100.0));
        let mut fired = false;
        let dt = 1.0 / 60.0;

        for _ in 0..300 {
            if state.asteroids.iter().any(|a| a.size == AsteroidSize::Medium) || state.is_terminal() {
                break;
            }
            let input = steer(&state, fired);
            fired = input.fire;
            tick(&mut state, &input, dt);
        }

        assert!(!state.is_game_over());
        assert!(state.asteroids.iter().all(|a| a.size != AsteroidSize::Large));
    }
}
