//! Rock Drift entry point
//!
//! Headless native runner: plays a seeded game with the autopilot, feeding
//! each frame through the render and audio sinks, and prints the final stats.

use std::path::Path;

use rock_drift::Settings;
use rock_drift::audio::{LogAudio, play_events};
use rock_drift::render::build_frame;
use rock_drift::sim::{GameState, autopilot, tick};

/// Two minutes of play at the reference rate
const MAX_FRAMES: u64 = 60 * 120;
const DEFAULT_SEED: u64 = 0x5EED;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::warn!("Invalid seed ({e}), using default");
            DEFAULT_SEED
        }
        None => DEFAULT_SEED,
    };

    log::info!("Rock Drift (native) starting, seed {seed}");

    let dt = 1.0 / settings.reference_fps;
    let mut state = GameState::new(settings, seed);
    let mut audio = LogAudio::new();
    let mut fired = false;
    let mut drawn_segments = 0usize;

    for _ in 0..MAX_FRAMES {
        let input = autopilot::steer(&state, fired);
        fired = input.fire;
        tick(&mut state, &input, dt);

        let frame = build_frame(&state);
        drawn_segments += frame.segment_count();
        play_events(&mut audio, &state.drain_events());

        if state.is_terminal() {
            break;
        }
    }

    if state.is_won() {
        log::info!("Field cleared after {} frames", state.frame);
    } else if state.is_game_over() {
        log::info!("Ship destroyed after {} frames", state.frame);
    } else {
        log::info!("Time limit reached with {} asteroids left", state.asteroids.len());
    }
    log::debug!("{drawn_segments} segments drawn, {} sounds played", audio.played());

    match serde_json::to_string(&state.stats()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize stats: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on wasm; a web frontend drives the library directly
}
