//! Sound effect hooks
//!
//! The simulation only reports `GameEvent`s; turning them into sound is up to
//! an `AudioSink`. `LogAudio` is the headless sink used by the native runner.

use crate::sim::{AsteroidSize, GameEvent};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ship fired a bullet
    Shoot,
    /// Asteroid broke apart (pitch by size)
    AsteroidBreak { size: AsteroidSize },
    /// Ship hit by an asteroid
    ShipExplode,
    /// Last asteroid cleared
    Victory,
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::BulletFired => SoundEffect::Shoot,
            GameEvent::AsteroidDestroyed { size } => SoundEffect::AsteroidBreak { size },
            GameEvent::ShipDestroyed => SoundEffect::ShipExplode,
            GameEvent::GameWon => SoundEffect::Victory,
        }
    }
}

/// Anything that can play a sound effect
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Play one effect per event, in event order
pub fn play_events(sink: &mut impl AudioSink, events: &[GameEvent]) {
    for &event in events {
        sink.play(event.into());
    }
}

/// Sink that writes effects to the log instead of a speaker
#[derive(Debug)]
pub struct LogAudio {
    master_volume: f32,
    muted: bool,
    played: usize,
}

impl Default for LogAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl LogAudio {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            muted: false,
            played: 0,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// Effects actually played (muted ones don't count)
    pub fn played(&self) -> usize {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.played += 1;
        match effect {
            SoundEffect::AsteroidBreak { size } => {
                log::debug!("sfx: break {} (vol {vol:.2})", size.as_str());
            }
            other => log::debug!("sfx: {other:?} (vol {vol:.2})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<SoundEffect>);

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect) {
            self.0.push(effect);
        }
    }

    #[test]
    fn test_events_map_in_order() {
        let events = [
            GameEvent::BulletFired,
            GameEvent::AsteroidDestroyed { size: AsteroidSize::Large },
            GameEvent::ShipDestroyed,
        ];
        let mut rec = Recorder::default();
        play_events(&mut rec, &events);
        assert_eq!(
            rec.0,
            vec![
                SoundEffect::Shoot,
                SoundEffect::AsteroidBreak { size: AsteroidSize::Large },
                SoundEffect::ShipExplode,
            ]
        );
    }

    #[test]
    fn test_won_is_victory() {
        assert_eq!(SoundEffect::from(GameEvent::GameWon), SoundEffect::Victory);
    }

    #[test]
    fn test_muted_log_audio_plays_nothing() {
        let mut audio = LogAudio::new();
        audio.play(SoundEffect::Shoot);
        assert_eq!(audio.played(), 1);

        audio.set_muted(true);
        audio.play(SoundEffect::Shoot);
        assert_eq!(audio.played(), 1);

        audio.set_muted(false);
        audio.set_master_volume(-2.0);
        audio.play(SoundEffect::Victory);
        assert_eq!(audio.played(), 1);
    }
}
