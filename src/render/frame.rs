//! Per-frame draw list assembly
//!
//! Turns the game state into outline line lists and text requests. Font
//! rasterization and line drawing belong to whatever frontend consumes this.

use glam::Vec2;

use super::shapes::{closed_outline, rect_outline};
use super::vertex::{Vertex, colors};
use crate::sim::{Body, GameState, Rect, local_bounding_box, world_bounding_box, world_polygon};

/// Font size for HUD and asteroid labels
pub const HUD_TEXT_SIZE: f32 = 10.0;
/// Font size for PAUSE / GAME OVER / YOU WIN
pub const BANNER_TEXT_SIZE: f32 = 20.0;

/// A text request
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    /// Top-left corner, or the center when `centered`
    pub position: Vec2,
    pub size: f32,
    pub color: [f32; 4],
    pub centered: bool,
}

impl TextItem {
    fn hud(text: String, position: Vec2) -> Self {
        Self {
            text,
            position,
            size: HUD_TEXT_SIZE,
            color: colors::TEXT,
            centered: false,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Line list (vertex pairs)
    pub lines: Vec<Vertex>,
    pub texts: Vec<TextItem>,
}

impl Frame {
    /// Number of line segments
    pub fn segment_count(&self) -> usize {
        self.lines.len() / 2
    }

    fn outline(&mut self, body: &impl Body, color: [f32; 4], boxes: Option<bool>) {
        self.lines.extend(closed_outline(&world_polygon(body), color));
        if let Some(tight) = boxes {
            let rect: Rect = if tight {
                world_bounding_box(body)
            } else {
                local_bounding_box(body)
            };
            self.lines.extend(rect_outline(&rect, colors::BOUNDING_BOX));
        }
    }
}

/// Build the draw list for the current state
pub fn build_frame(state: &GameState) -> Frame {
    let debug = &state.settings.debug;
    let boxes = debug.draw_bounding_boxes.then_some(debug.tight_bounding_boxes);
    let mut frame = Frame::default();

    frame.outline(&state.ship, colors::SHIP, boxes);

    for bullet in state.bullets.iter().filter(|b| !b.marked_for_removal) {
        frame.outline(bullet, colors::BULLET, boxes);
    }

    for asteroid in state.asteroids.iter().filter(|a| !a.marked_for_removal) {
        frame.outline(asteroid, colors::ASTEROID, boxes);
        if debug.draw_asteroid_info {
            let label = format!("{} {:.1}", asteroid.size.as_str(), asteroid.speed);
            let offset = Vec2::splat(asteroid.scale);
            frame.texts.push(TextItem::hud(label, asteroid.position + offset));
        }
    }

    if debug.draw_stats {
        let ship = state.ship.position;
        let lines = [
            format!("Number of bullets: {}", state.bullets.len()),
            format!("Number of asteroids: {}", state.asteroids.len()),
            format!("Ship pos: {:.0}, {:.0}", ship.x, ship.y),
        ];
        for (i, text) in lines.into_iter().enumerate() {
            let y = 10.0 + i as f32 * HUD_TEXT_SIZE;
            frame.texts.push(TextItem::hud(text, Vec2::new(2.0, y)));
        }
    }

    let banner = if state.is_paused() {
        Some("PAUSE")
    } else if state.is_game_over() {
        Some("GAME OVER")
    } else if state.is_won() {
        Some("YOU WIN")
    } else {
        None
    };

    if let Some(text) = banner {
        frame.texts.push(TextItem {
            text: text.to_string(),
            position: state.settings.screen_size() * 0.5,
            size: BANNER_TEXT_SIZE,
            color: colors::BANNER,
            centered: true,
        });
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{AsteroidSize, GamePhase, SHIP_OUTLINE};

    fn quiet_settings() -> Settings {
        let mut settings = Settings::default();
        settings.debug.draw_asteroid_info = false;
        settings.debug.draw_stats = false;
        settings
    }

    #[test]
    fn test_ship_only_frame() {
        let state = GameState::empty(quiet_settings(), 1);
        let frame = build_frame(&state);
        assert_eq!(frame.segment_count(), SHIP_OUTLINE.len());
        assert!(frame.texts.is_empty());
    }

    #[test]
    fn test_marked_entities_are_not_drawn() {
        let mut state = GameState::empty(quiet_settings(), 1);
        state.spawn_asteroid(Vec2::new(100.0, 100.0), 0.0, 0.0, AsteroidSize::Small);
        state.spawn_asteroid(Vec2::new(300.0, 100.0), 0.0, 0.0, AsteroidSize::Small);
        let live = state.asteroids[0].outline.len();
        state.asteroids[1].marked_for_removal = true;

        let frame = build_frame(&state);
        assert_eq!(frame.segment_count(), SHIP_OUTLINE.len() + live);
    }

    #[test]
    fn test_bounding_boxes_add_four_edges_each() {
        let mut settings = quiet_settings();
        settings.debug.draw_bounding_boxes = true;
        let state = GameState::empty(settings, 1);
        let frame = build_frame(&state);
        assert_eq!(frame.segment_count(), SHIP_OUTLINE.len() + 4);
    }

    #[test]
    fn test_hud_and_asteroid_labels() {
        let mut state = GameState::empty(Settings::default(), 1);
        state.spawn_asteroid(Vec2::new(100.0, 100.0), 0.0, 60.0, AsteroidSize::Medium);
        let frame = build_frame(&state);

        assert!(frame.texts.iter().any(|t| t.text == "Medium 60.0"));
        assert!(frame.texts.iter().any(|t| t.text == "Number of asteroids: 1"));
        assert!(frame.texts.iter().all(|t| !t.centered));
    }

    #[test]
    fn test_banners() {
        let mut state = GameState::empty(quiet_settings(), 1);
        state.phase = GamePhase::GameOver;
        let frame = build_frame(&state);
        assert_eq!(frame.texts.len(), 1);
        assert_eq!(frame.texts[0].text, "GAME OVER");
        assert!(frame.texts[0].centered);
        assert_eq!(frame.texts[0].position, Vec2::new(400.0, 225.0));

        state.phase = GamePhase::Won;
        assert_eq!(build_frame(&state).texts[0].text, "YOU WIN");

        // Pause wins over the terminal banner
        state.paused = true;
        assert_eq!(build_frame(&state).texts[0].text, "PAUSE");
    }
}
