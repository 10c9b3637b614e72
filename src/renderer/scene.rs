//! Scene painter

use glam::Vec2;

use super::{Color, Surface};
use crate::sim::{Aabb, GamePhase, GameState, SpriteId};

/// Draw one entity: its sprite if loaded, otherwise a filled rectangle
pub fn draw_entity<S: Surface + ?Sized>(
    surface: &mut S,
    rect: Aabb,
    sprite: Option<SpriteId>,
    fallback: Color,
) {
    match sprite {
        Some(sprite) if surface.sprite_ready(sprite) => surface.draw_sprite(sprite, rect),
        _ => surface.fill_rect(rect, fallback),
    }
}

/// Text shown over the field after a collision
pub fn game_over_message(key_label: &str) -> String {
    format!("Game Over! Press {} to Restart", key_label)
}

/// Paint the whole field for the current state
pub fn render_frame<S: Surface + ?Sized>(surface: &mut S, state: &GameState, key_label: &str) {
    surface.clear();

    draw_entity(surface, state.actor.bounds(), state.actor.sprite, Color::ACTOR);
    for obstacle in &state.obstacles {
        draw_entity(surface, obstacle.bounds(), obstacle.sprite, Color::OBSTACLE);
    }

    if state.phase == GamePhase::GameOver {
        let center = Vec2::new(state.tuning.field_width, state.tuning.field_height) / 2.0;
        surface.fill_text(&game_over_message(key_label), center, Color::TEXT);
    }
}
