//! Rendering module
//!
//! The game draws onto any [`Surface`]: filled rectangles by default, images
//! when an entity carries a sprite the surface has finished loading.

pub mod scene;

pub use scene::{draw_entity, game_over_message, render_frame};

use glam::Vec2;

use crate::sim::{Aabb, SpriteId};

/// CSS color string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub &'static str);

impl Color {
    pub const ACTOR: Color = Color("green");
    pub const OBSTACLE: Color = Color("red");
    pub const TEXT: Color = Color("black");
}

/// 2-D drawing target of fixed logical size
pub trait Surface {
    /// Erase the whole surface
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Aabb, color: Color);

    /// Is the sprite's image loaded and drawable?
    fn sprite_ready(&self, sprite: SpriteId) -> bool;

    fn draw_sprite(&mut self, sprite: SpriteId, rect: Aabb);

    /// Draw text centred on `center`
    fn fill_text(&mut self, text: &str, center: Vec2, color: Color);
}
