//! Ground-aligned obstacles scrolling toward the actor

use glam::Vec2;

use super::collision::Aabb;
use super::state::SpriteId;

/// A rectangular hazard
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub sprite: Option<SpriteId>,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            sprite: None,
        }
    }

    pub fn with_sprite(mut self, sprite: Option<SpriteId>) -> Self {
        self.sprite = sprite;
        self
    }

    /// Scroll left by the session's current speed
    #[inline]
    pub fn update(&mut self, scroll_speed: f32) {
        self.pos.x -= scroll_speed;
    }

    /// x of the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Fully past the left edge of the field
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.right() <= 0.0
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacle_moves_left_by_speed() {
        let mut obstacle = Obstacle::new(300.0, 170.0, 20.0, 30.0);
        obstacle.update(3.0);
        assert_eq!(obstacle.pos.x, 297.0);
        obstacle.update(3.0);
        assert_eq!(obstacle.pos.x, 294.0);
        // Only x changes
        assert_eq!(obstacle.pos.y, 170.0);
        assert_eq!(obstacle.size, Vec2::new(20.0, 30.0));
    }

    #[test]
    fn test_off_screen_boundary() {
        let mut obstacle = Obstacle::new(1.0, 170.0, 20.0, 30.0);
        assert!(!obstacle.is_off_screen());
        obstacle.pos.x = -19.5;
        assert!(!obstacle.is_off_screen());
        obstacle.pos.x = -20.0;
        assert!(obstacle.is_off_screen());
    }
}
