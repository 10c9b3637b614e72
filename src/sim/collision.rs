//! Axis-aligned bounding-box collision
//!
//! Both entity kinds are plain rectangles, so a strict AABB overlap test is
//! all the game needs. Edges that merely touch do not collide.

use glam::Vec2;

use super::actor::Actor;
use super::obstacle::Obstacle;

/// Axis-aligned rectangle (`min` = top-left, `max` = bottom-right; y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle from its top-left corner and size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap on both axes (zero-area contact is a miss)
    pub fn intersects(&self, other: &Aabb) -> bool {
        let intersects_x = self.min.x < other.max.x && self.max.x > other.min.x;
        let intersects_y = self.min.y < other.max.y && self.max.y > other.min.y;
        intersects_x && intersects_y
    }
}

/// Does the actor overlap the obstacle?
#[inline]
pub fn collides(actor: &Actor, obstacle: &Obstacle) -> bool {
    actor.bounds().intersects(&obstacle.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn actor() -> Actor {
        // x=50, y=160, 40x40
        Actor::new(&Tuning::default())
    }

    #[test]
    fn test_default_actor_box() {
        let a = actor();
        assert_eq!(a.bounds(), Aabb::new(Vec2::new(50.0, 160.0), Vec2::new(90.0, 200.0)));
    }

    #[test]
    fn test_overlapping_center() {
        let a = actor();
        let o = Obstacle::new(a.pos.x + a.size.x / 2.0, a.pos.y + a.size.y / 2.0, 20.0, 20.0);
        assert!(collides(&a, &o));
    }

    #[test]
    fn test_strictly_right() {
        let a = actor();
        let o = Obstacle::new(a.pos.x + a.size.x + 10.0, a.pos.y, 20.0, 20.0);
        assert!(!collides(&a, &o));
    }

    #[test]
    fn test_strictly_left() {
        let a = actor();
        let o = Obstacle::new(a.pos.x - 20.0 - 10.0, a.pos.y, 20.0, 20.0);
        assert!(!collides(&a, &o));
    }

    #[test]
    fn test_strictly_above() {
        let a = actor();
        let o = Obstacle::new(a.pos.x, a.pos.y - 20.0 - 10.0, 20.0, 20.0);
        assert!(!collides(&a, &o));
    }

    #[test]
    fn test_strictly_below() {
        let a = actor();
        let o = Obstacle::new(a.pos.x, a.pos.y + a.size.y + 10.0, 20.0, 20.0);
        assert!(!collides(&a, &o));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = actor();
        // Obstacle right edge == actor left edge
        let o = Obstacle::new(a.pos.x - 20.0, a.pos.y, 20.0, 20.0);
        assert!(!collides(&a, &o));
        // Obstacle left edge == actor right edge
        let o = Obstacle::new(a.pos.x + a.size.x, a.pos.y, 20.0, 20.0);
        assert!(!collides(&a, &o));
        // Obstacle bottom edge == actor top edge
        let o = Obstacle::new(a.pos.x, a.pos.y - 20.0, 20.0, 20.0);
        assert!(!collides(&a, &o));
    }

    #[test]
    fn test_slight_overlap_from_left() {
        let a = actor();
        // Spans 40..60, actor starts at 50
        let o = Obstacle::new(a.pos.x - 10.0, a.pos.y, 20.0, 20.0);
        assert!(collides(&a, &o));
    }

    #[test]
    fn test_box_size() {
        let b = Aabb::from_pos_size(Vec2::new(1.0, 1.0), Vec2::new(2.0, 3.0));
        assert_eq!(b.max, Vec2::new(3.0, 4.0));
        assert_eq!(b.size(), Vec2::new(2.0, 3.0));
    }

    proptest! {
        #[test]
        fn prop_intersection_is_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            aw in 1.0f32..50.0, ah in 1.0f32..50.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
            bw in 1.0f32..50.0, bh in 1.0f32..50.0,
        ) {
            let a = Aabb::from_pos_size(Vec2::new(ax, ay), Vec2::new(aw, ah));
            let b = Aabb::from_pos_size(Vec2::new(bx, by), Vec2::new(bw, bh));
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn prop_box_intersects_itself(
            x in -100.0f32..100.0, y in -100.0f32..100.0,
            w in 1.0f32..50.0, h in 1.0f32..50.0,
        ) {
            let a = Aabb::from_pos_size(Vec2::new(x, y), Vec2::new(w, h));
            prop_assert!(a.intersects(&a));
        }
    }
}
