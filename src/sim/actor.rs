//! The player-controlled jumping actor

use glam::Vec2;

use super::collision::Aabb;
use super::state::SpriteId;
use crate::tuning::Tuning;

/// The jumping character
///
/// Rests on the ground until `jump` is called, then follows a ballistic arc
/// (semi-implicit Euler, one step per frame) until it lands again.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (units/frame, negative = up)
    pub vel_y: f32,
    /// Mid-jump flag
    pub airborne: bool,
    pub jump_impulse: f32,
    pub gravity: f32,
    /// y coordinate of the ground the actor stands on
    pub ground_level: f32,
    /// Optional image to draw instead of the fallback rectangle
    pub sprite: Option<SpriteId>,
}

impl Actor {
    pub fn new(tuning: &Tuning) -> Self {
        let size = Vec2::new(tuning.actor_width, tuning.actor_height);
        let ground_level = tuning.ground_level();
        Self {
            pos: Vec2::new(tuning.actor_x, ground_level - size.y),
            size,
            vel_y: 0.0,
            airborne: false,
            jump_impulse: tuning.jump_impulse,
            gravity: tuning.gravity,
            ground_level,
            sprite: None,
        }
    }

    /// y of the top edge when standing on the ground
    #[inline]
    pub fn resting_y(&self) -> f32 {
        self.ground_level - self.size.y
    }

    /// Start a jump (no double-jump)
    pub fn jump(&mut self) {
        if !self.airborne {
            self.airborne = true;
            self.vel_y = -self.jump_impulse;
        }
    }

    /// Advance one frame of the jump arc, landing when the ground is reached
    pub fn update(&mut self) {
        if !self.airborne {
            return;
        }

        self.pos.y += self.vel_y;
        self.vel_y += self.gravity;

        // Landed
        if self.pos.y + self.size.y >= self.ground_level {
            self.land();
        }
    }

    /// Return to the resting pose (used on restart)
    pub fn reset(&mut self) {
        self.land();
    }

    fn land(&mut self) {
        self.pos.y = self.resting_y();
        self.airborne = false;
        self.vel_y = 0.0;
    }

    /// Bounding box for collision
    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_actor_initial_state() {
        let actor = Actor::new(&Tuning::default());
        assert_eq!(actor.pos, Vec2::new(50.0, 160.0));
        assert_eq!(actor.size, Vec2::new(40.0, 40.0));
        assert_eq!(actor.vel_y, 0.0);
        assert!(!actor.airborne);
        assert_eq!(actor.jump_impulse, 12.0);
        assert_eq!(actor.gravity, 0.7);
    }

    #[test]
    fn test_jump_sets_velocity() {
        let mut actor = Actor::new(&Tuning::default());
        actor.jump();
        assert!(actor.airborne);
        assert_eq!(actor.vel_y, -actor.jump_impulse);
    }

    #[test]
    fn test_no_double_jump() {
        let mut actor = Actor::new(&Tuning::default());
        actor.jump();
        actor.update();
        actor.update();
        let before = actor.clone();
        actor.jump();
        assert_eq!(actor, before);
    }

    #[test]
    fn test_update_on_ground_is_noop() {
        let mut actor = Actor::new(&Tuning::default());
        let before = actor.clone();
        actor.update();
        assert_eq!(actor, before);
    }

    #[test]
    fn test_jump_arc_rises_then_falls_then_lands() {
        let mut actor = Actor::new(&Tuning::default());
        let rest = actor.pos.y;
        actor.jump();

        // Rising: y strictly decreases while velocity is negative
        let mut prev = actor.pos.y;
        let mut frames = 0;
        while actor.vel_y < 0.0 {
            actor.update();
            frames += 1;
            assert!(actor.pos.y < prev);
            prev = actor.pos.y;
        }
        assert!(actor.pos.y < rest);

        // Falling: y strictly increases until landing
        while actor.airborne {
            actor.update();
            frames += 1;
            assert!(actor.pos.y > prev);
            prev = actor.pos.y;
            assert!(frames < 1000, "actor never landed");
        }

        assert_eq!(actor.pos.y, rest);
        assert_eq!(actor.vel_y, 0.0);
        assert!(!actor.airborne);
    }

    #[test]
    fn test_reset_mid_jump() {
        let mut actor = Actor::new(&Tuning::default());
        actor.jump();
        for _ in 0..5 {
            actor.update();
        }
        actor.reset();
        assert_eq!(actor, Actor::new(&Tuning::default()));
    }

    proptest! {
        #[test]
        fn prop_actor_always_lands(impulse in 0.1f32..50.0, gravity in 0.05f32..5.0) {
            let tuning = Tuning { jump_impulse: impulse, gravity, ..Default::default() };
            let mut actor = Actor::new(&tuning);
            actor.jump();

            // Apex after impulse/gravity frames; the descent takes no longer
            let bound = (4.0 * impulse / gravity).ceil() as usize + 4;
            let mut frames = 0;
            while actor.airborne {
                actor.update();
                frames += 1;
                prop_assert!(actor.pos.y + actor.size.y <= actor.ground_level);
                prop_assert!(frames <= bound);
            }
            prop_assert_eq!(actor.pos.y, actor.resting_y());
        }
    }
}
