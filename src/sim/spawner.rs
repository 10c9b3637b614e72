//! Procedural obstacle spawning
//!
//! The random source is passed in by the caller so sessions can be replayed
//! from a seed.

use rand::Rng;

use super::obstacle::Obstacle;
use super::state::SpriteId;
use crate::tuning::Tuning;

/// Countdown-driven obstacle generator
#[derive(Debug, Clone, PartialEq)]
pub struct Spawner {
    /// Time until the next spawn (ms)
    pub countdown: f64,
    base_interval: f64,
    jitter: f64,
    /// New obstacles appear with their left edge here
    spawn_x: f32,
    ground_level: f32,
    base_width: f32,
    width_variation: f32,
    base_height: f32,
    height_variation: f32,
    /// Sprite handed to every spawned obstacle
    pub sprite: Option<SpriteId>,
}

impl Spawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            countdown: tuning.spawn_interval_ms,
            base_interval: tuning.spawn_interval_ms,
            jitter: tuning.spawn_jitter_ms,
            spawn_x: tuning.field_width,
            ground_level: tuning.ground_level(),
            base_width: tuning.obstacle_base_width,
            width_variation: tuning.obstacle_width_variation,
            base_height: tuning.obstacle_base_height,
            height_variation: tuning.obstacle_height_variation,
            sprite: None,
        }
    }

    /// Restore the countdown to the base interval
    pub fn reset(&mut self) {
        self.countdown = self.base_interval;
    }

    /// Run the countdown by `elapsed` ms, spawning at most one obstacle
    ///
    /// Non-positive `elapsed` leaves the countdown untouched.
    pub fn advance<R: Rng + ?Sized>(&mut self, elapsed: f64, rng: &mut R) -> Option<Obstacle> {
        if elapsed <= 0.0 {
            return None;
        }

        self.countdown -= elapsed;
        if self.countdown > 0.0 {
            return None;
        }

        let obstacle = self.spawn(rng);
        self.countdown = self.next_interval(rng);
        log::debug!(
            "Spawned {:.1}x{:.1} obstacle, next in {:.0} ms",
            obstacle.size.x,
            obstacle.size.y,
            self.countdown
        );
        Some(obstacle)
    }

    /// Build one ground-aligned obstacle at the right edge of the field
    pub fn spawn<R: Rng + ?Sized>(&self, rng: &mut R) -> Obstacle {
        let width = self.base_width + rng.random::<f32>() * self.width_variation;
        let height = self.base_height + rng.random::<f32>() * self.height_variation;
        Obstacle::new(self.spawn_x, self.ground_level - height, width, height).with_sprite(self.sprite)
    }

    /// Base interval ± jitter
    fn next_interval<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.base_interval + rng.random::<f64>() * 2.0 * self.jitter - self.jitter
    }
}
