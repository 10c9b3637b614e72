//! Data-driven game balance
//!
//! Every physics and pacing constant the simulation reads lives here so a
//! session can be re-tuned from settings JSON without a rebuild.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Balance values for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    /// Also the ground level: the actor and obstacles rest on `y == field_height`
    pub field_height: f32,

    // === Actor ===
    pub actor_x: f32,
    pub actor_width: f32,
    pub actor_height: f32,
    pub jump_impulse: f32,
    pub gravity: f32,

    // === Scrolling ===
    pub initial_speed: f32,
    pub speed_increment: f32,

    // === Spawning ===
    pub spawn_interval_ms: f64,
    pub spawn_jitter_ms: f64,
    pub obstacle_base_width: f32,
    pub obstacle_width_variation: f32,
    pub obstacle_base_height: f32,
    pub obstacle_height_variation: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            actor_x: ACTOR_X,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            jump_impulse: JUMP_IMPULSE,
            gravity: GRAVITY,

            initial_speed: INITIAL_SCROLL_SPEED,
            speed_increment: SCROLL_SPEED_INCREMENT,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_jitter_ms: SPAWN_JITTER_MS,
            obstacle_base_width: OBSTACLE_BASE_WIDTH,
            obstacle_width_variation: OBSTACLE_WIDTH_VARIATION,
            obstacle_base_height: OBSTACLE_BASE_HEIGHT,
            obstacle_height_variation: OBSTACLE_HEIGHT_VARIATION,
        }
    }
}

impl Tuning {
    /// Ground level (bottom edge of the field)
    #[inline]
    pub fn ground_level(&self) -> f32 {
        self.field_height
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("actor_width", self.actor_width)?;
        positive("actor_height", self.actor_height)?;
        positive("jump_impulse", self.jump_impulse)?;
        positive("gravity", self.gravity)?;
        non_negative("actor_x", self.actor_x)?;
        non_negative("initial_speed", self.initial_speed)?;
        non_negative("speed_increment", self.speed_increment)?;
        positive("obstacle_base_width", self.obstacle_base_width)?;
        positive("obstacle_base_height", self.obstacle_base_height)?;
        non_negative("obstacle_width_variation", self.obstacle_width_variation)?;
        non_negative("obstacle_height_variation", self.obstacle_height_variation)?;

        if !(self.spawn_interval_ms.is_finite() && self.spawn_interval_ms > 0.0) {
            return Err(invalid("spawn_interval_ms", "must be a positive number"));
        }
        if !(self.spawn_jitter_ms.is_finite() && self.spawn_jitter_ms >= 0.0) {
            return Err(invalid("spawn_jitter_ms", "must not be negative"));
        }
        if self.spawn_jitter_ms > self.spawn_interval_ms {
            return Err(invalid("spawn_jitter_ms", "must not exceed spawn_interval_ms"));
        }
        if self.actor_height > self.field_height {
            return Err(invalid("actor_height", "actor does not fit in the field"));
        }
        if self.actor_x + self.actor_width > self.field_width {
            return Err(invalid("actor_x", "actor starts outside the field"));
        }
        if self.obstacle_base_height + self.obstacle_height_variation > self.field_height {
            return Err(invalid("obstacle_base_height", "obstacles can outgrow the field"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> SettingsError {
    SettingsError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be a positive number"))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must not be negative"))
    }
}
