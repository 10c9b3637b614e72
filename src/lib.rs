//! Dino Runner - A side-scrolling reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actor physics, obstacles, collisions, game state)
//! - `renderer`: Drawing surface abstraction and scene painter
//! - `platform`: Browser/native platform abstraction (score text, frame scheduling)
//! - `game`: Frame-driven controller tying the simulation to the platform
//! - `tuning`: Data-driven game balance
//! - `settings`: Key binding, sprites and tuning, loaded from JSON

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{PlatformError, SettingsError};
pub use game::Game;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical units)
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 200.0;

    /// Actor defaults - rests on the bottom edge of the field
    pub const ACTOR_X: f32 = 50.0;
    pub const ACTOR_WIDTH: f32 = 40.0;
    pub const ACTOR_HEIGHT: f32 = 40.0;
    /// Upward velocity applied on jump (units/frame)
    pub const JUMP_IMPULSE: f32 = 12.0;
    /// Downward acceleration while airborne (units/frame²)
    pub const GRAVITY: f32 = 0.7;

    /// World scroll speed at session start (units/frame)
    pub const INITIAL_SCROLL_SPEED: f32 = 4.0;
    /// Added to scroll speed after every simulated frame
    pub const SCROLL_SPEED_INCREMENT: f32 = 0.001;

    /// Base time between obstacle spawns (ms)
    pub const SPAWN_INTERVAL_MS: f64 = 1200.0;
    /// Spawn interval is randomized within ±this (ms)
    pub const SPAWN_JITTER_MS: f64 = 300.0;

    /// Obstacle size ranges: base + [0, variation)
    pub const OBSTACLE_BASE_WIDTH: f32 = 20.0;
    pub const OBSTACLE_WIDTH_VARIATION: f32 = 15.0;
    pub const OBSTACLE_BASE_HEIGHT: f32 = 30.0;
    pub const OBSTACLE_HEIGHT_VARIATION: f32 = 30.0;

    /// Nominal display frame length used by headless runs (ms)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}
