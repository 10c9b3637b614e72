//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One physics step per display frame
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod autopilot;
pub mod collision;
pub mod obstacle;
pub mod spawner;
pub mod state;
pub mod tick;

pub use actor::Actor;
pub use collision::{Aabb, collides};
pub use obstacle::Obstacle;
pub use spawner::Spawner;
pub use state::{Activation, GamePhase, GameState, SpriteId};
pub use tick::{FrameOutcome, tick};
