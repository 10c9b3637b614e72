//! Demo-mode autopilot
//!
//! A simple reactive policy: jump once the nearest obstacle ahead is about
//! `LEAD_FRAMES` frames away from the actor's front edge.

use super::state::{GamePhase, GameState};

/// Frames of warning before an obstacle reaches the actor
pub const LEAD_FRAMES: f32 = 8.0;

/// Should the actor jump this frame?
pub fn should_jump(state: &GameState) -> bool {
    if state.phase != GamePhase::Running || state.actor.airborne {
        return false;
    }

    let front = state.actor.pos.x + state.actor.size.x;
    let lead = state.speed * LEAD_FRAMES;

    state
        .obstacles
        .iter()
        .filter(|o| o.right() > state.actor.pos.x)
        .map(|o| o.pos.x - front)
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .is_some_and(|gap| gap <= lead)
}
