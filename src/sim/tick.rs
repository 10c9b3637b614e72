//! Per-frame simulation step
//!
//! Called once per display frame with the frame timestamp (ms). Physics runs
//! one step per frame; only the spawn countdown uses wall-clock time.

use super::collision::collides;
use super::state::{GamePhase, GameState};

/// Result of one call to [`tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// First frame since (re)start: timestamp recorded, nothing simulated
    Primed,
    /// Simulated a frame and the actor survived
    Advanced,
    /// The actor hit the obstacle at `index`; the session is now over
    Collided { index: usize },
    /// Session already over; nothing happened
    Halted,
}

impl FrameOutcome {
    /// Should the caller schedule another frame?
    #[inline]
    pub fn wants_next_frame(&self) -> bool {
        matches!(self, FrameOutcome::Primed | FrameOutcome::Advanced)
    }
}

/// Advance the game state by one display frame
pub fn tick(state: &mut GameState, timestamp: f64) -> FrameOutcome {
    if state.phase == GamePhase::GameOver {
        return FrameOutcome::Halted;
    }

    // Skip the first frame so a stale clock can't produce a huge delta
    let Some(last_time) = state.last_time else {
        state.last_time = Some(timestamp);
        return FrameOutcome::Primed;
    };
    let elapsed = timestamp - last_time;
    state.last_time = Some(timestamp);

    state.actor.update();

    if let Some(obstacle) = state.spawner.advance(elapsed, &mut state.rng) {
        state.obstacles.push(obstacle);
    }

    for (index, obstacle) in state.obstacles.iter_mut().enumerate() {
        obstacle.update(state.speed);
        if collides(&state.actor, obstacle) {
            // Obstacles after this one are left as they were
            state.phase = GamePhase::GameOver;
            log::info!("Game over: score {} at speed {:.3}", state.score, state.speed);
            return FrameOutcome::Collided { index };
        }
    }

    state.obstacles.retain(|o| !o.is_off_screen());
    state.score += 1;
    state.speed += state.tuning.speed_increment;

    FrameOutcome::Advanced
}
