//! Frame-driven game controller
//!
//! Owns the session state and the platform collaborators. The host calls
//! [`Game::on_frame`] from its display-refresh callback and
//! [`Game::activate`] from the key handler; the two never overlap.

use crate::platform::{FrameHandle, FrameScheduler, ScoreSink, score_text};
use crate::renderer::{Surface, render_frame};
use crate::sim::{Activation, FrameOutcome, GameState, autopilot, tick};

/// Game instance holding all state
pub struct Game<S, D, F> {
    pub state: GameState,
    surface: S,
    score: D,
    scheduler: F,
    /// Frame callback currently registered with the host
    pending: Option<FrameHandle>,
    /// Key name shown in the game-over prompt
    key_label: String,
    /// Autopilot plays when set
    pub demo_mode: bool,
}

impl<S: Surface, D: ScoreSink, F: FrameScheduler> Game<S, D, F> {
    pub fn new(
        state: GameState,
        surface: S,
        score: D,
        scheduler: F,
        key_label: impl Into<String>,
    ) -> Self {
        Self {
            state,
            surface,
            score,
            scheduler,
            pending: None,
            key_label: key_label.into(),
            demo_mode: false,
        }
    }

    /// Show the initial score and request the first frame
    pub fn start(&mut self) {
        log::info!("Session starting with seed: {}", self.state.seed);
        self.score.set_text(&score_text(self.state.score));
        self.schedule();
    }

    /// Display-frame callback
    pub fn on_frame(&mut self, timestamp: f64) -> FrameOutcome {
        // The callback that invoked us is spent
        self.pending = None;

        if self.demo_mode && autopilot::should_jump(&self.state) {
            self.state.actor.jump();
        }

        let outcome = tick(&mut self.state, timestamp);
        match outcome {
            FrameOutcome::Advanced => {
                render_frame(&mut self.surface, &self.state, &self.key_label);
                self.score.set_text(&score_text(self.state.score));
            }
            FrameOutcome::Collided { index } => {
                render_frame(&mut self.surface, &self.state, &self.key_label);
                log::info!("Hit obstacle #{} with score {}", index, self.state.score);
            }
            FrameOutcome::Primed | FrameOutcome::Halted => {}
        }

        if outcome.wants_next_frame() {
            self.schedule();
        }
        outcome
    }

    /// The action key: jump while running, restart after game over
    pub fn activate(&mut self) -> Activation {
        let activation = self.state.activate();
        if activation == Activation::Restart {
            self.resume();
        }
        activation
    }

    /// Reset the session and resume frame scheduling (safe in any phase)
    pub fn restart(&mut self) {
        self.state.restart();
        self.resume();
    }

    /// Flip demo mode, returning the new setting
    pub fn toggle_demo(&mut self) -> bool {
        self.demo_mode = !self.demo_mode;
        self.demo_mode
    }

    /// Is a frame callback registered?
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn score_sink(&self) -> &D {
        &self.score
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    fn resume(&mut self) {
        self.score.set_text(&score_text(0));
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.schedule();
        log::info!("Game restarted");
    }

    fn schedule(&mut self) {
        match self.scheduler.request_frame() {
            Ok(handle) => self.pending = Some(handle),
            Err(e) => log::error!("Could not schedule frame: {}", e),
        }
    }
}
