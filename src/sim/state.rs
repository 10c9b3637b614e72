//! Game state and core simulation types
//!
//! Everything the frame loop reads or writes lives in one `GameState`;
//! nothing is kept in module-level globals.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::actor::Actor;
use super::obstacle::Obstacle;
use super::spawner::Spawner;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Frames are being simulated
    Running,
    /// Actor hit an obstacle; waiting for restart
    GameOver,
}

/// Image resource an entity may be drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Actor,
    Obstacle,
}

/// What the single input event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Jump,
    Restart,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn randomness
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub actor: Actor,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    /// Frames survived
    pub score: u64,
    /// Current scroll speed (units/frame)
    pub speed: f32,
    /// Timestamp of the previous frame; `None` until the first frame after (re)start
    pub last_time: Option<f64>,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            actor: Actor::new(&tuning),
            obstacles: Vec::new(),
            spawner: Spawner::new(&tuning),
            score: 0,
            speed: tuning.initial_speed,
            last_time: None,
            phase: GamePhase::Running,
            tuning,
        }
    }

    /// Assign optional sprites to the actor and all future obstacles
    pub fn set_sprites(&mut self, actor: Option<SpriteId>, obstacle: Option<SpriteId>) {
        self.actor.sprite = actor;
        self.spawner.sprite = obstacle;
        for o in &mut self.obstacles {
            o.sprite = obstacle;
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Reset the session in place and resume running
    ///
    /// Safe in any phase. The RNG stream continues so consecutive runs differ.
    pub fn restart(&mut self) {
        self.actor.reset();
        self.obstacles.clear();
        self.spawner.reset();
        self.score = 0;
        self.speed = self.tuning.initial_speed;
        self.last_time = None;
        self.phase = GamePhase::Running;
    }

    /// The action key: jump while running, restart after game over
    pub fn activate(&mut self) -> Activation {
        match self.phase {
            GamePhase::Running => {
                self.actor.jump();
                Activation::Jump
            }
            GamePhase::GameOver => {
                self.restart();
                Activation::Restart
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(1, Tuning::default());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, 4.0);
        assert!(state.obstacles.is_empty());
        assert!(state.last_time.is_none());
        assert_eq!(state.spawner.countdown, 1200.0);
        assert!(!state.actor.airborne);
    }

    #[test]
    fn test_activate_jumps_while_running() {
        let mut state = GameState::new(1, Tuning::default());
        assert_eq!(state.activate(), Activation::Jump);
        assert!(state.actor.airborne);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_activate_restarts_after_game_over() {
        let mut state = GameState::new(1, Tuning::default());
        state.score = 250;
        state.speed = 4.25;
        state.obstacles.push(Obstacle::new(60.0, 170.0, 20.0, 30.0));
        state.last_time = Some(5000.0);
        state.phase = GamePhase::GameOver;

        assert_eq!(state.activate(), Activation::Restart);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, 4.0);
        assert!(state.obstacles.is_empty());
        assert!(state.last_time.is_none());
        assert!(!state.actor.airborne);
    }

    #[test]
    fn test_restart_while_running_is_safe() {
        let mut state = GameState::new(1, Tuning::default());
        state.actor.jump();
        state.actor.update();
        state.spawner.countdown = 10.0;
        state.restart();
        assert_eq!(state.actor, Actor::new(&Tuning::default()));
        assert_eq!(state.spawner.countdown, 1200.0);
        assert!(state.is_running());
    }

    #[test]
    fn test_sprites_survive_restart() {
        let mut state = GameState::new(1, Tuning::default());
        state.set_sprites(Some(SpriteId::Actor), Some(SpriteId::Obstacle));
        state.restart();
        assert_eq!(state.actor.sprite, Some(SpriteId::Actor));
        assert_eq!(state.spawner.sprite, Some(SpriteId::Obstacle));
    }
}
