//! Session state and core simulation types
//!
//! A `Session` exclusively owns every entity of one game. Restart replaces it
//! wholesale.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bricks::BrickField;
use super::paddle::Paddle;
use crate::Config;

/// Macro state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play
    Active,
    /// Every brick destroyed
    Won,
    /// Out of lives
    Lost,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball rebounded off the paddle with the given steering offset
    PaddleHit { offset: f32 },
    /// Brick at `index` (creation order) was destroyed
    BrickDestroyed { index: usize, points: u32 },
    /// Ball fell past the floor
    LifeLost { remaining: u32 },
    /// Ball recentred and relaunched
    BallReset,
    /// Last brick destroyed
    Won,
    /// Last life lost
    GameOver,
    /// A fresh session replaced an ended one
    Restarted,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Settings this session was built from
    pub config: Config,
    /// Seed the session RNG started from
    pub seed: u64,
    /// Only source of randomness: ball launch angles
    pub rng: Pcg32,
    pub score: u32,
    pub lives: u32,
    pub game_over: bool,
    pub win: bool,
    /// Simulation tick counter (Active ticks only)
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickField,
}

impl Session {
    /// Create a new session with the given seed
    pub fn new(config: Config, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let paddle = Paddle::new(&config);
        let ball = Ball::new(&config, &mut rng);
        let bricks = BrickField::new(&config);
        log::info!(
            "New session: seed={}, {} bricks, {} lives",
            seed,
            bricks.len(),
            config.starting_lives
        );
        Self {
            lives: config.starting_lives,
            config,
            seed,
            rng,
            score: 0,
            game_over: false,
            win: false,
            time_ticks: 0,
            paddle,
            ball,
            bricks,
        }
    }

    /// Session seeded from `config.seed`, or from the OS if unset.
    ///
    /// Fails if the config does not validate.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self::new(config, seed))
    }

    pub fn phase(&self) -> GamePhase {
        match (self.game_over, self.win) {
            (false, _) => GamePhase::Active,
            (true, true) => GamePhase::Won,
            (true, false) => GamePhase::Lost,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.game_over
    }

    /// Discard this session and start over with the same config.
    ///
    /// The new seed is drawn from this session's RNG, so a run replays
    /// exactly from its first seed.
    pub fn restart(&mut self) {
        let seed = rand::Rng::random(&mut self.rng);
        log::info!("Restarting (final score {})", self.score);
        *self = Self::new(self.config.clone(), seed);
    }
}
