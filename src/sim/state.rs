//! Game state and core simulation types
//!
//! Everything a match needs lives in [`GameState`]; it is created once at
//! setup and only mutated by [`super::turn::take_turn`].

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use super::trajectory::LaunchParams;
use crate::consts::{DEFAULT_GRAVITY, DEFAULT_SAMPLE_COUNT};
use crate::error::SimError;
use crate::settings::Settings;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opponent
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1 or 2
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Map an operator-entered angle to the physical launch angle.
    ///
    /// Both players aim as if facing right; player two's shot is mirrored so
    /// it flies leftward.
    pub fn launch_angle(self, entered_deg: f64) -> f64 {
        match self {
            Player::One => entered_deg,
            Player::Two => 180.0 - entered_deg,
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the given player to fire
    AwaitingShot(Player),
    /// A player hit the opponent; terminal
    GameOver { winner: Player },
}

/// Constants of motion shared by every shot in a game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    pub gravity: f64,
    pub sample_count: usize,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the board was generated from
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Tank footprints, indexed by player
    pub tanks: [Aabb; 2],
    /// Central obstacle
    pub obstacle: Aabb,
    /// Horizontal drift, fixed for the whole game
    pub wind: f64,
    pub physics: Physics,
    /// Shots fired so far
    pub shots_fired: u32,
}

impl GameState {
    /// Generate a board from `seed`: tanks at random offsets on opposite
    /// halves, the obstacle from settings, and the game's wind.
    ///
    /// Settings are validated first; empty spans or a negative wind limit
    /// are reported as [`SimError::InvalidSettings`].
    pub fn new(seed: u64, settings: &Settings) -> Result<Self, SimError> {
        settings
            .validate()
            .map_err(|e| SimError::InvalidSettings(e.to_string()))?;

        let mut rng = Pcg32::seed_from_u64(seed);

        let [w, h] = settings.tank_size;
        let [lo, hi] = settings.tank_one_span;
        let left_one = rng.random_range(lo..=hi);
        let [lo, hi] = settings.tank_two_span;
        let left_two = rng.random_range(lo..=hi);
        let wind = rng.random_range(-settings.wind_limit..=settings.wind_limit);

        let tanks = [
            Aabb::new(left_one, left_one + w, 0.0, h)?,
            Aabb::new(left_two, left_two + w, 0.0, h)?,
        ];

        log::debug!(
            "Board from seed {}: tank one at {:.2}, tank two at {:.2}, wind {:.2}",
            seed,
            left_one,
            left_two,
            wind
        );

        Ok(Self::with_layout(tanks, settings.obstacle, wind, settings.physics())
            .with_seed(seed))
    }

    /// Build a state from an explicit layout
    pub fn with_layout(tanks: [Aabb; 2], obstacle: Aabb, wind: f64, physics: Physics) -> Self {
        Self {
            seed: 0,
            phase: GamePhase::AwaitingShot(Player::One),
            tanks,
            obstacle,
            wind,
            physics,
            shots_fired: 0,
        }
    }

    fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Footprint of `player`'s tank
    pub fn tank(&self, player: Player) -> &Aabb {
        match player {
            Player::One => &self.tanks[0],
            Player::Two => &self.tanks[1],
        }
    }

    /// Player whose turn it is, `None` once the game is over
    pub fn active_player(&self) -> Option<Player> {
        match self.phase {
            GamePhase::AwaitingShot(player) => Some(player),
            GamePhase::GameOver { .. } => None,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            GamePhase::GameOver { winner } => Some(winner),
            GamePhase::AwaitingShot(_) => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Launch parameters for `player` firing with the entered speed and angle.
    ///
    /// The shot leaves from the centre of the player's own tank, with the
    /// angle mirrored for player two and the game's wind and gravity applied.
    pub fn launch_for(&self, player: Player, speed: f64, entered_angle_deg: f64) -> LaunchParams {
        LaunchParams::new(self.tank(player).center(), speed, player.launch_angle(entered_angle_deg))
            .with_gravity(self.physics.gravity)
            .with_wind(self.wind)
    }
}
