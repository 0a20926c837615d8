//! Tank Duel - a two-player turn-based artillery game
//!
//! Core modules:
//! - `sim`: Pure simulation (trajectories, box intersection, shot resolution, turns)
//! - `renderer`: Terminal plot of the board and trajectories
//! - `input`: Numeric input sources (console prompt, scripted replay)
//! - `settings`: Data-driven game configuration
//! - `game`: Match loop wiring the simulation to its collaborators

pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{GameError, SettingsError, SimError};
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Board extent on both axes (the board spans 0..BOARD_SIZE)
    pub const BOARD_SIZE: f64 = 100.0;

    /// Gravitational acceleration (units/s²)
    pub const DEFAULT_GRAVITY: f64 = 9.8;
    /// Samples per trajectory, launch to ground impact inclusive
    pub const DEFAULT_SAMPLE_COUNT: usize = 10_000;
    /// Upper bound on samples per trajectory
    pub const MAX_SAMPLE_COUNT: usize = 1_000_000;
    /// Wind is drawn uniformly from [-WIND_LIMIT, WIND_LIMIT] once per game
    pub const WIND_LIMIT: f64 = 10.0;

    /// Tank footprint
    pub const TANK_WIDTH: f64 = 5.0;
    pub const TANK_HEIGHT: f64 = 5.0;
    /// Range of the left edge of each tank (left and right halves of the board)
    pub const TANK_ONE_SPAN: [f64; 2] = [0.0, 35.0];
    pub const TANK_TWO_SPAN: [f64; 2] = [60.0, 95.0];

    /// Central obstacle as [left, right, bottom, top]
    pub const OBSTACLE: [f64; 4] = [40.0, 60.0, 0.0, 50.0];

    /// Accepted operator input
    pub const VELOCITY_RANGE: [f64; 2] = [0.0, 100.0];
    pub const ANGLE_RANGE: [f64; 2] = [0.0, 180.0];
}

/// Round to one decimal place for display (wind readout)
#[inline]
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
