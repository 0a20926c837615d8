//! Game settings
//!
//! Defaults reproduce the classic board: a 100x100 field, 5x5 tanks on
//! opposite halves, a 20-wide obstacle in the middle and wind up to ±10.
//! Settings can be loaded from a JSON file; missing fields keep their
//! defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::sim::{Aabb, Physics};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Downward acceleration
    pub gravity: f64,
    /// Samples per trajectory
    pub sample_count: usize,
    /// Wind is drawn from [-wind_limit, wind_limit]
    pub wind_limit: f64,

    // === Board ===
    /// Side length of the square board
    pub board_size: f64,
    /// Range of tank one's left edge
    pub tank_one_span: [f64; 2],
    /// Range of tank two's left edge
    pub tank_two_span: [f64; 2],
    /// Tank [width, height]
    pub tank_size: [f64; 2],
    pub obstacle: Aabb,

    // === Input ===
    /// Accepted muzzle speeds (inclusive)
    pub velocity_range: [f64; 2],
    /// Accepted angles in degrees (inclusive)
    pub angle_range: [f64; 2],

    // === Display ===
    /// Plot size in character cells
    pub plot_width: usize,
    pub plot_height: usize,
    /// ANSI colours
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            sample_count: DEFAULT_SAMPLE_COUNT,
            wind_limit: WIND_LIMIT,

            board_size: BOARD_SIZE,
            tank_one_span: TANK_ONE_SPAN,
            tank_two_span: TANK_TWO_SPAN,
            tank_size: [TANK_WIDTH, TANK_HEIGHT],
            obstacle: default_obstacle(),

            velocity_range: VELOCITY_RANGE,
            angle_range: ANGLE_RANGE,

            plot_width: 80,
            plot_height: 30,
            color: true,
        }
    }
}

fn default_obstacle() -> Aabb {
    Aabb::from_edges(OBSTACLE).expect("default obstacle is well-formed")
}

impl Settings {
    /// Load settings from a JSON file and validate them
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Save settings as pretty-printed JSON
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Physics constants for a new game
    pub fn physics(&self) -> Physics {
        Physics {
            gravity: self.gravity,
            sample_count: self.sample_count,
        }
    }

    /// Check every field; the first problem found is reported
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: String| Err(SettingsError::Invalid(msg));

        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return invalid(format!("gravity must be positive, got {}", self.gravity));
        }
        if !(2..=MAX_SAMPLE_COUNT).contains(&self.sample_count) {
            return invalid(format!(
                "sample_count must be between 2 and {MAX_SAMPLE_COUNT}, got {}",
                self.sample_count
            ));
        }
        if !(self.wind_limit.is_finite() && self.wind_limit >= 0.0) {
            return invalid(format!(
                "wind_limit must be non-negative, got {}",
                self.wind_limit
            ));
        }
        if !(self.board_size.is_finite() && self.board_size > 0.0) {
            return invalid(format!("board_size must be positive, got {}", self.board_size));
        }

        let [w, h] = self.tank_size;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return invalid(format!("tank_size must be positive, got {w}x{h}"));
        }
        for (name, span) in [
            ("tank_one_span", self.tank_one_span),
            ("tank_two_span", self.tank_two_span),
        ] {
            check_range(name, span)?;
            if span[0] < 0.0 || span[1] + w > self.board_size {
                return invalid(format!(
                    "{name} {span:?} places the tank outside the board"
                ));
            }
        }

        check_range("velocity_range", self.velocity_range)?;
        if self.velocity_range[0] < 0.0 {
            return invalid(format!(
                "velocity_range must not allow negative speeds, got {:?}",
                self.velocity_range
            ));
        }
        check_range("angle_range", self.angle_range)?;

        if self.plot_width < 2 || self.plot_height < 2 {
            return invalid(format!(
                "plot must be at least 2x2, got {}x{}",
                self.plot_width, self.plot_height
            ));
        }
        Ok(())
    }
}

fn check_range(name: &str, [lo, hi]: [f64; 2]) -> Result<(), SettingsError> {
    if lo.is_finite() && hi.is_finite() && lo <= hi {
        Ok(())
    } else {
        Err(SettingsError::Invalid(format!(
            "{name} must be an ordered pair of finite numbers, got [{lo}, {hi}]"
        )))
    }
}
