//! Error types
//!
//! The simulation core reports malformed inputs through [`SimError`]; shot
//! outcomes (miss, blocked, hit) are never errors.

use std::io;

use thiserror::Error;

use crate::sim::Player;

/// Errors raised by the simulation core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Launch parameters that cannot produce a finite trajectory
    #[error("invalid launch parameters: {0}")]
    InvalidLaunch(String),

    /// Fewer than two samples cannot span launch and impact; too many
    /// cannot be allocated
    #[error("sample count out of range: {0}")]
    InvalidSampleCount(usize),

    /// A box whose edges are not strictly ordered
    #[error("degenerate box: left={left}, right={right}, bottom={bottom}, top={top}")]
    DegenerateBox {
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
    },

    /// Board settings that cannot produce a game
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A shot was attempted after the game ended
    #[error("game already won by player {}", .winner.number())]
    GameFinished { winner: Player },
}

/// Errors loading or validating [`crate::Settings`]
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Errors surfaced by the match loop
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
