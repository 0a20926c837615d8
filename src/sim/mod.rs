//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only (board setup)
//! - No I/O, no rendering, no global state
//! - Each turn fully resolves before the next begins

pub mod geometry;
pub mod intersection;
pub mod shot;
pub mod state;
pub mod trajectory;
pub mod turn;

pub use geometry::{Aabb, AabbEdges};
pub use intersection::{first_index_in_box, truncate_at_intersection};
pub use shot::{Shot, ShotOutcome, resolve};
pub use state::{GamePhase, GameState, Physics, Player};
pub use trajectory::{LaunchParams, Trajectory, sample, sample_default};
pub use turn::{TurnInput, TurnReport, next_phase, take_turn};
