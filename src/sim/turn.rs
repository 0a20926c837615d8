//! Turn engine
//!
//! Advances the match by exactly one shot. A miss or a blocked shot hands the
//! turn to the opponent; a hit ends the game.

use serde::{Deserialize, Serialize};

use super::shot::{Shot, ShotOutcome, resolve};
use super::state::{GamePhase, GameState, Player};
use super::trajectory::LaunchParams;
use crate::error::SimError;

/// Operator input for a single shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnInput {
    /// Muzzle speed
    pub velocity: f64,
    /// Angle as entered, before the per-player mirroring
    pub angle_deg: f64,
}

/// Everything that happened during one turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub shooter: Player,
    pub launch: LaunchParams,
    pub shot: Shot,
    /// Phase after the shot
    pub phase: GamePhase,
}

impl TurnReport {
    pub fn outcome(&self) -> ShotOutcome {
        self.shot.outcome
    }
}

/// Fire the active player's shot and advance the state machine
pub fn take_turn(state: &mut GameState, input: TurnInput) -> Result<TurnReport, SimError> {
    let shooter = match state.phase {
        GamePhase::AwaitingShot(player) => player,
        GamePhase::GameOver { winner } => return Err(SimError::GameFinished { winner }),
    };

    let launch = state.launch_for(shooter, input.velocity, input.angle_deg);
    let target = state.tank(shooter.other());
    let shot = resolve(target, &state.obstacle, &launch, state.physics.sample_count)?;

    state.shots_fired += 1;
    state.phase = next_phase(shooter, shot.outcome);

    log::debug!(
        "Shot {} by player {}: v={:.1} angle={:.1} (launch {:.1}) -> {} ({} samples shown, apex y={:.1})",
        state.shots_fired,
        shooter.number(),
        input.velocity,
        input.angle_deg,
        launch.angle_deg,
        shot.outcome.as_str(),
        shot.path.len(),
        shot.path.apex().map_or(launch.origin.y, |p| p.y)
    );

    Ok(TurnReport {
        shooter,
        launch,
        shot,
        phase: state.phase,
    })
}

/// Phase following `shooter`'s shot with the given outcome
pub fn next_phase(shooter: Player, outcome: ShotOutcome) -> GamePhase {
    match outcome {
        ShotOutcome::Miss | ShotOutcome::ObstacleBlocked => GamePhase::AwaitingShot(shooter.other()),
        ShotOutcome::Hit => GamePhase::GameOver { winner: shooter },
    }
}
