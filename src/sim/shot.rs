//! Shot resolution
//!
//! Samples a trajectory once and classifies it against the obstacle and the
//! target. The obstacle is always checked first: a path that clips the
//! obstacle is blocked even if it would reach the target earlier in time.

use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use super::intersection::{first_index_in_box, truncate_at_intersection};
use super::trajectory::{LaunchParams, Trajectory, sample};
use crate::error::SimError;

/// How a shot ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// Landed without touching the target or the obstacle
    Miss,
    /// Stopped by the obstacle
    ObstacleBlocked,
    /// Reached the target
    Hit,
}

impl ShotOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShotOutcome::Miss => "miss",
            ShotOutcome::ObstacleBlocked => "blocked by obstacle",
            ShotOutcome::Hit => "hit",
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

/// A resolved shot: what happened and the part of the path to display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub outcome: ShotOutcome,
    /// Trajectory up to (not including) the first sample inside the box struck
    pub path: Trajectory,
    /// Sample index where the path entered the obstacle or target
    pub impact_index: Option<usize>,
}

/// Fire one projectile at `target` with `obstacle` in the way
pub fn resolve(
    target: &Aabb,
    obstacle: &Aabb,
    launch: &LaunchParams,
    sample_count: usize,
) -> Result<Shot, SimError> {
    let path = sample(launch, sample_count)?;

    if let Some(index) = first_index_in_box(&path, obstacle) {
        return Ok(Shot {
            outcome: ShotOutcome::ObstacleBlocked,
            path: truncate_at_intersection(path, obstacle),
            impact_index: Some(index),
        });
    }

    match first_index_in_box(&path, target) {
        None => Ok(Shot {
            outcome: ShotOutcome::Miss,
            path,
            impact_index: None,
        }),
        Some(index) => Ok(Shot {
            outcome: ShotOutcome::Hit,
            path: truncate_at_intersection(path, target),
            impact_index: Some(index),
        }),
    }
}
