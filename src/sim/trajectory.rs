//! Projectile trajectory sampling
//!
//! Flight under constant gravity with a constant horizontal wind drift:
//!
//!   x(t) = x0 + (v cos θ + wind) t
//!   y(t) = y0 + v sin θ t - g t² / 2
//!
//! The path is sampled at evenly spaced times from launch to the moment
//! y returns to 0, whatever the launch height.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_GRAVITY, DEFAULT_SAMPLE_COUNT, MAX_SAMPLE_COUNT};
use crate::error::SimError;

/// Everything needed to fire one projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchParams {
    /// Launch point; y must be above ground
    pub origin: DVec2,
    /// Muzzle speed (>= 0)
    pub speed: f64,
    /// Elevation in degrees, measured counter-clockwise from +x
    pub angle_deg: f64,
    /// Downward acceleration (> 0)
    pub gravity: f64,
    /// Horizontal drift added to the x velocity
    pub wind: f64,
}

impl LaunchParams {
    /// Launch with default gravity and no wind
    pub fn new(origin: DVec2, speed: f64, angle_deg: f64) -> Self {
        Self {
            origin,
            speed,
            angle_deg,
            gravity: DEFAULT_GRAVITY,
            wind: 0.0,
        }
    }

    pub fn with_wind(mut self, wind: f64) -> Self {
        self.wind = wind;
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Initial velocity including wind drift
    pub fn velocity(&self) -> DVec2 {
        let theta = self.angle_deg.to_radians();
        DVec2::new(
            self.speed * theta.cos() + self.wind,
            self.speed * theta.sin(),
        )
    }

    /// Reject parameters that would yield NaN or an unbounded flight
    pub fn validate(&self) -> Result<(), SimError> {
        let fields = [
            self.origin.x,
            self.origin.y,
            self.speed,
            self.angle_deg,
            self.gravity,
            self.wind,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(SimError::InvalidLaunch(format!(
                "non-finite value in {self:?}"
            )));
        }
        if self.origin.y <= 0.0 {
            return Err(SimError::InvalidLaunch(format!(
                "launch height must be above ground, got {}",
                self.origin.y
            )));
        }
        if self.gravity <= 0.0 {
            return Err(SimError::InvalidLaunch(format!(
                "gravity must be positive, got {}",
                self.gravity
            )));
        }
        if self.speed < 0.0 {
            return Err(SimError::InvalidLaunch(format!(
                "speed must be non-negative, got {}",
                self.speed
            )));
        }
        Ok(())
    }

    /// Time until y returns to 0 (positive root of g t²/2 - vy t - y0 = 0)
    pub fn flight_time(&self) -> f64 {
        let vy = self.velocity().y;
        let g = self.gravity;
        let y0 = self.origin.y;
        let root = (vy * vy + 2.0 * g * y0).sqrt();
        if vy >= 0.0 {
            (vy + root) / g
        } else {
            // Same root, rearranged to avoid cancellation between vy and root
            2.0 * y0 / (root - vy)
        }
    }

    /// Position at time `t` after launch
    #[inline]
    pub fn position_at(&self, t: f64) -> DVec2 {
        let v = self.velocity();
        DVec2::new(
            self.origin.x + v.x * t,
            self.origin.y + v.y * t - 0.5 * self.gravity * t * t,
        )
    }
}

/// A time-ordered sequence of projectile positions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trajectory {
    points: Vec<DVec2>,
    /// Time between consecutive samples
    dt: f64,
}

impl Trajectory {
    pub fn from_points(points: Vec<DVec2>, dt: f64) -> Self {
        Self { points, dt }
    }

    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<DVec2> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<DVec2> {
        self.points.last().copied()
    }

    /// Sample spacing in seconds
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Highest sample (first one on ties)
    pub fn apex(&self) -> Option<DVec2> {
        self.points
            .iter()
            .copied()
            .reduce(|best, p| if p.y > best.y { p } else { best })
    }

    /// Keep only the first `len` samples
    pub fn truncate(&mut self, len: usize) {
        self.points.truncate(len);
    }

    pub fn iter(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.points.iter().copied()
    }
}

/// Sample `sample_count` positions evenly in time from launch to ground impact
pub fn sample(launch: &LaunchParams, sample_count: usize) -> Result<Trajectory, SimError> {
    if !(2..=MAX_SAMPLE_COUNT).contains(&sample_count) {
        return Err(SimError::InvalidSampleCount(sample_count));
    }
    launch.validate()?;

    let tf = launch.flight_time();
    let steps = (sample_count - 1) as f64;
    let points = (0..sample_count)
        .map(|i| launch.position_at(tf * i as f64 / steps))
        .collect();

    Ok(Trajectory::from_points(points, tf / steps))
}

/// Sample with the default resolution
pub fn sample_default(launch: &LaunchParams) -> Result<Trajectory, SimError> {
    sample(launch, DEFAULT_SAMPLE_COUNT)
}
